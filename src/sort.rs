pub(crate) mod natural;
