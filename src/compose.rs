pub(crate) mod compositor;
