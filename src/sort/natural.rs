use std::cmp::Ordering;

/// One piece of a [`NaturalKey`].
///
/// Variant order is load-bearing: a number sorts before text when the two ever
/// meet at the same position.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Token {
    /// A run of ASCII digits, compared by numeric value.
    Num(DigitRun),
    /// A run of non-digits, compared by code point.
    Text(String),
}

/// Arbitrary-length unsigned integer stored as its decimal digits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigitRun(String); // no leading zeros; "0" is stored as ""

impl DigitRun {
    fn new(digits: &str) -> Self {
        Self(digits.trim_start_matches('0').to_owned())
    }
}

impl Ord for DigitRun {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for DigitRun {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort key that orders strings the way people read them (`"layer2"` before `"layer10"`).
///
/// A key always starts and ends with a (possibly empty) [`Token::Text`], and text
/// and number tokens alternate in between, so tokens at the same position are
/// always the same kind.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct NaturalKey(Vec<Token>);

impl NaturalKey {
    /// Tokenize `s` on ASCII digit-run boundaries.
    pub fn new(s: &str) -> Self {
        let mut tokens = Vec::new();
        let mut rest = s;
        loop {
            let text_end = rest.find(|c: char| c.is_ascii_digit()).unwrap_or(rest.len());
            tokens.push(Token::Text(rest[..text_end].to_owned()));
            rest = &rest[text_end..];
            if rest.is_empty() {
                break;
            }
            let num_end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            tokens.push(Token::Num(DigitRun::new(&rest[..num_end])));
            rest = &rest[num_end..];
        }
        Self(tokens)
    }

    /// Tokens in key order.
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }
}

/// Compare two strings in natural order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    NaturalKey::new(a).cmp(&NaturalKey::new(b))
}

/// Return `keys` in natural order. Keys that compare equal keep their input order.
pub fn natural_sort<I, S>(keys: I) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<S> = keys.into_iter().collect();
    out.sort_by_cached_key(|k| NaturalKey::new(k.as_ref()));
    out
}

#[cfg(test)]
#[path = "../../tests/unit/sort/natural.rs"]
mod tests;
