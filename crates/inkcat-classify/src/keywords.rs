//! Ordered keyword cascades over lowercased product names.

/// One step of a cascade: `value` applies when any keyword is a substring.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<T> {
    pub keywords: &'static [&'static str],
    pub value: T,
}

/// Returns the value of the first rule with a keyword contained in `lower`.
///
/// Rules are evaluated in slice order; later rules only apply when every
/// earlier rule missed. `lower` must already be lowercased.
#[must_use]
pub fn first_match<T: Copy>(rules: &[KeywordRule<T>], lower: &str) -> Option<T> {
    rules
        .iter()
        .find(|rule| contains_any(lower, rule.keywords))
        .map(|rule| rule.value)
}

/// Returns `true` if any of `keywords` is a substring of `lower`.
#[must_use]
pub fn contains_any(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lower.contains(k))
}
