//! Keyword rule tables.
//!
//! Every classification in the engine is an ordered list of
//! (trigger words, outcome) pairs evaluated against lowercased text:
//! 1. `first_match` walks the list and stops at the first rule that fires
//! 2. `all_matches` collects every rule that fires, in declaration order
//!
//! Keeping precedence in data rather than in if/else chains means each
//! table can be inspected and tested on its own.

/// Lowercased copy of user text, used for matching only.
///
/// The original text is never modified; callers keep it for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn new(text: &str) -> Self {
        Self(text.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if any of the given (lowercase) words occurs as a substring.
    pub fn contains_any(&self, words: &[&str]) -> bool {
        words.iter().any(|word| self.0.contains(*word))
    }
}

/// A single rule: fires when any trigger word is a substring of the text.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<T> {
    pub keywords: &'static [&'static str],
    pub outcome: T,
}

impl<T> KeywordRule<T> {
    pub const fn new(keywords: &'static [&'static str], outcome: T) -> Self {
        Self { keywords, outcome }
    }

    pub fn matches(&self, text: &NormalizedText) -> bool {
        text.contains_any(self.keywords)
    }
}

/// Outcome of the first rule that fires, if any.
pub fn first_match<'a, T>(rules: &'a [KeywordRule<T>], text: &NormalizedText) -> Option<&'a T> {
    rules
        .iter()
        .find(|rule| rule.matches(text))
        .map(|rule| &rule.outcome)
}

/// Outcomes of every rule that fires, in declaration order.
pub fn all_matches<'a, T>(rules: &'a [KeywordRule<T>], text: &NormalizedText) -> Vec<&'a T> {
    rules
        .iter()
        .filter(|rule| rule.matches(text))
        .map(|rule| &rule.outcome)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: [KeywordRule<&str>; 3] = [
        KeywordRule::new(&["alpha", "beta"], "first"),
        KeywordRule::new(&["beta"], "second"),
        KeywordRule::new(&["gamma"], "third"),
    ];

    #[test]
    fn test_normalization_lowercases() {
        let text = NormalizedText::new("Feeling GREAT");
        assert_eq!(text.as_str(), "feeling great");
        assert!(text.contains_any(&["great"]));
    }

    #[test]
    fn test_first_match_respects_order() {
        let text = NormalizedText::new("beta and gamma");
        assert_eq!(first_match(&RULES, &text), Some(&"first"));
    }

    #[test]
    fn test_first_match_none() {
        let text = NormalizedText::new("delta");
        assert_eq!(first_match(&RULES, &text), None);
    }

    #[test]
    fn test_all_matches_in_declaration_order() {
        let text = NormalizedText::new("gamma then beta");
        assert_eq!(all_matches(&RULES, &text), vec![&"first", &"second", &"third"]);
    }

    #[test]
    fn test_substring_matching() {
        // "stress" fires inside "stressed"
        let text = NormalizedText::new("so stressed");
        assert!(text.contains_any(&["stress"]));
    }
}
