//! Fuzzy matching for the gallery filter.
//!
//! Wraps the matcher implementation so the rest of the code never touches
//! the underlying crate directly.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// Case-insensitive fuzzy matcher over entry titles.
pub struct Matcher {
    inner: SkimMatcherV2,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: SkimMatcherV2::default(),
        }
    }

    /// True when the pattern fuzzy-matches the text. Non-consecutive
    /// characters are allowed.
    #[must_use]
    pub fn matches(&self, text: &str, pattern: &str) -> bool {
        self.score(text, pattern).is_some()
    }

    /// Match score for ranking, higher is better. `None` when there is no
    /// match at all.
    #[must_use]
    pub fn score(&self, text: &str, pattern: &str) -> Option<i64> {
        self.inner.fuzzy_match(text, &pattern.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzy_match() {
        let matcher = Matcher::new();
        assert!(matcher.matches("spaghetti carbonara", "spcarb"));
        assert!(matcher.matches("focaccia barese", "focaccia"));
        assert!(matcher.matches("RISOTTO", "risotto"));
        assert!(!matcher.matches("tiramisu", "xyz"));
    }

    #[test]
    fn test_score_ranks_exact_higher() {
        let matcher = Matcher::new();
        let exact = matcher.score("risotto", "risotto").unwrap();
        let fuzzy = matcher.score("risotto ai funghi", "risotto").unwrap();
        assert!(exact >= fuzzy);
        assert!(matcher.score("tiramisu", "xyz").is_none());
    }
}
