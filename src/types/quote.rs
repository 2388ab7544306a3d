//! Quote types
//!
//! The quote record, the merge outcome and the built-in seed set.

use serde::{Deserialize, Serialize};

/// Sentinel category that selects every quote.
pub const ALL_CATEGORIES: &str = "all";

/// Category given to quotes fetched from the remote endpoint.
pub const DEFAULT_REMOTE_CATEGORY: &str = "General";

/// A single quote
///
/// Identity is the `text` field alone; see [`Quote::same_text`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// The quote content
    pub text: String,
    /// Free-form label used for filtering
    pub category: String,
}

impl Quote {
    /// Create a new quote
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }

    /// A quote needs both a text and a category to be stored.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty() || self.category.trim().is_empty()
    }

    /// Two quotes are the same quote when their texts are equal.
    pub fn same_text(&self, other: &Quote) -> bool {
        self.text == other.text
    }
}

/// Outcome of merging an incoming list into the collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeResult {
    /// Number of incoming quotes that were appended
    pub added_count: usize,
}

impl MergeResult {
    pub fn has_changes(&self) -> bool {
        self.added_count > 0
    }
}

/// Built-in quotes used when storage holds nothing.
pub fn seed_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "The only way to do great work is to love what you do.",
            "Motivation",
        ),
        Quote::new(
            "Life is what happens when you're busy making other plans.",
            "Life",
        ),
        Quote::new("In the middle of difficulty lies opportunity.", "Inspiration"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_text_ignores_category() {
        let a = Quote::new("Stay hungry", "Motivation");
        let b = Quote::new("Stay hungry", "General");
        let c = Quote::new("stay hungry", "Motivation");

        assert!(a.same_text(&b));
        assert!(!a.same_text(&c));
        assert_ne!(a, b);
    }

    #[test]
    fn test_is_blank() {
        assert!(!Quote::new("a", "X").is_blank());
        assert!(Quote::new("", "X").is_blank());
        assert!(Quote::new("a", "  ").is_blank());
    }

    #[test]
    fn test_quote_wire_shape() {
        let quote = Quote::new("Keep going", "General");
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"text": "Keep going", "category": "General"})
        );
    }

    #[test]
    fn test_seed_quotes_have_distinct_texts() {
        let seeds = seed_quotes();
        assert_eq!(seeds.len(), 3);
        for (i, a) in seeds.iter().enumerate() {
            assert!(!a.text.is_empty());
            assert!(!a.category.is_empty());
            for b in &seeds[i + 1..] {
                assert!(!a.same_text(b));
            }
        }
    }
}
