//! Lexical attribute resolution
//!
//! Maps a raw token string to derived lexical properties. The only attribute
//! currently resolved is `like_num`; the [`LexAttrCache`] memoizes results
//! per distinct string so each is computed once for the cache's lifetime.

use std::collections::{HashMap, HashSet};

/// Closed set of number-like words
///
/// Entries are stored case-folded; membership checks are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct NumWordSet {
    words: HashSet<String>,
}

impl NumWordSet {
    /// Create from the authored word list
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let words = words.into_iter().map(|w| w.to_lowercase()).collect();
        Self { words }
    }

    /// Check membership, case-insensitively
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no words are configured
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Does `text` look like a number?
///
/// Accepts decimal-digit strings with `,` thousands separators and `.`
/// decimal points, simple `a/b` fractions, and members of the closed
/// num-word list. Total over any input; the empty string is not a number.
pub fn like_num(num_words: &NumWordSet, text: &str) -> bool {
    let stripped: String = text.chars().filter(|&ch| ch != ',' && ch != '.').collect();
    if is_all_digits(&stripped) {
        return true;
    }

    // Exactly one slash marks a candidate fraction; zero or several never do.
    if text.matches('/').count() == 1 {
        if let Some((numerator, denominator)) = text.split_once('/') {
            if is_all_digits(numerator) && is_all_digits(denominator) {
                return true;
            }
        }
    }

    num_words.contains(text)
}

// Unicode numeric characters count as digits, so full-width forms routine
// in Chinese text (１２３) pass the same way ASCII does.
fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|ch| ch.is_numeric())
}

/// Resolved lexical attributes for one string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexAttrs {
    /// Whether the string looks like a number
    pub like_num: bool,
}

/// Per-string cache of resolved lexical attributes
///
/// Stands in for the vocabulary's per-lexeme attribute store: each distinct
/// (normalized) string is resolved once and the result reused.
#[derive(Debug, Default)]
pub struct LexAttrCache {
    entries: HashMap<String, LexAttrs>,
}

impl LexAttrCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve attributes for `text`, computing them on first sight
    pub fn get(&mut self, num_words: &NumWordSet, text: &str) -> LexAttrs {
        if let Some(attrs) = self.entries.get(text) {
            return *attrs;
        }
        let attrs = LexAttrs {
            like_num: like_num(num_words, text),
        };
        self.entries.insert(text.to_string(), attrs);
        attrs
    }

    /// Number of distinct strings resolved so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been resolved yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
