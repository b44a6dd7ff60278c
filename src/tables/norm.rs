//! Exception-layered token normalization
//!
//! An exact-match exception table consulted first, with a generic fallback
//! normalizer for everything else. A normalized form is never re-looked-up.

use std::collections::HashMap;
use std::fmt;

/// Generic fallback normalizer applied when no exception matches
pub type GenericNormalizer = dyn Fn(&str) -> String + Send + Sync;

/// Surface-form normalization table
pub struct NormTable {
    exceptions: HashMap<String, String>,
    fallback: Box<GenericNormalizer>,
}

impl fmt::Debug for NormTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormTable")
            .field("exceptions", &self.exceptions.len())
            .finish_non_exhaustive()
    }
}

impl NormTable {
    /// Create with the default generic normalizer (Unicode lowercasing)
    pub fn new(exceptions: HashMap<String, String>) -> Self {
        Self::with_fallback(exceptions, Box::new(|text: &str| text.to_lowercase()))
    }

    /// Create with an injected generic normalizer
    pub fn with_fallback(
        exceptions: HashMap<String, String>,
        fallback: Box<GenericNormalizer>,
    ) -> Self {
        Self {
            exceptions,
            fallback,
        }
    }

    /// Normalize a surface form
    ///
    /// An exception hit returns the mapped value verbatim; a miss delegates
    /// to the generic normalizer.
    pub fn normalize(&self, text: &str) -> String {
        match self.exceptions.get(text) {
            Some(norm) => norm.clone(),
            None => (self.fallback)(text),
        }
    }

    /// Number of authored exceptions
    pub fn len(&self) -> usize {
        self.exceptions.len()
    }

    /// True when no exceptions are authored
    pub fn is_empty(&self) -> bool {
        self.exceptions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> NormTable {
        let mut exceptions = HashMap::new();
        exceptions.insert("“".to_string(), "\"".to_string());
        exceptions.insert("A".to_string(), "B".to_string());
        exceptions.insert("B".to_string(), "C".to_string());
        NormTable::new(exceptions)
    }

    #[test]
    fn test_exception_hit() {
        assert_eq!(table().normalize("“"), "\"");
    }

    #[test]
    fn test_fallback_lowercases() {
        assert_eq!(table().normalize("Hello"), "hello");
        assert_eq!(table().normalize("餐厅"), "餐厅");
    }

    #[test]
    fn test_no_recursive_lookup() {
        // "A" maps to "B", which is itself a key; the result stays "B".
        assert_eq!(table().normalize("A"), "B");
    }

    #[test]
    fn test_injected_fallback() {
        let table = NormTable::with_fallback(HashMap::new(), Box::new(|t: &str| t.to_uppercase()));
        assert_eq!(table.normalize("abc"), "ABC");
    }
}
