//! Tokenizer: strategy selection and token production
//!
//! A [`Tokenizer`] is built once with a fixed [`SegmentationMode`] and turns
//! raw text into the `(word, trailing_space)` sequence consumed by the
//! external document constructor.

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::segment::{CoarsePreTokenizer, SegmentationMode, WhitespacePreTokenizer, WordSegmenter};

/// One produced token
///
/// Immutable once produced; ownership moves to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Exact substring of the input
    pub text: String,
    /// Whether the token was followed by whitespace in the input
    pub has_trailing_space: bool,
}

/// Builder for [`Tokenizer`] instances
#[derive(Default)]
pub struct TokenizerBuilder {
    mode: SegmentationMode,
    segmenter: Option<Arc<dyn WordSegmenter>>,
    pre_tokenizer: Option<Arc<dyn CoarsePreTokenizer>>,
}

impl TokenizerBuilder {
    /// Create a builder with the default mode (external segmentation)
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the segmentation strategy
    pub fn mode(mut self, mode: SegmentationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Inject the external word segmenter
    pub fn segmenter(mut self, segmenter: Arc<dyn WordSegmenter>) -> Self {
        self.segmenter = Some(segmenter);
        self
    }

    /// Inject the coarse pre-tokenizer used by the character fallback
    pub fn pre_tokenizer(mut self, pre_tokenizer: Arc<dyn CoarsePreTokenizer>) -> Self {
        self.pre_tokenizer = Some(pre_tokenizer);
        self
    }

    /// Build, verifying the selected strategy has its collaborator
    ///
    /// External mode without an injected segmenter is a fatal configuration
    /// error, surfaced here rather than at first use.
    pub fn build(self) -> Result<Tokenizer> {
        if self.mode == SegmentationMode::External && self.segmenter.is_none() {
            return Err(Error::SegmenterUnavailable {
                reason: "no word segmenter was injected".to_string(),
            });
        }

        Ok(Tokenizer {
            mode: self.mode,
            segmenter: self.segmenter,
            pre_tokenizer: self
                .pre_tokenizer
                .unwrap_or_else(|| Arc::new(WhitespacePreTokenizer)),
        })
    }
}

/// Splits raw text into [`Token`]s
///
/// The strategy is fixed per instance; build a new tokenizer to change it.
pub struct Tokenizer {
    mode: SegmentationMode,
    segmenter: Option<Arc<dyn WordSegmenter>>,
    pre_tokenizer: Arc<dyn CoarsePreTokenizer>,
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl Tokenizer {
    /// Start building a tokenizer
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// The strategy this instance was built with
    pub fn mode(&self) -> SegmentationMode {
        self.mode
    }

    /// Tokenize `text`
    ///
    /// Synchronous and blocking; in external mode the segmenter runs on the
    /// calling thread with no cancellation support.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let tokens = match self.mode {
            SegmentationMode::External => self.tokenize_external(text),
            SegmentationMode::CharacterFallback => self.tokenize_chars(text),
        };
        tracing::debug!(mode = ?self.mode, tokens = tokens.len(), "tokenized text");
        tokens
    }

    fn tokenize_external(&self, text: &str) -> Vec<Token> {
        // The builder guarantees a segmenter in external mode.
        debug_assert!(self.segmenter.is_some(), "external mode without segmenter");
        let Some(segmenter) = self.segmenter.as_ref() else {
            tracing::warn!("external segmentation requested without a segmenter; yielding no tokens");
            return Vec::new();
        };

        segmenter
            .segment(text)
            .into_iter()
            .filter(|word| !word.is_empty())
            // The segmenter does not report whitespace adjacency.
            .map(|word| Token {
                text: word,
                has_trailing_space: false,
            })
            .collect()
    }

    fn tokenize_chars(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        for coarse in self.pre_tokenizer.pre_tokenize(text) {
            let char_count = coarse.text.chars().count();
            for (i, ch) in coarse.text.chars().enumerate() {
                tokens.push(Token {
                    text: ch.to_string(),
                    // Only the last character inherits the coarse flag.
                    has_trailing_space: coarse.trailing_space && i + 1 == char_count,
                });
            }
        }
        tokens
    }
}
