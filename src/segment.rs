//! Segmentation strategies and their collaborator traits
//!
//! The tokenizer either delegates whole-text segmentation to an injected
//! [`WordSegmenter`] or explodes coarse pre-tokens into single characters.

/// How raw text is split into words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentationMode {
    /// Delegate to an injected maximum-coverage word segmenter
    #[default]
    External,
    /// Explode coarse tokens into one token per character
    CharacterFallback,
}

impl SegmentationMode {
    /// Map the boolean strategy toggle onto a mode
    ///
    /// `true` selects the external segmenter, `false` the character fallback.
    pub fn from_flag(use_external: bool) -> Self {
        if use_external {
            SegmentationMode::External
        } else {
            SegmentationMode::CharacterFallback
        }
    }
}

/// External word segmenter producing an exhaustive, non-overlapping cover
///
/// The segmenter reports words only; original whitespace adjacency is not
/// recoverable from its output.
pub trait WordSegmenter: Send + Sync {
    /// Segment `text` into an ordered sequence of words
    fn segment(&self, text: &str) -> Vec<String>;
}

/// A coarse token carrying whitespace adjacency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoarseToken {
    /// Exact text of the coarse token
    pub text: String,
    /// Whether the token was followed by whitespace in the input
    pub trailing_space: bool,
}

/// Whitespace/punctuation-aware pre-tokenizer used by the character fallback
pub trait CoarsePreTokenizer: Send + Sync {
    /// Split `text` into coarse tokens, preserving whitespace adjacency
    fn pre_tokenize(&self, text: &str) -> Vec<CoarseToken>;
}

/// Minimal pre-tokenizer splitting on Unicode whitespace
///
/// Used when no richer pre-tokenizer is injected.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespacePreTokenizer;

impl CoarsePreTokenizer for WhitespacePreTokenizer {
    fn pre_tokenize(&self, text: &str) -> Vec<CoarseToken> {
        let mut tokens = Vec::new();
        let mut current = String::new();

        for ch in text.chars() {
            if ch.is_whitespace() {
                if !current.is_empty() {
                    tokens.push(CoarseToken {
                        text: std::mem::take(&mut current),
                        trailing_space: true,
                    });
                }
            } else {
                current.push(ch);
            }
        }
        if !current.is_empty() {
            tokens.push(CoarseToken {
                text: current,
                trailing_space: false,
            });
        }

        tokens
    }
}
