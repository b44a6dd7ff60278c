//! Crate error types

use thiserror::Error;

/// Errors raised while building language profiles and tokenizers
///
/// Lookup misses are never errors; they surface as `Option::None` or a
/// fallback value at the call site.
#[derive(Error, Debug)]
pub enum Error {
    /// External word segmenter required but not injected
    #[error(
        "external word segmenter unavailable: {reason}. Inject one with \
         TokenizerBuilder::segmenter(..), or build the tokenizer with \
         SegmentationMode::CharacterFallback"
    )]
    SegmenterUnavailable {
        /// Why the segmenter could not be located
        reason: String,
    },

    /// Language data asset failed to parse
    #[error("failed to parse {code} language config: {source}")]
    Config {
        /// Language code of the offending config
        code: String,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// Language data asset parsed but is inconsistent
    #[error("invalid language config: {0}")]
    Validation(String),

    /// No embedded profile for the requested code
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),
}

/// Result type for profile and tokenizer construction
pub type Result<T> = std::result::Result<T, Error>;
