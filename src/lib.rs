//! Chinese text normalization and tokenization front-end
//!
//! `hantok` turns raw Chinese text into the `(word, trailing_space)` token
//! sequence consumed by a document model, and answers per-string lexical and
//! morphological queries for the surrounding NLP pipeline:
//!
//! - a `like_num` lexical attribute over digits, fractions and a closed
//!   num-word list,
//! - an exception-layered normalizer over a generic fallback,
//! - a closed-class morphology table for pronouns and copulas, with derived
//!   title-case coverage.
//!
//! Word segmentation proper is delegated to an injected [`WordSegmenter`];
//! without one, a character-level fallback preserves whitespace adjacency at
//! single-character granularity.
//!
//! ```
//! use hantok::{get_profile, SegmentationMode, Tokenizer};
//!
//! let profile = get_profile("zh").unwrap();
//! assert!(profile.like_num("三十"));
//!
//! let tokenizer = Tokenizer::builder()
//!     .mode(SegmentationMode::CharacterFallback)
//!     .build()
//!     .unwrap();
//! let tokens = tokenizer.tokenize("好 餐厅");
//! assert_eq!(tokens.len(), 3);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod lex_attrs;
pub mod loader;
pub mod profile;
pub mod segment;
pub mod tables;
pub mod tokenizer;

pub use error::{Error, Result};
pub use lex_attrs::{like_num, LexAttrCache, LexAttrs, NumWordSet};
pub use loader::get_profile;
pub use profile::LanguageProfile;
pub use segment::{
    CoarsePreTokenizer, CoarseToken, SegmentationMode, WhitespacePreTokenizer, WordSegmenter,
};
pub use tables::{Lemma, MorphAnalysis, MorphRuleTable, NormTable, PRON_LEMMA};
pub use tokenizer::{Token, Tokenizer, TokenizerBuilder};
