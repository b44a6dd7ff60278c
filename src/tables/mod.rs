//! Runtime lookup tables built from the language data asset
//!
//! Tables are constructed once at profile build time and are read-only
//! afterwards; all lookups are exact-string and allocation-light.

pub mod morph;
pub mod norm;

pub use morph::{Lemma, MorphAnalysis, MorphRuleTable, PRON_LEMMA};
pub use norm::NormTable;
