//! Language profile: the runtime bundle of per-language tables
//!
//! Built once from a parsed [`LanguageConfig`] and read-only afterwards.
//! Construction completes before the profile is shared, so concurrent
//! readers never observe a partially built table.

use std::fmt;

use crate::config::LanguageConfig;
use crate::error::{Error, Result};
use crate::lex_attrs::{self, NumWordSet};
use crate::tables::norm::GenericNormalizer;
use crate::tables::{Lemma, MorphAnalysis, MorphRuleTable, NormTable};

/// Per-language runtime tables
pub struct LanguageProfile {
    code: String,
    name: String,
    num_words: NumWordSet,
    norm: NormTable,
    morph: MorphRuleTable,
}

impl fmt::Debug for LanguageProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageProfile")
            .field("code", &self.code)
            .field("num_words", &self.num_words.len())
            .field("norm_exceptions", &self.norm.len())
            .field("morph_rules", &self.morph.len())
            .finish()
    }
}

impl LanguageProfile {
    /// Build from a parsed config, with the default generic normalizer
    pub fn from_config(config: &LanguageConfig) -> Result<Self> {
        Self::with_normalizer(config, Box::new(|text: &str| text.to_lowercase()))
    }

    /// Build from a parsed config with an injected generic normalizer
    pub fn with_normalizer(
        config: &LanguageConfig,
        normalizer: Box<GenericNormalizer>,
    ) -> Result<Self> {
        config.validate().map_err(Error::Validation)?;

        let num_words = NumWordSet::new(config.lex_attrs.num_words.iter().cloned());
        let norm = NormTable::with_fallback(config.norm.exceptions.clone(), normalizer);
        let morph = MorphRuleTable::from_entries(config.morph.rules.iter().map(|rule| {
            (
                rule.tag.clone(),
                rule.form.clone(),
                MorphAnalysis {
                    lemma: Lemma::parse(&rule.lemma),
                    features: rule.features.clone(),
                },
            )
        }));

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            num_words,
            norm,
            morph,
        })
    }

    /// ISO language code, e.g. "zh"
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable language name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Does `text` look like a number?
    pub fn like_num(&self, text: &str) -> bool {
        lex_attrs::like_num(&self.num_words, text)
    }

    /// Normalize a surface form through the exception layer
    pub fn normalize(&self, text: &str) -> String {
        self.norm.normalize(text)
    }

    /// Closed-class morphology for `(tag, text)`, if any
    ///
    /// `None` means "no known closed-form morphology"; callers fall back to
    /// generic tagging.
    pub fn lookup_morph(&self, tag: &str, text: &str) -> Option<&MorphAnalysis> {
        self.morph.lookup(tag, text)
    }

    /// The closed num-word set, for external attribute caches
    pub fn num_words(&self) -> &NumWordSet {
        &self.num_words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> LanguageProfile {
        let config: LanguageConfig = toml::from_str(
            r#"
            [metadata]
            code = "zh"
            name = "Chinese"

            [lex_attrs]
            num_words = ["一", "十"]

            [norm.exceptions]
            "“" = "\""

            [[morph.rules]]
            tag = "VBZ"
            form = "是"
            lemma = "be"
            features = { Tense = "Pres" }
            "#,
        )
        .unwrap();
        LanguageProfile::from_config(&config).unwrap()
    }

    #[test]
    fn test_profile_wires_tables() {
        let profile = profile();
        assert_eq!(profile.code(), "zh");
        assert!(profile.like_num("一"));
        assert!(!profile.like_num("好"));
        assert_eq!(profile.normalize("“"), "\"");
        assert_eq!(profile.normalize("ABC"), "abc");
        assert!(profile.lookup_morph("VBZ", "是").is_some());
        assert!(profile.lookup_morph("VBZ", "好").is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config: LanguageConfig = toml::from_str(
            r#"
            [metadata]
            code = ""
            name = "Chinese"
            "#,
        )
        .unwrap();
        assert!(matches!(
            LanguageProfile::from_config(&config),
            Err(Error::Validation(_))
        ));
    }
}
