//! Configuration structures and validation
//!
//! This module defines the TOML schema for the language data asset.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

/// Root language configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageConfig {
    /// Language identification
    pub metadata: Metadata,
    /// Lexical attribute data
    #[serde(default)]
    pub lex_attrs: LexAttrsConfig,
    /// Normalization exception data
    #[serde(default)]
    pub norm: NormConfig,
    /// Closed-class morphology data
    #[serde(default)]
    pub morph: MorphConfig,
}

/// Language metadata
#[derive(Debug, Clone, Deserialize)]
pub struct Metadata {
    /// ISO language code, e.g. "zh"
    pub code: String,
    /// Human-readable language name
    pub name: String,
}

/// Lexical attribute configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexAttrsConfig {
    /// Closed list of number-like words for the `like_num` attribute
    #[serde(default)]
    pub num_words: Vec<String>,
}

/// Normalization exception configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NormConfig {
    /// Exact surface-form overrides consulted before generic normalization
    #[serde(default)]
    pub exceptions: HashMap<String, String>,
}

/// Morphology rule configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MorphConfig {
    /// Authored rules; a title-cased variant is derived for each at build time
    #[serde(default)]
    pub rules: Vec<MorphRuleConfig>,
}

/// One authored morphology rule
#[derive(Debug, Clone, Deserialize)]
pub struct MorphRuleConfig {
    /// Coarse part-of-speech tag, e.g. "PRP"
    pub tag: String,
    /// Exact surface form the rule matches
    pub form: String,
    /// Literal lemma, or the "-PRON-" placeholder
    pub lemma: String,
    /// Feature name to value pairs, e.g. "Person" = "One"
    #[serde(default)]
    pub features: BTreeMap<String, String>,
}

impl LanguageConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.is_empty() {
            return Err("empty language code".to_string());
        }

        if self.lex_attrs.num_words.iter().any(|w| w.is_empty()) {
            return Err("empty entry in lex_attrs.num_words".to_string());
        }

        for (surface, replacement) in &self.norm.exceptions {
            if surface.is_empty() || replacement.is_empty() {
                return Err("empty surface form or replacement in norm.exceptions".to_string());
            }
        }

        for rule in &self.morph.rules {
            if rule.tag.is_empty() || rule.form.is_empty() {
                return Err("morph rule with empty tag or form".to_string());
            }
            if rule.lemma.is_empty() {
                return Err(format!("morph rule {}/{} has an empty lemma", rule.tag, rule.form));
            }
            if rule.features.is_empty() {
                return Err(format!("morph rule {}/{} has no features", rule.tag, rule.form));
            }
            if rule.features.iter().any(|(k, v)| k.is_empty() || v.is_empty()) {
                return Err(format!(
                    "morph rule {}/{} has an empty feature name or value",
                    rule.tag, rule.form
                ));
            }
        }

        Ok(())
    }
}
