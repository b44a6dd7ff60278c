//! Closed-class morphology rules
//!
//! Maps `(coarse_tag, surface_form)` to a feature bundle and lemma for a
//! small closed set of forms (pronouns, copulas). Every authored entry also
//! covers its title-cased variant unless that variant is authored itself.

use std::collections::{BTreeMap, HashMap};

/// Placeholder lemma string used by the data asset for pronouns
pub const PRON_LEMMA: &str = "-PRON-";

/// Lemma attached to a morphology rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lemma {
    /// A literal dictionary form
    Literal(String),
    /// Resolve via pronoun-specific logic in the external lemmatizer
    PronPlaceholder,
}

impl Lemma {
    /// Parse the lemma field of the data asset
    pub fn parse(raw: &str) -> Self {
        if raw == PRON_LEMMA {
            Lemma::PronPlaceholder
        } else {
            Lemma::Literal(raw.to_string())
        }
    }
}

/// Morphological analysis attached to one `(tag, form)` key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphAnalysis {
    /// Canonical lemma
    pub lemma: Lemma,
    /// Feature name to value, e.g. "Person" -> "One"
    pub features: BTreeMap<String, String>,
}

/// Morphology rule table keyed by `(coarse_tag, surface_form)`
///
/// The composite key is realized as a per-tag index so lookups borrow both
/// key components without allocating.
#[derive(Debug, Clone, Default)]
pub struct MorphRuleTable {
    rules: HashMap<String, HashMap<String, MorphAnalysis>>,
}

impl MorphRuleTable {
    /// Build from authored entries
    ///
    /// Two passes: all authored entries are inserted first, then one derived
    /// title-cased key per authored entry. A derived key never overwrites an
    /// authored one, so authored entries win regardless of authoring order.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String, MorphAnalysis)>,
    {
        let mut rules: HashMap<String, HashMap<String, MorphAnalysis>> = HashMap::new();
        let mut authored = Vec::new();

        for (tag, form, analysis) in entries {
            authored.push((tag.clone(), form.clone()));
            rules.entry(tag).or_default().insert(form, analysis);
        }

        for (tag, form) in &authored {
            let titled = titlecase(form);
            if titled == *form {
                // Caseless script: the derived key coincides with the
                // authored one and the pass is a no-op.
                continue;
            }
            let Some(tag_rules) = rules.get_mut(tag) else {
                continue;
            };
            if !tag_rules.contains_key(&titled) {
                let analysis = tag_rules[form].clone();
                tag_rules.insert(titled, analysis);
            }
        }

        Self { rules }
    }

    /// Exact lookup; `None` means "no known closed-form morphology"
    pub fn lookup(&self, tag: &str, text: &str) -> Option<&MorphAnalysis> {
        self.rules.get(tag)?.get(text)
    }

    /// Number of entries, derived title-case variants included
    pub fn len(&self) -> usize {
        self.rules.values().map(HashMap::len).sum()
    }

    /// True when no rules are loaded
    pub fn is_empty(&self) -> bool {
        self.rules.values().all(HashMap::is_empty)
    }
}

/// Title-case a surface form: first char uppercased, remainder lowercased
///
/// A no-op for scripts without letter case.
pub(crate) fn titlecase(form: &str) -> String {
    let mut chars = form.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(form.len());
            out.extend(first.to_uppercase());
            out.extend(chars.flat_map(|ch| ch.to_lowercase()));
            out
        }
        None => String::new(),
    }
}
