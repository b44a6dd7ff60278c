//! Integration tests for the embedded Chinese profile
//!
//! Exercises the lexical attribute, normalization and morphology surfaces
//! through the public API.

use std::collections::BTreeMap;

use hantok::{get_profile, Lemma, LexAttrCache, MorphAnalysis, MorphRuleTable};

#[test]
fn test_like_num_scenarios() {
    let profile = get_profile("zh").unwrap();

    assert!(profile.like_num("1,234.5"));
    assert!(profile.like_num("１２３"));
    assert!(profile.like_num("三十"));
    assert!(!profile.like_num("三十一"));
    assert!(profile.like_num("1/2"));
    assert!(!profile.like_num("1/2/3"));
    assert!(!profile.like_num(""));
    assert!(!profile.like_num("abc"));
    assert!(!profile.like_num("1/"));
    assert!(profile.like_num("bazillion"));
    assert!(profile.like_num("Bazillion"));
}

#[test]
fn test_lex_attr_cache_over_profile() {
    let profile = get_profile("zh").unwrap();
    let mut cache = LexAttrCache::new();

    assert!(cache.get(profile.num_words(), "三十").like_num);
    assert!(!cache.get(profile.num_words(), "餐厅").like_num);
    // Repeat lookups hit the memo, not the resolver.
    assert!(cache.get(profile.num_words(), "三十").like_num);
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_normalization_layers() {
    let profile = get_profile("zh").unwrap();

    // Exception hits return the authored mapping.
    assert_eq!(profile.normalize("！"), "!");
    assert_eq!(profile.normalize("“"), "\"");
    // Misses fall through to the generic normalizer.
    assert_eq!(profile.normalize("Hello"), "hello");
    assert_eq!(profile.normalize("餐厅"), "餐厅");
}

#[test]
fn test_pronoun_morphology() {
    let profile = get_profile("zh").unwrap();

    let analysis = profile.lookup_morph("PRP", "我").unwrap();
    assert_eq!(analysis.lemma, Lemma::PronPlaceholder);
    assert_eq!(analysis.features["Person"], "One");
    assert_eq!(analysis.features["Number"], "Sing");
    assert_eq!(analysis.features["PronType"], "Prs");

    let possessive = profile.lookup_morph("PRP$", "我们的").unwrap();
    assert_eq!(possessive.features["Poss"], "Yes");
    assert_eq!(possessive.features["Number"], "Plur");
}

#[test]
fn test_same_form_under_different_tags() {
    let profile = get_profile("zh").unwrap();

    // 我的 is authored under both PRP and PRP$ with different bundles.
    let prp = profile.lookup_morph("PRP", "我的").unwrap();
    let prp_poss = profile.lookup_morph("PRP$", "我的").unwrap();
    assert_eq!(prp.features["Reflex"], "Yes");
    assert!(!prp_poss.features.contains_key("Reflex"));
}

#[test]
fn test_copula_literal_lemma() {
    let profile = get_profile("zh").unwrap();

    for form in ["是", "为"] {
        let analysis = profile.lookup_morph("VBZ", form).unwrap();
        assert_eq!(analysis.lemma, Lemma::Literal("be".to_string()));
        assert_eq!(analysis.features["Tense"], "Pres");
    }
}

#[test]
fn test_morph_miss_is_none() {
    let profile = get_profile("zh").unwrap();

    assert!(profile.lookup_morph("PRP", "餐厅").is_none());
    assert!(profile.lookup_morph("NN", "我").is_none());
}

#[test]
fn test_titlecase_idempotent_for_caseless_forms() {
    // Title-casing is a no-op for Han script, so the derived pass adds no
    // entries: the table holds exactly the authored rules.
    let authored = [
        ("PRP", "我"),
        ("PRP", "我们"),
        ("VBZ", "是"),
    ];
    let table = MorphRuleTable::from_entries(authored.iter().map(|(tag, form)| {
        (
            tag.to_string(),
            form.to_string(),
            MorphAnalysis {
                lemma: Lemma::PronPlaceholder,
                features: BTreeMap::new(),
            },
        )
    }));

    assert_eq!(table.len(), authored.len());
    for (tag, form) in authored {
        assert!(table.lookup(tag, form).is_some());
    }
}
