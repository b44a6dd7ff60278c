//! Embedded language profile loader
//!
//! Profiles ship as TOML data assets embedded in the binary and are built
//! once on first access.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::config::LanguageConfig;
use crate::error::{Error, Result};
use crate::profile::LanguageProfile;

/// Embedded language profiles
static EMBEDDED: OnceLock<HashMap<String, Arc<LanguageProfile>>> = OnceLock::new();

/// Load an embedded language profile by code
///
/// Both the ISO code and the English name are accepted ("zh", "chinese").
pub fn get_profile(code: &str) -> Result<Arc<LanguageProfile>> {
    let embedded = EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        match load_embedded("zh", include_str!("../configs/languages/zh.toml")) {
            Ok(profile) => {
                map.insert("zh".to_string(), Arc::clone(&profile));
                map.insert("chinese".to_string(), profile);
            }
            Err(e) => {
                tracing::warn!("failed to load embedded zh profile: {e}");
            }
        }

        map
    });

    embedded
        .get(code)
        .cloned()
        .ok_or_else(|| Error::UnknownLanguage(code.to_string()))
}

/// Parse and build one embedded profile
fn load_embedded(code: &str, toml_str: &str) -> Result<Arc<LanguageProfile>> {
    let config: LanguageConfig = toml::from_str(toml_str).map_err(|source| Error::Config {
        code: code.to_string(),
        source,
    })?;

    let profile = LanguageProfile::from_config(&config)?;
    tracing::debug!(code, ?profile, "loaded embedded language profile");
    Ok(Arc::new(profile))
}
