//! Registry configuration loading

use crate::error::{LocaleError, LocaleResult};
use crate::tag::canonicalize;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Settings selecting which built-in locales a registry exposes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Locale used when a request resolves to nothing
    pub default_locale: String,
    /// Tags to register; empty registers every built-in locale
    pub enabled: Vec<String>,
    /// Whether `resolve` walks the fallback chain (`bg-BG` -> `bg`)
    pub fallback: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_locale: crate::locales::bg::TAG.to_string(),
            enabled: Vec::new(),
            fallback: true,
        }
    }
}

impl RegistryConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(content: &str) -> LocaleResult<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        debug!("Parsed registry configuration: {:?}", config);
        Ok(config)
    }

    /// Load and validate a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> LocaleResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml_str(&content)?;
        info!("Loaded registry configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Check tags and that the default locale is among the enabled ones
    pub fn validate(&self) -> LocaleResult<()> {
        let default = canonicalize(&self.default_locale)?;

        let enabled = self
            .enabled
            .iter()
            .map(|tag| canonicalize(tag))
            .collect::<LocaleResult<Vec<_>>>()?;

        if !enabled.is_empty() && !enabled.contains(&default) {
            return Err(LocaleError::Config(format!(
                "default locale '{}' is not enabled",
                self.default_locale
            )));
        }

        Ok(())
    }

    /// Whether `tag` passes the `enabled` filter
    pub fn is_enabled(&self, tag: &str) -> bool {
        self.enabled.is_empty()
            || self
                .enabled
                .iter()
                .any(|enabled| canonicalize(enabled).is_ok_and(|canonical| canonical == tag))
    }
}
