//! Locale registry keyed by language tag

use crate::config::RegistryConfig;
use crate::descriptor::LocaleDescriptor;
use crate::error::{LocaleError, LocaleResult};
use crate::locales::{LocaleBuilderFn, BUILTIN};
use crate::tag::{canonicalize, fallback_chain, parse_language_tag};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use tracing::{debug, info, warn};
use unic_langid::LanguageIdentifier;

static GLOBAL: OnceCell<LocaleRegistry> = OnceCell::new();

/// Process-wide registry of the built-in locales.
///
/// Built on first access, at most once even under concurrent first calls.
/// A build failure is returned to every caller until a build succeeds.
pub fn global() -> LocaleResult<&'static LocaleRegistry> {
    GLOBAL.get_or_try_init(LocaleRegistry::builtin)
}

/// Descriptors keyed by canonical language identifier
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: HashMap<LanguageIdentifier, LocaleDescriptor>,
    default_locale: Option<LanguageIdentifier>,
    fallback: bool,
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleRegistry {
    /// Create an empty registry with fallback resolution enabled
    pub fn new() -> Self {
        Self {
            locales: HashMap::new(),
            default_locale: None,
            fallback: true,
        }
    }

    /// Registry of every built-in locale
    pub fn builtin() -> LocaleResult<Self> {
        Self::from_builders(BUILTIN)
    }

    /// Invoke every builder and register the results.
    ///
    /// All failures are collected and returned together so a packaging
    /// defect in one locale does not hide another.
    pub fn from_builders(builders: &[LocaleBuilderFn]) -> LocaleResult<Self> {
        let mut registry = Self::new();
        let mut failures = Vec::new();

        for build in builders {
            match build().and_then(|descriptor| registry.register(descriptor)) {
                Ok(()) => {}
                Err(e) => {
                    warn!("Locale registration failed: {}", e);
                    failures.push(e);
                }
            }
        }

        if !failures.is_empty() {
            return Err(LocaleError::Registry { failures });
        }

        info!("Locale registry built with {} locales", registry.len());
        Ok(registry)
    }

    /// Registry of the built-in locales selected by `config`
    pub fn with_config(config: &RegistryConfig) -> LocaleResult<Self> {
        config.validate()?;

        let all = Self::builtin()?;
        let mut registry = Self::new();
        let mut failures = Vec::new();

        for tag in &config.enabled {
            let canonical = canonicalize(tag)?;
            if all.lookup(&canonical).is_none() {
                failures.push(LocaleError::UnknownLocale { tag: tag.clone() });
            }
        }

        let default = parse_language_tag(&config.default_locale)?;
        if all.get(&default).is_none() {
            failures.push(LocaleError::UnknownLocale {
                tag: config.default_locale.clone(),
            });
        }

        if !failures.is_empty() {
            return Err(LocaleError::Registry { failures });
        }

        for descriptor in all.locales.into_values() {
            if config.is_enabled(&descriptor.tag()) {
                registry.register(descriptor)?;
            }
        }

        registry.default_locale = Some(default);
        registry.fallback = config.fallback;

        info!(
            "Locale registry configured with {} locales, default {}",
            registry.len(),
            config.default_locale
        );
        Ok(registry)
    }

    /// Add a descriptor; a second descriptor for the same tag is rejected
    pub fn register(&mut self, descriptor: LocaleDescriptor) -> LocaleResult<()> {
        let lang = descriptor.lang().clone();

        if self.locales.contains_key(&lang) {
            return Err(LocaleError::DuplicateLocale {
                tag: lang.to_string(),
            });
        }

        debug!("Registered locale {}", lang);
        self.locales.insert(lang, descriptor);
        Ok(())
    }

    /// Exact lookup by identifier
    pub fn get(&self, lang: &LanguageIdentifier) -> Option<&LocaleDescriptor> {
        self.locales.get(lang)
    }

    /// Exact lookup by tag string; unparsable tags match nothing
    pub fn lookup(&self, tag: &str) -> Option<&LocaleDescriptor> {
        parse_language_tag(tag)
            .ok()
            .and_then(|lang| self.locales.get(&lang))
    }

    /// Lookup walking the fallback chain, e.g. `bg-BG` -> `bg`.
    ///
    /// Behaves like [`lookup`](Self::lookup) when fallback is disabled.
    pub fn resolve(&self, tag: &str) -> Option<&LocaleDescriptor> {
        let lang = parse_language_tag(tag).ok()?;

        if !self.fallback {
            return self.locales.get(&lang);
        }

        let chain = fallback_chain(&lang);
        let found = chain
            .iter()
            .find_map(|candidate| self.locales.get(candidate));

        match found {
            Some(descriptor) if descriptor.lang() != &lang => {
                debug!("Resolved locale {} via fallback to {}", lang, descriptor.lang());
            }
            Some(_) => {}
            None => debug!("No locale registered for {}", lang),
        }

        found
    }

    /// Like [`resolve`](Self::resolve), falling back to the default locale
    pub fn resolve_or_default(&self, tag: &str) -> Option<&LocaleDescriptor> {
        self.resolve(tag).or_else(|| {
            let default = self.default_locale()?;
            warn!("Locale {} not registered, using default {}", tag, default.lang());
            Some(default)
        })
    }

    /// The configured default locale, if any
    pub fn default_locale(&self) -> Option<&LocaleDescriptor> {
        self.default_locale
            .as_ref()
            .and_then(|lang| self.locales.get(lang))
    }

    /// Whether `resolve` walks the fallback chain
    pub fn fallback_enabled(&self) -> bool {
        self.fallback
    }

    /// Registered tags, sorted
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.locales.keys().map(ToString::to_string).collect();
        tags.sort();
        tags
    }

    /// Descriptors in tag order
    pub fn iter(&self) -> impl Iterator<Item = &LocaleDescriptor> {
        let mut descriptors: Vec<&LocaleDescriptor> = self.locales.values().collect();
        descriptors.sort_by_key(|descriptor| descriptor.tag());
        descriptors.into_iter()
    }

    /// Number of registered locales
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// True when no locale is registered
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;

    fn broken() -> LocaleResult<LocaleDescriptor> {
        LocaleDescriptor::builder("b@d").build()
    }

    fn bg_duplicate() -> LocaleResult<LocaleDescriptor> {
        LocaleDescriptor::builder("bg")
            .catalog(MemoryCatalog::new())
            .build()
    }

    #[test]
    fn test_builtin_registry() {
        let registry = LocaleRegistry::builtin().unwrap();
        assert_eq!(registry.tags(), vec!["bg", "my"]);
        assert!(registry.default_locale().is_none());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = LocaleRegistry::builtin().unwrap();
        let err = registry.register(bg_duplicate().unwrap()).unwrap_err();
        assert!(matches!(err, LocaleError::DuplicateLocale { ref tag } if tag == "bg"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_from_builders_aggregates_failures() {
        let builders: &[LocaleBuilderFn] = &[crate::locales::bg, broken, bg_duplicate, broken];
        let err = LocaleRegistry::from_builders(builders).unwrap_err();

        let failures = err.failures();
        assert_eq!(failures.len(), 3);
        assert!(matches!(failures[0], LocaleError::InvalidLanguageTag { .. }));
        assert!(matches!(failures[1], LocaleError::DuplicateLocale { .. }));
        assert!(matches!(failures[2], LocaleError::InvalidLanguageTag { .. }));
    }

    #[test]
    fn test_resolve_walks_fallback_chain() {
        let registry = LocaleRegistry::builtin().unwrap();

        assert_eq!(registry.resolve("bg-BG").unwrap().tag(), "bg");
        assert_eq!(registry.resolve("my-Mymr-MM").unwrap().tag(), "my");
        assert!(registry.resolve("fr-FR").is_none());
        assert!(registry.resolve("not a tag").is_none());
        assert!(registry.lookup("bg-BG").is_none());
    }

    #[test]
    fn test_resolve_without_fallback_is_exact() {
        let config = RegistryConfig {
            fallback: false,
            ..RegistryConfig::default()
        };
        let registry = LocaleRegistry::with_config(&config).unwrap();

        assert!(!registry.fallback_enabled());
        assert!(registry.resolve("bg-BG").is_none());
        assert_eq!(registry.resolve("bg").unwrap().tag(), "bg");
    }

    #[test]
    fn test_with_config_filters_and_sets_default() {
        let config = RegistryConfig {
            default_locale: "my".to_string(),
            enabled: vec!["my".to_string()],
            fallback: true,
        };
        let registry = LocaleRegistry::with_config(&config).unwrap();

        assert_eq!(registry.tags(), vec!["my"]);
        assert_eq!(registry.default_locale().unwrap().tag(), "my");
        assert_eq!(registry.resolve_or_default("de").unwrap().tag(), "my");
    }

    #[test]
    fn test_with_config_rejects_unknown_locales() {
        let config = RegistryConfig {
            default_locale: "de".to_string(),
            enabled: vec!["de".to_string(), "xx".to_string()],
            fallback: true,
        };
        let err = LocaleRegistry::with_config(&config).unwrap_err();

        assert_eq!(err.failures().len(), 3);
        assert!(err
            .failures()
            .iter()
            .all(|failure| matches!(failure, LocaleError::UnknownLocale { .. })));
    }

    #[test]
    fn test_iter_in_tag_order() {
        let registry = LocaleRegistry::builtin().unwrap();
        let tags: Vec<String> = registry.iter().map(LocaleDescriptor::tag).collect();
        assert_eq!(tags, registry.tags());
    }

    #[test]
    fn test_global_is_shared() {
        let first = global().unwrap();
        let second = global().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.len(), BUILTIN.len());
    }
}
