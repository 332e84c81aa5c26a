//! Locale descriptors and their builder

use crate::catalog::{catalogs_equal, CatalogSource, MemoryCatalog};
use crate::error::LocaleResult;
use crate::format::{FormatDefaults, FormatKind, FormatOverrides, ResolvedFormats};
use crate::tag::parse_language_tag;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::debug;
use unic_langid::LanguageIdentifier;

/// Immutable record binding a locale's tag, catalog and format overrides
#[derive(Debug, Clone)]
pub struct LocaleDescriptor {
    lang: LanguageIdentifier,
    catalog: Arc<dyn CatalogSource>,
    format: Option<FormatOverrides>,
}

impl LocaleDescriptor {
    /// Start building a descriptor for `tag`
    pub fn builder(tag: impl Into<String>) -> LocaleDescriptorBuilder {
        LocaleDescriptorBuilder::new(tag)
    }

    /// The validated language identifier
    pub fn lang(&self) -> &LanguageIdentifier {
        &self.lang
    }

    /// Canonical tag string, e.g. `"bg"`
    pub fn tag(&self) -> String {
        self.lang.to_string()
    }

    /// The bound catalog files
    pub fn catalog(&self) -> &dyn CatalogSource {
        self.catalog.as_ref()
    }

    /// Shared handle to the catalog, for consumers that outlive the descriptor borrow
    pub fn catalog_handle(&self) -> Arc<dyn CatalogSource> {
        Arc::clone(&self.catalog)
    }

    /// Format overrides, `None` when the locale uses library defaults throughout
    pub fn format(&self) -> Option<&FormatOverrides> {
        self.format.as_ref()
    }

    /// Override for one slot, if any
    pub fn format_override(&self, kind: FormatKind) -> Option<&str> {
        self.format.as_ref().and_then(|format| format.get(kind))
    }

    /// Patterns after falling back to the library defaults
    pub fn resolved_formats(&self) -> ResolvedFormats {
        self.resolved_formats_with(&FormatDefaults::default())
    }

    /// Patterns after falling back to caller-supplied defaults
    pub fn resolved_formats_with(&self, defaults: &FormatDefaults) -> ResolvedFormats {
        self.format
            .as_ref()
            .map_or_else(|| FormatOverrides::default().resolve(defaults), |f| f.resolve(defaults))
    }
}

impl PartialEq for LocaleDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.lang == other.lang
            && self.format == other.format
            && (Arc::ptr_eq(&self.catalog, &other.catalog)
                || catalogs_equal(self.catalog.as_ref(), other.catalog.as_ref()))
    }
}

impl Eq for LocaleDescriptor {}

/// Builder for [`LocaleDescriptor`]
#[derive(Debug)]
pub struct LocaleDescriptorBuilder {
    tag: String,
    catalog: Option<Arc<dyn CatalogSource>>,
    format: FormatOverrides,
}

impl LocaleDescriptorBuilder {
    /// Create a builder for `tag`; the tag is validated in [`build`](Self::build)
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            catalog: None,
            format: FormatOverrides::default(),
        }
    }

    /// Bind the catalog source
    pub fn catalog(mut self, source: impl CatalogSource + 'static) -> Self {
        self.catalog = Some(Arc::new(source));
        self
    }

    /// Bind an already shared catalog source
    pub fn shared_catalog(mut self, source: Arc<dyn CatalogSource>) -> Self {
        self.catalog = Some(source);
        self
    }

    /// Replace all format overrides at once
    pub fn format(mut self, format: FormatOverrides) -> Self {
        self.format = format;
        self
    }

    /// Long date pattern
    pub fn date_format(self, pattern: impl Into<Cow<'static, str>>) -> Self {
        self.pattern(FormatKind::Date, pattern)
    }

    /// Time pattern
    pub fn time_format(self, pattern: impl Into<Cow<'static, str>>) -> Self {
        self.pattern(FormatKind::Time, pattern)
    }

    /// Month-day pattern
    pub fn month_day_format(self, pattern: impl Into<Cow<'static, str>>) -> Self {
        self.pattern(FormatKind::MonthDay, pattern)
    }

    /// Numeric date pattern
    pub fn short_date_format(self, pattern: impl Into<Cow<'static, str>>) -> Self {
        self.pattern(FormatKind::ShortDate, pattern)
    }

    fn pattern(mut self, kind: FormatKind, pattern: impl Into<Cow<'static, str>>) -> Self {
        self.format.set(kind, pattern);
        self
    }

    /// Validate the tag and produce the descriptor
    pub fn build(self) -> LocaleResult<LocaleDescriptor> {
        let lang = parse_language_tag(&self.tag)?;
        let catalog: Arc<dyn CatalogSource> = match self.catalog {
            Some(catalog) => catalog,
            None => Arc::new(MemoryCatalog::new()),
        };
        let format = (!self.format.is_empty()).then_some(self.format);

        debug!(
            "Built locale descriptor {} ({} catalog files, overrides: {})",
            lang,
            catalog.list_files().len(),
            format.is_some()
        );

        Ok(LocaleDescriptor {
            lang,
            catalog,
            format,
        })
    }
}
