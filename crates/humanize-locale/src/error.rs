//! Error types for locale registration

use thiserror::Error;

/// Errors that can occur while building descriptors and registries
#[derive(Error, Debug)]
pub enum LocaleError {
    /// A locale declared a tag that is not a valid BCP-47 language identifier
    #[error("Invalid language tag: {tag}")]
    InvalidLanguageTag { tag: String },

    /// Two descriptors were registered under the same tag
    #[error("Duplicate locale registration: {tag}")]
    DuplicateLocale { tag: String },

    /// Configuration names a locale that no builder provides
    #[error("Unknown locale: {tag}")]
    UnknownLocale { tag: String },

    /// A catalog file was requested that the locale does not bundle
    #[error("Catalog file '{file}' not found for locale {locale}")]
    CatalogFileNotFound { locale: String, file: String },

    /// One or more locales failed to build
    #[error("Failed to build locale registry ({} failures): {}", .failures.len(), summarize(.failures))]
    Registry { failures: Vec<LocaleError> },

    /// Registry configuration is inconsistent
    #[error("Invalid locale configuration: {0}")]
    Config(String),

    /// Configuration could not be parsed
    #[error("Failed to parse locale configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn summarize(failures: &[LocaleError]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl LocaleError {
    /// Failures carried by this error; a single-element slice for non-aggregate errors
    pub fn failures(&self) -> &[LocaleError] {
        match self {
            Self::Registry { failures } => failures,
            other => std::slice::from_ref(other),
        }
    }
}

/// Result type for locale operations
pub type LocaleResult<T> = Result<T, LocaleError>;
