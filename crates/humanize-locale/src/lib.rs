//! Locale data registrations for the humanize library
//!
//! Every supported language is described by a [`LocaleDescriptor`]: a
//! validated BCP-47 tag, a handle to the `.po` catalogs bundled for that
//! language, and optional date/time pattern overrides. This crate only
//! declares and validates that data; translating messages, evaluating plural
//! rules and rendering dates belong to the formatting engine that consumes
//! the descriptors.
//!
//! It includes:
//!
//! - The descriptor builder and one registration function per locale
//! - Catalog sources bundled at build time or held in memory
//! - A registry with tag uniqueness, aggregated failure reporting and
//!   fallback resolution for variant tags
//!
//! # Example
//!
//! ```rust
//! use humanize_locale::{global, FormatKind};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = global()?;
//! let bulgarian = registry.resolve("bg-BG").expect("bg is built in");
//!
//! assert_eq!(bulgarian.tag(), "bg");
//! assert_eq!(bulgarian.format_override(FormatKind::ShortDate), Some("d.m.Y"));
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod format;
pub mod locales;
pub mod registry;
pub mod tag;

pub use catalog::{catalogs_equal, CatalogSource, EmbeddedCatalog, MemoryCatalog};
pub use config::RegistryConfig;
pub use descriptor::{LocaleDescriptor, LocaleDescriptorBuilder};
pub use error::{LocaleError, LocaleResult};
pub use format::{FormatDefaults, FormatKind, FormatOverrides, PatternToken, ResolvedFormats};
pub use locales::{LocaleBuilderFn, BUILTIN};
pub use registry::{global, LocaleRegistry};
pub use tag::{canonicalize, fallback_chain, parse_language_tag};

// Re-export the identifier type used throughout the public API
pub use unic_langid::LanguageIdentifier;
