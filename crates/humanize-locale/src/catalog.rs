//! Translation catalog sources
//!
//! A catalog is the set of `.po` files a locale ships, addressed by file
//! name. Descriptors only bind a [`CatalogSource`]; parsing entries is left
//! to the formatting engine.

use crate::error::{LocaleError, LocaleResult};
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Read-only access to a locale's catalog files
pub trait CatalogSource: Debug + Send + Sync {
    /// Names of all files in the set, sorted
    fn list_files(&self) -> Vec<&str>;

    /// Raw bytes of the named file
    fn read_file(&self, name: &str) -> LocaleResult<&[u8]>;

    /// True when the set contains no files
    fn is_empty(&self) -> bool {
        self.list_files().is_empty()
    }
}

/// Compare two sources by file names and contents
pub fn catalogs_equal(a: &dyn CatalogSource, b: &dyn CatalogSource) -> bool {
    let names = a.list_files();
    if names != b.list_files() {
        return false;
    }

    names.into_iter().all(|name| match (a.read_file(name), b.read_file(name)) {
        (Ok(left), Ok(right)) => left == right,
        _ => false,
    })
}

/// A catalog file compiled into the binary
#[derive(Debug, PartialEq, Eq)]
pub struct EmbeddedFile {
    pub name: &'static str,
    pub bytes: &'static [u8],
}

/// All catalog files bundled for one locale directory
#[derive(Debug, PartialEq, Eq)]
pub struct EmbeddedLocale {
    pub tag: &'static str,
    pub files: &'static [EmbeddedFile],
}

include!(concat!(env!("OUT_DIR"), "/embedded_catalogs.rs"));

/// Tags of every locale directory bundled at build time
pub fn embedded_tags() -> impl Iterator<Item = &'static str> {
    EMBEDDED_LOCALES.iter().map(|locale| locale.tag)
}

/// Catalog backed by files bundled at build time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedCatalog {
    tag: &'static str,
    files: &'static [EmbeddedFile],
}

impl EmbeddedCatalog {
    /// Bind the bundled catalog for `tag`.
    ///
    /// Never fails: a locale without a bundled directory binds an empty set.
    pub fn for_locale(tag: &str) -> Self {
        EMBEDDED_LOCALES
            .iter()
            .find(|locale| locale.tag == tag)
            .map_or(
                Self { tag: "", files: &[] },
                |locale| Self {
                    tag: locale.tag,
                    files: locale.files,
                },
            )
    }

    /// The underlying static file table
    pub fn files(&self) -> &'static [EmbeddedFile] {
        self.files
    }
}

impl CatalogSource for EmbeddedCatalog {
    fn list_files(&self) -> Vec<&str> {
        self.files.iter().map(|file| file.name).collect()
    }

    fn read_file(&self, name: &str) -> LocaleResult<&[u8]> {
        self.files
            .iter()
            .find(|file| file.name == name)
            .map(|file| file.bytes)
            .ok_or_else(|| LocaleError::CatalogFileNotFound {
                locale: self.tag.to_string(),
                file: name.to_string(),
            })
    }
}

/// Catalog held in memory, for tests and locales registered at runtime
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryCatalog {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file, builder style
    pub fn with_file(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(name, bytes);
        self
    }

    /// Add or replace a file
    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.files.insert(name.into(), bytes.into());
    }
}

impl CatalogSource for MemoryCatalog {
    fn list_files(&self) -> Vec<&str> {
        self.files.keys().map(String::as_str).collect()
    }

    fn read_file(&self, name: &str) -> LocaleResult<&[u8]> {
        self.files
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| LocaleError::CatalogFileNotFound {
                locale: "memory".to_string(),
                file: name.to_string(),
            })
    }
}
