//! Built-in locale registrations
//!
//! Each submodule registers exactly one language. Adding a locale means a
//! `locales/<tag>/` catalog directory, a submodule here and an entry in
//! [`BUILTIN`].

use crate::descriptor::LocaleDescriptor;
use crate::error::LocaleResult;

pub mod bg;
pub mod my;

/// Constructor producing one locale descriptor
pub type LocaleBuilderFn = fn() -> LocaleResult<LocaleDescriptor>;

/// Every built-in locale constructor
pub const BUILTIN: &[LocaleBuilderFn] = &[bg::new, my::new];

/// Bulgarian descriptor
pub fn bg() -> LocaleResult<LocaleDescriptor> {
    bg::new()
}

/// Burmese descriptor
pub fn my() -> LocaleResult<LocaleDescriptor> {
    my::new()
}
