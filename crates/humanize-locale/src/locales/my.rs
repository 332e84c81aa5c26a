//! Burmese

use crate::catalog::EmbeddedCatalog;
use crate::descriptor::LocaleDescriptor;
use crate::error::LocaleResult;

/// Tag of the Burmese locale
pub const TAG: &str = "my";

/// Burmese descriptor; formats follow the library defaults
pub fn new() -> LocaleResult<LocaleDescriptor> {
    LocaleDescriptor::builder(TAG)
        .catalog(EmbeddedCatalog::for_locale(TAG))
        .build()
}
