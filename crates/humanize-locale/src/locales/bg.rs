//! Bulgarian

use crate::catalog::EmbeddedCatalog;
use crate::descriptor::LocaleDescriptor;
use crate::error::LocaleResult;

/// Tag of the Bulgarian locale
pub const TAG: &str = "bg";

/// Bulgarian descriptor with its own date and time conventions
pub fn new() -> LocaleResult<LocaleDescriptor> {
    LocaleDescriptor::builder(TAG)
        .catalog(EmbeddedCatalog::for_locale(TAG))
        .date_format("d F Y")
        .time_format("H:i")
        .month_day_format("j F")
        .short_date_format("d.m.Y")
        .build()
}
