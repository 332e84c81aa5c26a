//! Integration tests for the built-in locale descriptors.
//!
//! Covers tag canonicalization, catalog binding, format overrides,
//! constructor idempotence and tag uniqueness across the built-in table.

use humanize_common::test_utils::init_test_logging;
use humanize_locale::{
    canonicalize, locales, CatalogSource, EmbeddedCatalog, FormatDefaults, FormatKind,
    LocaleDescriptor, BUILTIN,
};
use std::collections::HashSet;

fn all_builtin() -> Vec<LocaleDescriptor> {
    BUILTIN.iter().map(|build| build().unwrap()).collect()
}

#[test]
fn test_builtin_tags_round_trip() {
    init_test_logging();

    for descriptor in all_builtin() {
        let tag = descriptor.tag();
        assert_eq!(canonicalize(&tag).unwrap(), tag);
    }

    assert_eq!(locales::bg().unwrap().tag(), "bg");
    assert_eq!(locales::my().unwrap().tag(), "my");
}

#[test]
fn test_builtin_catalogs_are_bindable() {
    for descriptor in all_builtin() {
        let catalog = descriptor.catalog();
        for name in catalog.list_files() {
            let bytes = catalog.read_file(name).unwrap();
            assert!(std::str::from_utf8(bytes).is_ok(), "{} in {} is not UTF-8", name, descriptor.tag());
        }
    }
}

#[test]
fn test_empty_catalog_is_still_bindable() {
    let descriptor = LocaleDescriptor::builder("my")
        .catalog(EmbeddedCatalog::for_locale("zz"))
        .build()
        .unwrap();

    assert!(descriptor.catalog().list_files().is_empty());
}

#[test]
fn test_my_falls_back_to_library_defaults() {
    let descriptor = locales::my().unwrap();
    assert!(descriptor.format().is_none());

    for kind in FormatKind::ALL {
        assert_eq!(descriptor.format_override(kind), None);
    }

    let defaults = FormatDefaults::default();
    let resolved = descriptor.resolved_formats();
    assert_eq!(resolved.date_format, defaults.date_format);
    assert_eq!(resolved.time_format, defaults.time_format);
    assert_eq!(resolved.month_day_format, defaults.month_day_format);
    assert_eq!(resolved.short_date_format, defaults.short_date_format);
}

#[test]
fn test_bg_overrides_are_verbatim() {
    let descriptor = locales::bg().unwrap();
    let format = descriptor.format().unwrap();

    assert_eq!(format.date_format.as_deref(), Some("d F Y"));
    assert_eq!(format.time_format.as_deref(), Some("H:i"));
    assert_eq!(format.month_day_format.as_deref(), Some("j F"));
    assert_eq!(format.short_date_format.as_deref(), Some("d.m.Y"));

    let resolved = descriptor.resolved_formats();
    assert_eq!(resolved.get(FormatKind::Date), "d F Y");
    assert_eq!(resolved.get(FormatKind::ShortDate), "d.m.Y");
}

#[test]
fn test_constructors_are_idempotent() {
    for build in BUILTIN {
        let first = build().unwrap();
        let second = build().unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_embedded_catalogs_share_static_data() {
    let first = EmbeddedCatalog::for_locale("bg");
    let second = EmbeddedCatalog::for_locale("bg");
    assert!(std::ptr::eq(first.files(), second.files()));
}

#[test]
fn test_builtin_tags_are_unique() {
    let descriptors = all_builtin();
    let tags: HashSet<String> = descriptors.iter().map(LocaleDescriptor::tag).collect();
    assert_eq!(tags.len(), descriptors.len());
}

#[test]
fn test_distinct_locales_are_not_equal() {
    assert_ne!(locales::bg().unwrap(), locales::my().unwrap());
}
