//! Property-based invariant tests for tags and format patterns.
//!
//! 1. Canonicalization is idempotent
//! 2. Fallback chains start at the input and end at the bare language
//! 3. Tokenizing an escape-free pattern loses nothing
//! 4. Resolution keeps every override and fills every gap

use humanize_locale::format::{tokenize, PatternToken};
use humanize_locale::{
    canonicalize, fallback_chain, parse_language_tag, FormatDefaults, FormatKind, FormatOverrides,
};
use proptest::prelude::*;

fn tag_strategy() -> impl Strategy<Value = String> {
    (
        "[a-z]{2,3}",
        proptest::option::of("[A-Z][a-z]{3}"),
        proptest::option::of("[A-Z]{2}"),
    )
        .prop_map(|(language, script, region)| {
            let mut tag = language;
            for subtag in [script, region].into_iter().flatten() {
                tag.push('-');
                tag.push_str(&subtag);
            }
            tag
        })
}

fn render(tokens: &[PatternToken]) -> String {
    tokens
        .iter()
        .map(|token| match token {
            PatternToken::Field(c) => c.to_string(),
            PatternToken::Literal(text) => text.clone(),
        })
        .collect()
}

proptest! {
    #[test]
    fn canonicalize_is_idempotent(tag in tag_strategy()) {
        let once = canonicalize(&tag).unwrap();
        let twice = canonicalize(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn fallback_chain_bounds(tag in tag_strategy()) {
        let lang = parse_language_tag(&tag).unwrap();
        let chain = fallback_chain(&lang);

        prop_assert_eq!(&chain[0], &lang);
        let last = chain.last().unwrap();
        prop_assert_eq!(last.to_string(), lang.language.to_string());
        prop_assert!(chain.len() <= 3);
    }

    #[test]
    fn tokenize_preserves_escape_free_patterns(pattern in "[a-zA-Z .,:/-]{0,24}") {
        let tokens = tokenize(&pattern);
        prop_assert_eq!(render(&tokens), pattern);
    }

    #[test]
    fn resolve_keeps_overrides(date in proptest::option::of("[a-zA-Z .]{1,8}"),
                               time in proptest::option::of("[a-zA-Z:]{1,8}")) {
        let mut overrides = FormatOverrides::default();
        if let Some(date) = &date {
            overrides.set(FormatKind::Date, date.clone());
        }
        if let Some(time) = &time {
            overrides.set(FormatKind::Time, time.clone());
        }

        let defaults = FormatDefaults::default();
        let resolved = overrides.resolve(&defaults);

        prop_assert_eq!(resolved.get(FormatKind::Date), date.as_deref().unwrap_or(defaults.date_format));
        prop_assert_eq!(resolved.get(FormatKind::Time), time.as_deref().unwrap_or(defaults.time_format));
        prop_assert_eq!(resolved.get(FormatKind::MonthDay), defaults.month_day_format);
        prop_assert_eq!(resolved.get(FormatKind::ShortDate), defaults.short_date_format);
    }
}
