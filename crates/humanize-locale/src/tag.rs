//! Language tag parsing and fallback chains

use crate::error::{LocaleError, LocaleResult};
use unic_langid::LanguageIdentifier;

/// Parse a BCP-47 tag into a canonical language identifier
pub fn parse_language_tag(tag: &str) -> LocaleResult<LanguageIdentifier> {
    tag.parse().map_err(|_| LocaleError::InvalidLanguageTag {
        tag: tag.to_string(),
    })
}

/// Canonical string form of `tag`, e.g. `"EN_us"` -> `"en-US"`
pub fn canonicalize(tag: &str) -> LocaleResult<String> {
    parse_language_tag(tag).map(|langid| langid.to_string())
}

/// Progressively less specific identifiers to try for `langid`.
///
/// Starts with `langid` itself, then drops variants, region and script in
/// that order. Steps that change nothing are skipped, so a bare language
/// yields a single-element chain.
pub fn fallback_chain(langid: &LanguageIdentifier) -> Vec<LanguageIdentifier> {
    let mut chain = vec![langid.clone()];
    let mut current = langid.clone();

    current.clear_variants();
    push_distinct(&mut chain, &current);

    current.region = None;
    push_distinct(&mut chain, &current);

    current.script = None;
    push_distinct(&mut chain, &current);

    chain
}

fn push_distinct(chain: &mut Vec<LanguageIdentifier>, candidate: &LanguageIdentifier) {
    if chain.last() != Some(candidate) {
        chain.push(candidate.clone());
    }
}
