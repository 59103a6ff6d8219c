//! BCP47 tag parser.
//!
//! Splits a hyphen-delimited tag into subtags and walks them with a single
//! forward cursor, consuming each grammar phase greedily and in order:
//! language, extlangs, script, region, variants, extension groups, then
//! private-use values. A phase that cannot match at the current position is
//! skipped; only leftover unconsumed subtags at the end make a tag invalid.

mod error;
mod replacements;

pub use error::InvalidTag;
pub use replacements::grandfathered_replacement;

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::grammar;
use crate::types::LanguageTag;

/// Cursor bound for the extlang loop. The bound is an absolute subtag
/// position, not a count of consumed extlangs: with the language at position
/// 0, extlangs may occupy positions 1 through 3.
const EXT_LANG_POSITION_CAP: usize = 4;

/// Parse a BCP47 language tag.
///
/// Returns `None` when the tag does not match the grammar. Grandfathered
/// tags (e.g. `i-klingon`, `zh-min-nan`) are substituted with their modern
/// replacement before parsing.
///
/// # Example
///
/// ```
/// use langtag::parse_bcp47;
///
/// let tag = parse_bcp47("zh-Hans-CN").unwrap();
/// assert_eq!(tag.language.as_deref(), Some("zh"));
/// assert_eq!(tag.script.as_deref(), Some("Hans"));
/// assert_eq!(tag.region.as_deref(), Some("CN"));
///
/// assert!(parse_bcp47("de-419-DE").is_none());
/// ```
pub fn parse_bcp47(tag: &str) -> Option<LanguageTag> {
    let tag = grandfathered_replacement(tag).unwrap_or(tag);

    let parts: Vec<&str> = tag.split('-').collect();
    // split always yields at least one part; kept as a guard.
    if parts.is_empty() {
        return None;
    }

    let mut i = 0;
    let mut language = None;
    let mut ext_langs: Vec<&str> = Vec::new();
    let mut script = None;
    let mut region = None;
    let mut variants: Vec<String> = Vec::new();
    let mut extensions: BTreeMap<char, Vec<String>> = BTreeMap::new();
    let mut private_use: Vec<String> = Vec::new();

    if grammar::is_language(parts[i]) {
        language = Some(parts[i].to_string());
        i += 1;

        while i < parts.len() && i < EXT_LANG_POSITION_CAP && grammar::is_ext_lang(parts[i]) {
            ext_langs.push(parts[i]);
            i += 1;
        }

        if i < parts.len() && grammar::is_script(parts[i]) {
            script = Some(parts[i].to_string());
            i += 1;
        }

        if i < parts.len() && grammar::is_region(parts[i]) {
            region = Some(parts[i].to_string());
            i += 1;
        }

        while i < parts.len() && grammar::is_variant(parts[i]) {
            variants.push(parts[i].to_string());
            i += 1;
        }

        while i < parts.len() && grammar::is_singleton(parts[i]) {
            let singleton = parts[i].chars().next()?.to_ascii_lowercase();
            i += 1;

            // A repeated singleton invalidates the whole tag.
            if extensions.contains_key(&singleton) {
                return None;
            }

            let mut values = Vec::new();
            while i < parts.len() && grammar::is_extension_value(parts[i]) {
                values.push(parts[i].to_string());
                i += 1;
            }
            extensions.insert(singleton, values);
        }
    }

    if i < parts.len() && (parts[i] == "x" || parts[i] == "X") {
        i += 1;

        while i < parts.len() && grammar::is_private_use_value(parts[i]) {
            private_use.push(parts[i].to_string());
            i += 1;
        }
    }

    if i != parts.len() {
        return None;
    }

    Some(LanguageTag {
        language,
        ext_lang: if ext_langs.is_empty() {
            None
        } else {
            Some(ext_langs.join("-"))
        },
        script,
        region,
        variants,
        extensions,
        private_use,
    })
}

impl FromStr for LanguageTag {
    type Err = InvalidTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_bcp47(s).ok_or(InvalidTag)
    }
}
