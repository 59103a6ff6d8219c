//! Tag canonicalisation.
//!
//! Normalises subtag case to the conventional form (lower-case language and
//! variants, title-case script, upper-case region) and elides a script
//! subtag that the language's likely subtags already imply: `fr-Latn`
//! canonicalises to plain `fr` because `Latn` is the likely script for
//! French. Extensions and private-use values pass through unchanged.

use thiserror::Error;

use crate::formatter::{FormatError, format_bcp47};
use crate::likely_subtags::LikelySubtags;
use crate::parser::parse_bcp47;
use crate::types::LanguageTag;

/// An error that occurred during canonicalisation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanonicalError {
    /// The input string does not match the BCP47 grammar.
    #[error("not a valid BCP47 language tag: '{tag}'")]
    InvalidTag { tag: String },

    /// The record has no language subtag to look up likely subtags for.
    #[error("cannot canonicalise a tag without a language subtag")]
    MissingLanguage,

    /// The language has no entry in the likely-subtags table.
    #[error("no likely subtags entry for language '{language}'")]
    UnknownLanguage { language: String },

    /// The table entry for the language is itself not a parseable tag.
    #[error("likely subtags entry for '{language}' is not a valid tag: '{entry}'")]
    MalformedLikelyTag { language: String, entry: String },

    /// A canonicalised field failed its grammar pattern at format time.
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Canonicalise a parsed [`LanguageTag`] record.
///
/// Looks the lower-cased language up in `likely_subtags` and drops the
/// script subtag when it equals the likely tag's script. Fails when the tag
/// has no language or the language has no table entry.
pub fn canonicalise_bcp47(
    likely_subtags: &LikelySubtags,
    tag: &LanguageTag,
) -> Result<LanguageTag, CanonicalError> {
    let language = tag
        .language
        .as_deref()
        .ok_or(CanonicalError::MissingLanguage)?
        .to_ascii_lowercase();

    let entry = likely_subtags
        .get(&language)
        .ok_or_else(|| CanonicalError::UnknownLanguage {
            language: language.clone(),
        })?;
    let likely = parse_bcp47(entry).ok_or_else(|| CanonicalError::MalformedLikelyTag {
        language: language.clone(),
        entry: entry.to_string(),
    })?;

    let mut script = tag.script.as_deref().map(title_case);
    if script == likely.script {
        script = None;
    }

    Ok(LanguageTag {
        language: Some(language),
        ext_lang: tag.ext_lang.as_deref().map(str::to_ascii_lowercase),
        script,
        region: tag.region.as_deref().map(str::to_ascii_uppercase),
        variants: tag
            .variants
            .iter()
            .map(|variant| variant.to_ascii_lowercase())
            .collect(),
        extensions: tag.extensions.clone(),
        private_use: tag.private_use.clone(),
    })
}

/// Canonicalise a tag string: parse, canonicalise the record, and format.
///
/// # Example
///
/// ```
/// use langtag::{LikelySubtags, canonicalise};
///
/// let likely = LikelySubtags::bundled();
/// assert_eq!(canonicalise(&likely, "mN-cYrL-Mn").unwrap(), "mn-Cyrl-MN");
/// assert_eq!(canonicalise(&likely, "fr-Latn").unwrap(), "fr");
/// ```
pub fn canonicalise(likely_subtags: &LikelySubtags, tag: &str) -> Result<String, CanonicalError> {
    let parsed = parse_bcp47(tag).ok_or_else(|| CanonicalError::InvalidTag {
        tag: tag.to_string(),
    })?;
    let canonical = canonicalise_bcp47(likely_subtags, &parsed)?;
    Ok(format_bcp47(&canonical)?)
}

/// Title-case a subtag: first letter upper, remainder lower.
fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(s.len());
            result.push(first.to_ascii_uppercase());
            result.push_str(&chars.as_str().to_ascii_lowercase());
            result
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_normalises_mixed_input() {
        assert_eq!(title_case("cYrL"), "Cyrl");
        assert_eq!(title_case("latn"), "Latn");
        assert_eq!(title_case("HANS"), "Hans");
    }
}
