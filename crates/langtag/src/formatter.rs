//! BCP47 tag formatter.
//!
//! Emission mirrors the parser's consumption order. Every populated field is
//! re-validated against its grammar pattern before it is emitted; a record
//! holding an out-of-grammar value is a hard, field-identifying error, never
//! silently coerced output. Case is preserved as stored.

use thiserror::Error;

use crate::grammar;
use crate::types::LanguageTag;

/// A record field failed its grammar pattern at format time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The language subtag does not match the language pattern.
    #[error("invalid language subtag: '{subtag}'")]
    Language { subtag: String },

    /// The extended language subtag does not match the extlang pattern.
    #[error("invalid extended language subtag: '{subtag}'")]
    ExtLang { subtag: String },

    /// The script subtag does not match the script pattern.
    #[error("invalid script subtag: '{subtag}'")]
    Script { subtag: String },

    /// The region subtag does not match the region pattern.
    #[error("invalid region subtag: '{subtag}'")]
    Region { subtag: String },

    /// A variant subtag does not match the variant pattern.
    #[error("invalid variant subtag: '{subtag}'")]
    Variant { subtag: String },

    /// An extension key is not a valid singleton.
    #[error("invalid extension singleton: '{singleton}'")]
    ExtensionKey { singleton: char },

    /// An extension value does not match the extension-value pattern.
    #[error("invalid extension value: '{value}'")]
    ExtensionValue { value: String },

    /// A private-use value does not match the private-use pattern.
    #[error("invalid private-use value: '{value}'")]
    PrivateUse { value: String },
}

/// Format a [`LanguageTag`] record back into a hyphen-delimited tag string.
///
/// The extlang, script, region, variant, and extension blocks are emitted
/// only when a language is present (they are meaningless without one).
/// Extension groups emit in ascending singleton order, and private-use
/// values emit last behind a literal `x`, only when non-empty.
///
/// # Example
///
/// ```
/// use langtag::{format_bcp47, parse_bcp47};
///
/// let tag = parse_bcp47("hy-Latn-IT-arevela").unwrap();
/// assert_eq!(format_bcp47(&tag).unwrap(), "hy-Latn-IT-arevela");
/// ```
pub fn format_bcp47(tag: &LanguageTag) -> Result<String, FormatError> {
    let mut parts: Vec<String> = Vec::new();

    if let Some(language) = &tag.language {
        if !grammar::is_language(language) {
            return Err(FormatError::Language {
                subtag: language.clone(),
            });
        }
        parts.push(language.clone());

        if let Some(ext_lang) = &tag.ext_lang {
            // The single-subtag pattern applies here, so a hyphen-joined
            // multi-extlang run is rejected.
            if !grammar::is_ext_lang(ext_lang) {
                return Err(FormatError::ExtLang {
                    subtag: ext_lang.clone(),
                });
            }
            parts.push(ext_lang.clone());
        }

        if let Some(script) = &tag.script {
            if !grammar::is_script(script) {
                return Err(FormatError::Script {
                    subtag: script.clone(),
                });
            }
            parts.push(script.clone());
        }

        if let Some(region) = &tag.region {
            if !grammar::is_region(region) {
                return Err(FormatError::Region {
                    subtag: region.clone(),
                });
            }
            parts.push(region.clone());
        }

        for variant in &tag.variants {
            if !grammar::is_variant(variant) {
                return Err(FormatError::Variant {
                    subtag: variant.clone(),
                });
            }
            parts.push(variant.clone());
        }

        for (&singleton, values) in &tag.extensions {
            let key = singleton.to_string();
            if !grammar::is_singleton(&key) {
                return Err(FormatError::ExtensionKey { singleton });
            }
            parts.push(key);

            for value in values {
                if !grammar::is_extension_value(value) {
                    return Err(FormatError::ExtensionValue {
                        value: value.clone(),
                    });
                }
                parts.push(value.clone());
            }
        }
    }

    if !tag.private_use.is_empty() {
        parts.push("x".to_string());

        for value in &tag.private_use {
            if !grammar::is_private_use_value(value) {
                return Err(FormatError::PrivateUse {
                    value: value.clone(),
                });
            }
            parts.push(value.clone());
        }
    }

    Ok(parts.join("-"))
}
