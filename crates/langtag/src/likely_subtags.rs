//! The likely-subtags lookup table.
//!
//! CLDR-style data mapping a bare language code to the full tag it most
//! likely denotes (e.g. `"fr"` to `"fr-Latn-FR"`). Canonicalisation uses
//! this to elide a script subtag that the language alone already implies.
//! The bundled data is a read-only constant; maintaining it is out of scope
//! for this crate, and callers can inject their own table instead.

use std::collections::HashMap;

/// Read-only lookup table from language code to likely full tag.
///
/// # Example
///
/// ```
/// use langtag::LikelySubtags;
///
/// let likely = LikelySubtags::bundled();
/// assert_eq!(likely.get("fr"), Some("fr-Latn-FR"));
/// assert_eq!(likely.get("zz"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LikelySubtags {
    entries: HashMap<String, String>,
}

impl LikelySubtags {
    /// The bundled [`LIKELY_SUBTAGS`] data as a ready-made table.
    pub fn bundled() -> Self {
        Self::from_pairs(LIKELY_SUBTAGS.iter().copied())
    }

    /// Build a table from `(language, likely tag)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(language, tag)| (language.to_string(), tag.to_string()))
                .collect(),
        }
    }

    /// Look up the likely full tag for a language code.
    pub fn get(&self, language: &str) -> Option<&str> {
        self.entries.get(language).map(String::as_str)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Bundled likely-subtags data: language code to its likely full tag.
pub const LIKELY_SUBTAGS: &[(&str, &str)] = &[
    ("af", "af-Latn-ZA"),
    ("am", "am-Ethi-ET"),
    ("ar", "ar-Arab-EG"),
    ("as", "as-Beng-IN"),
    ("az", "az-Latn-AZ"),
    ("be", "be-Cyrl-BY"),
    ("bg", "bg-Cyrl-BG"),
    ("bn", "bn-Beng-BD"),
    ("bo", "bo-Tibt-CN"),
    ("br", "br-Latn-FR"),
    ("bs", "bs-Latn-BA"),
    ("ca", "ca-Latn-ES"),
    ("cmn", "cmn-Hans-CN"),
    ("cs", "cs-Latn-CZ"),
    ("cy", "cy-Latn-GB"),
    ("da", "da-Latn-DK"),
    ("de", "de-Latn-DE"),
    ("dv", "dv-Thaa-MV"),
    ("dz", "dz-Tibt-BT"),
    ("el", "el-Grek-GR"),
    ("en", "en-Latn-US"),
    ("eo", "eo-Latn-001"),
    ("es", "es-Latn-ES"),
    ("et", "et-Latn-EE"),
    ("eu", "eu-Latn-ES"),
    ("fa", "fa-Arab-IR"),
    ("fi", "fi-Latn-FI"),
    ("fil", "fil-Latn-PH"),
    ("fo", "fo-Latn-FO"),
    ("fr", "fr-Latn-FR"),
    ("ga", "ga-Latn-IE"),
    ("gl", "gl-Latn-ES"),
    ("gu", "gu-Gujr-IN"),
    ("hak", "hak-Hans-CN"),
    ("he", "he-Hebr-IL"),
    ("hi", "hi-Deva-IN"),
    ("hr", "hr-Latn-HR"),
    ("hsn", "hsn-Hans-CN"),
    ("hu", "hu-Latn-HU"),
    ("hy", "hy-Armn-AM"),
    ("id", "id-Latn-ID"),
    ("is", "is-Latn-IS"),
    ("it", "it-Latn-IT"),
    ("ja", "ja-Jpan-JP"),
    ("ka", "ka-Geor-GE"),
    ("kk", "kk-Cyrl-KZ"),
    ("km", "km-Khmr-KH"),
    ("kn", "kn-Knda-IN"),
    ("ko", "ko-Kore-KR"),
    ("ku", "ku-Latn-TR"),
    ("ky", "ky-Cyrl-KG"),
    ("lb", "lb-Latn-LU"),
    ("lo", "lo-Laoo-LA"),
    ("lt", "lt-Latn-LT"),
    ("lv", "lv-Latn-LV"),
    ("mk", "mk-Cyrl-MK"),
    ("ml", "ml-Mlym-IN"),
    ("mn", "mn-Mong-MN"),
    ("mr", "mr-Deva-IN"),
    ("ms", "ms-Latn-MY"),
    ("mt", "mt-Latn-MT"),
    ("my", "my-Mymr-MM"),
    ("nan", "nan-Hans-CN"),
    ("nb", "nb-Latn-NO"),
    ("ne", "ne-Deva-NP"),
    ("nl", "nl-Latn-NL"),
    ("nn", "nn-Latn-NO"),
    ("nv", "nv-Latn-US"),
    ("or", "or-Orya-IN"),
    ("pa", "pa-Guru-IN"),
    ("pl", "pl-Latn-PL"),
    ("ps", "ps-Arab-AF"),
    ("pt", "pt-Latn-BR"),
    ("ro", "ro-Latn-RO"),
    ("ru", "ru-Cyrl-RU"),
    ("sd", "sd-Arab-PK"),
    ("si", "si-Sinh-LK"),
    ("sk", "sk-Latn-SK"),
    ("sl", "sl-Latn-SI"),
    ("so", "so-Latn-SO"),
    ("sq", "sq-Latn-AL"),
    ("sr", "sr-Cyrl-RS"),
    ("sv", "sv-Latn-SE"),
    ("sw", "sw-Latn-TZ"),
    ("ta", "ta-Taml-IN"),
    ("te", "te-Telu-IN"),
    ("tg", "tg-Cyrl-TJ"),
    ("th", "th-Thai-TH"),
    ("ti", "ti-Ethi-ET"),
    ("tk", "tk-Latn-TM"),
    ("tr", "tr-Latn-TR"),
    ("tt", "tt-Cyrl-RU"),
    ("ug", "ug-Arab-CN"),
    ("uk", "uk-Cyrl-UA"),
    ("und", "en-Latn-US"),
    ("ur", "ur-Arab-PK"),
    ("uz", "uz-Latn-UZ"),
    ("vi", "vi-Latn-VN"),
    ("yi", "yi-Hebr-001"),
    ("yue", "yue-Hant-HK"),
    ("zh", "zh-Hans-CN"),
    ("zu", "zu-Latn-ZA"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_table_matches_constant_data() {
        let likely = LikelySubtags::bundled();
        assert_eq!(likely.len(), LIKELY_SUBTAGS.len());
        assert!(!likely.is_empty());
        assert_eq!(likely.get("mn"), Some("mn-Mong-MN"));
        assert_eq!(likely.get("sr"), Some("sr-Cyrl-RS"));
    }

    #[test]
    fn every_bundled_entry_is_a_parseable_tag() {
        for (language, entry) in LIKELY_SUBTAGS {
            let parsed = crate::parse_bcp47(entry);
            assert!(parsed.is_some(), "entry for '{language}' does not parse");
        }
    }

    #[test]
    fn from_pairs_builds_custom_tables() {
        let likely = LikelySubtags::from_pairs([("tlh", "tlh-Latn-001")]);
        assert_eq!(likely.len(), 1);
        assert_eq!(likely.get("tlh"), Some("tlh-Latn-001"));
        assert_eq!(likely.get("en"), None);
    }
}
