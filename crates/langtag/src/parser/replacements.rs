//! Grandfathered-tag replacements.
//!
//! BCP47 grandfathers 26 tags registered under RFC 1766/3066 that do not fit
//! the modern grammar. Each maps to a fixed modern equivalent, substituted
//! verbatim before parsing.

/// Look up the modern replacement for a grandfathered tag.
///
/// The match is verbatim: grandfathered tags are fixed spellings and are not
/// case-normalised before lookup.
pub fn grandfathered_replacement(tag: &str) -> Option<&'static str> {
    match tag {
        // Irregular
        "en-GB-oed" => Some("en-GB-x-oed"),
        "i-ami" => Some("ami"),
        "i-bnn" => Some("bnn"),
        "i-default" => Some("en-x-i-default"),
        "i-enochian" => Some("und-x-i-enochian"),
        "i-hak" => Some("hak"),
        "i-klingon" => Some("tlh"),
        "i-lux" => Some("lb"),
        "i-mingo" => Some("see-x-i-mingo"),
        "i-navajo" => Some("nv"),
        "i-pwn" => Some("pwn"),
        "i-tao" => Some("tao"),
        "i-tay" => Some("tay"),
        "i-tsu" => Some("tsu"),
        "sgn-BE-FR" => Some("sfb"),
        "sgn-BE-NL" => Some("vgt"),
        "sgn-CH-DE" => Some("sgg"),
        // Regular
        "art-lojban" => Some("jbo"),
        "cel-gaulish" => Some("xtg-x-cel-gaulish"),
        "no-bok" => Some("nb"),
        "no-nyn" => Some("nn"),
        "zh-guoyu" => Some("cmn"),
        "zh-hakka" => Some("hak"),
        "zh-min" => Some("nan-x-zh-min"),
        "zh-min-nan" => Some("nan"),
        "zh-xiang" => Some("hsn"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn irregular_tags_map_to_modern_equivalents() {
        assert_eq!(grandfathered_replacement("i-klingon"), Some("tlh"));
        assert_eq!(grandfathered_replacement("en-GB-oed"), Some("en-GB-x-oed"));
        assert_eq!(grandfathered_replacement("sgn-BE-NL"), Some("vgt"));
    }

    #[test]
    fn regular_tags_map_to_modern_equivalents() {
        assert_eq!(grandfathered_replacement("zh-min-nan"), Some("nan"));
        assert_eq!(grandfathered_replacement("art-lojban"), Some("jbo"));
    }

    #[test]
    fn lookup_is_verbatim() {
        assert_eq!(grandfathered_replacement("I-KLINGON"), None);
        assert_eq!(grandfathered_replacement("zh-Min-Nan"), None);
        assert_eq!(grandfathered_replacement("en-US"), None);
    }
}
