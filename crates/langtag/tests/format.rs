//! Integration tests for BCP47 tag formatting.

use std::collections::BTreeMap;

use langtag::{FormatError, LanguageTag, format_bcp47, parse_bcp47};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

// =========================================================================
// Round-trip identity
// =========================================================================

#[test]
fn format_is_the_inverse_of_parse() {
    let corpus = [
        "de",
        "fr",
        "ja",
        "zh-Hant",
        "zh-Hans",
        "sr-Cyrl",
        "sr-Latn",
        "zh-cmn-Hans-CN",
        "cmn-Hans-CN",
        "zh-yue-HK",
        "yue-HK",
        "zh-Hans-CN",
        "sr-Latn-RS",
        "sl-rozaj",
        "sl-rozaj-biske",
        "sl-nedis",
        "de-CH-1901",
        "sl-IT-nedis",
        "hy-Latn-IT-arevela",
        "de-DE",
        "en-US",
        "es-419",
        "de-CH-x-phonebk",
        "az-Arab-x-AZE-derbend",
        "x-whatever",
        "qaa-Qaaa-QM-x-southern",
        "de-Qaaa",
        "sr-Latn-QM",
        "sr-Qaaa-RS",
        "en-US-u-islamcal",
        "zh-CN-a-myext-x-private",
        "en-a-myext-b-another",
    ];

    for tag in corpus {
        let parsed = parse_bcp47(tag).unwrap();
        assert_eq!(format_bcp47(&parsed).unwrap(), tag, "round trip of {tag}");
    }
}

// =========================================================================
// Emission rules
// =========================================================================

#[test]
fn extension_keys_emit_in_ascending_order() {
    // Construction order does not matter; emission order is lexicographic.
    let tag = LanguageTag::builder()
        .language("en")
        .extensions(BTreeMap::from([
            ('b', strings(&["second"])),
            ('a', strings(&["first"])),
        ]))
        .build();
    assert_eq!(format_bcp47(&tag).unwrap(), "en-a-first-b-second");
}

#[test]
fn subtags_after_the_language_need_a_language() {
    // Script, region, and variants are only emitted inside the language
    // block; without a language only the private-use block remains.
    let tag = LanguageTag::builder()
        .script("Latn")
        .region("RS")
        .variants(strings(&["rozaj"]))
        .private_use(strings(&["abc"]))
        .build();
    assert_eq!(format_bcp47(&tag).unwrap(), "x-abc");
}

#[test]
fn empty_record_formats_to_empty_string() {
    let tag = LanguageTag::default();
    assert_eq!(format_bcp47(&tag).unwrap(), "");
}

#[test]
fn private_use_block_is_skipped_when_empty() {
    let tag = LanguageTag::builder().language("de").build();
    assert_eq!(format_bcp47(&tag).unwrap(), "de");
}

// =========================================================================
// Field re-validation
// =========================================================================

#[test]
fn invalid_language_is_a_field_error() {
    let tag = LanguageTag::builder().language("deutsch").build();
    assert_eq!(
        format_bcp47(&tag),
        Err(FormatError::Language {
            subtag: "deutsch".to_string()
        })
    );
}

#[test]
fn joined_multi_ext_lang_fails_to_format() {
    let tag = parse_bcp47("zh-aaa-bbb-ccc").unwrap();
    assert_eq!(tag.ext_lang.as_deref(), Some("aaa-bbb-ccc"));
    assert_eq!(
        format_bcp47(&tag),
        Err(FormatError::ExtLang {
            subtag: "aaa-bbb-ccc".to_string()
        })
    );
}

#[test]
fn invalid_script_is_a_field_error() {
    let tag = LanguageTag::builder().language("sr").script("Lat").build();
    assert_eq!(
        format_bcp47(&tag),
        Err(FormatError::Script {
            subtag: "Lat".to_string()
        })
    );
}

#[test]
fn invalid_region_is_a_field_error() {
    let tag = LanguageTag::builder().language("de").region("41").build();
    assert_eq!(
        format_bcp47(&tag),
        Err(FormatError::Region {
            subtag: "41".to_string()
        })
    );
}

#[test]
fn invalid_variant_is_a_field_error() {
    let tag = LanguageTag::builder()
        .language("sl")
        .variants(strings(&["abc"]))
        .build();
    assert_eq!(
        format_bcp47(&tag),
        Err(FormatError::Variant {
            subtag: "abc".to_string()
        })
    );
}

#[test]
fn x_singleton_key_is_a_field_error() {
    let tag = LanguageTag::builder()
        .language("en")
        .extensions(BTreeMap::from([('x', strings(&["oops"]))]))
        .build();
    assert_eq!(
        format_bcp47(&tag),
        Err(FormatError::ExtensionKey { singleton: 'x' })
    );
}

#[test]
fn invalid_extension_value_is_a_field_error() {
    let tag = LanguageTag::builder()
        .language("en")
        .extensions(BTreeMap::from([('u', strings(&["a"]))]))
        .build();
    assert_eq!(
        format_bcp47(&tag),
        Err(FormatError::ExtensionValue {
            value: "a".to_string()
        })
    );
}

#[test]
fn invalid_private_use_value_is_a_field_error() {
    let tag = LanguageTag::builder()
        .private_use(strings(&["toolongvalue"]))
        .build();
    assert_eq!(
        format_bcp47(&tag),
        Err(FormatError::PrivateUse {
            value: "toolongvalue".to_string()
        })
    );
}

#[test]
fn format_errors_identify_the_field_in_their_message() {
    let err = FormatError::Script {
        subtag: "Lat".to_string(),
    };
    assert_eq!(err.to_string(), "invalid script subtag: 'Lat'");
}

// =========================================================================
// Serde
// =========================================================================

#[test]
fn language_tag_round_trips_through_serde() {
    let tag = parse_bcp47("zh-CN-a-myext-x-private").unwrap();
    let json = serde_json::to_string(&tag).unwrap();
    let back: LanguageTag = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tag);
}
