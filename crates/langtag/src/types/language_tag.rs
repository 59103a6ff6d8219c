use std::collections::BTreeMap;

use bon::Builder;
use serde::{Deserialize, Serialize};

/// A structured BCP47 language tag.
///
/// This is an immutable value record: parsing constructs a fresh one,
/// formatting and canonicalisation consume it whole, and equality is value
/// equality. Absent scalar fields are `None`; absent sequences are empty
/// collections, never an empty string.
///
/// # Example
///
/// ```
/// use langtag::{LanguageTag, parse_bcp47};
///
/// let tag = parse_bcp47("sr-Latn-RS").unwrap();
/// let expected = LanguageTag::builder()
///     .language("sr")
///     .script("Latn")
///     .region("RS")
///     .build();
/// assert_eq!(tag, expected);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct LanguageTag {
    /// Primary language code (ISO 639). `None` only for private-use-only
    /// tags such as `x-whatever`.
    pub language: Option<String>,

    /// Extended language subtags, hyphen-joined (e.g. `"cmn"`).
    pub ext_lang: Option<String>,

    /// Script code (ISO 15924), e.g. `"Hans"`.
    pub script: Option<String>,

    /// Region code (ISO 3166-1 or UN M.49), e.g. `"CN"` or `"419"`.
    pub region: Option<String>,

    /// Variant subtags in source order. Order is significant and preserved.
    #[builder(default)]
    pub variants: Vec<String>,

    /// Extension groups keyed by singleton. Keys are stored lower-cased and
    /// are unique per tag; the ordered map makes the lexicographic emission
    /// order structural.
    #[builder(default)]
    pub extensions: BTreeMap<char, Vec<String>>,

    /// Private-use values following the `x` singleton, in source order.
    #[builder(default)]
    pub private_use: Vec<String>,
}

impl LanguageTag {
    /// True when the tag carries only private-use values (no language).
    pub fn is_private_use_only(&self) -> bool {
        self.language.is_none() && !self.private_use.is_empty()
    }
}
