//! Subtag grammar predicates for BCP47 (RFC 5646).
//!
//! Each predicate tests a single subtag against the fixed pattern for its
//! class, case-insensitively. Only grammar shape is checked; whether a code
//! is actually registered with IANA is out of scope.

fn all_letters(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphabetic())
}

fn all_alphanumeric(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// A primary language subtag: 2-3 letters.
pub fn is_language(s: &str) -> bool {
    matches!(s.len(), 2..=3) && all_letters(s)
}

/// An extended language subtag: exactly 3 letters.
pub fn is_ext_lang(s: &str) -> bool {
    s.len() == 3 && all_letters(s)
}

/// A script subtag: exactly 4 letters.
pub fn is_script(s: &str) -> bool {
    s.len() == 4 && all_letters(s)
}

/// A region subtag: 2 letters or exactly 3 digits.
pub fn is_region(s: &str) -> bool {
    (s.len() == 2 && all_letters(s)) || (s.len() == 3 && s.bytes().all(|b| b.is_ascii_digit()))
}

/// A variant subtag: a letter followed by 4-7 alphanumerics, or a digit
/// followed by 3-7 alphanumerics.
pub fn is_variant(s: &str) -> bool {
    let Some(first) = s.bytes().next() else {
        return false;
    };
    if !all_alphanumeric(s) {
        return false;
    }
    if first.is_ascii_alphabetic() {
        matches!(s.len(), 5..=8)
    } else {
        matches!(s.len(), 4..=8)
    }
}

/// An extension singleton: one alphanumeric character, excluding `x`/`X`,
/// which is reserved to introduce private-use subtags.
pub fn is_singleton(s: &str) -> bool {
    s.len() == 1
        && s.bytes()
            .next()
            .is_some_and(|b| b.is_ascii_alphanumeric() && b != b'x' && b != b'X')
}

/// An extension value: 2-8 alphanumerics.
pub fn is_extension_value(s: &str) -> bool {
    matches!(s.len(), 2..=8) && all_alphanumeric(s)
}

/// A private-use value: 1-8 alphanumerics.
pub fn is_private_use_value(s: &str) -> bool {
    matches!(s.len(), 1..=8) && all_alphanumeric(s)
}
