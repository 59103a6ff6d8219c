pub mod canonical;
pub mod formatter;
pub mod grammar;
pub mod likely_subtags;
pub mod parser;
pub mod types;

pub use canonical::{CanonicalError, canonicalise, canonicalise_bcp47};
pub use formatter::{FormatError, format_bcp47};
pub use likely_subtags::{LIKELY_SUBTAGS, LikelySubtags};
pub use parser::{InvalidTag, parse_bcp47};
pub use types::LanguageTag;
