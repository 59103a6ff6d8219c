//! Parse error types.

use thiserror::Error;

/// The tag does not match the BCP47 grammar.
///
/// The primary entry point, [`parse_bcp47`](super::parse_bcp47), reports the
/// invalid case as `None` so callers can branch without an error value; this
/// type backs the `FromStr` surface for callers who want `?` propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not a valid BCP47 language tag")]
pub struct InvalidTag;
