//! Error type for the matching engine.
//!
//! All failures are local and synchronous: the engine never retries and
//! never returns a partial palette.

/// Errors produced by color parsing and palette selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// The input string is not a 6-digit hex color (`#RRGGBB`, `#` optional).
    #[error("invalid hex color: {0:?}")]
    InvalidColorFormat(String),
    /// The catalog passed to the matcher contains no colors.
    #[error("catalog contains no colors")]
    EmptyCatalog,
    /// A sample list was empty; stabilization needs at least one sample.
    #[error("no skin samples supplied")]
    EmptySample,
}
