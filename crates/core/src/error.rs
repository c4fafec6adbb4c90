//! Domain error model.

use thiserror::Error;

/// An identifier could not be parsed from text.
///
/// Produced by the `FromStr` impls of the typed ids; callers decide whether
/// an unparsable id means "bad request" or "no such entity".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid identifier: {0}")]
pub struct ParseIdError(String);

impl ParseIdError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}
