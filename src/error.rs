//! Errors raised while converting between MMML text and events

use std::fmt;

/// Everything that can go wrong while decoding or encoding MMML. There is
/// no partial-result mode; a conversion either fully succeeds or returns
/// one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MmmlError {
    /// Empty input, missing header, bad indentation, a body line before
    /// any header, or more than one root expression.
    MalformedExpression(String),
    /// The header identifier has no registered decoder.
    UnknownIdentifier(String),
    /// The event variant has no registered encoder.
    UnknownEncoder(&'static str),
    InvalidDuration(String),
    InvalidPitch(String),
    InvalidVolume(String),
    InvalidTemplate(String),
}

impl MmmlError {
    pub fn message(&self) -> String {
        match self {
            MmmlError::MalformedExpression(detail) => {
                format!("malformed MMML expression: {}", detail)
            }
            MmmlError::UnknownIdentifier(name) => {
                format!("no decoder has been registered for expression '{}'", name)
            }
            MmmlError::UnknownEncoder(kind) => {
                format!("no encoder has been registered for '{}' events", kind)
            }
            MmmlError::InvalidDuration(token) => format!("invalid duration '{}'", token),
            MmmlError::InvalidPitch(token) => format!("invalid pitch '{}'", token),
            MmmlError::InvalidVolume(token) => format!("invalid volume '{}'", token),
            MmmlError::InvalidTemplate(detail) => format!("invalid template: {}", detail),
        }
    }
}

impl fmt::Display for MmmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MmmlError {}
