use thiserror::Error;

/// Failure cases of decimal parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBigUintError {
    /// The input held no digits: empty, whitespace-only, or a bare sign.
    #[error("no digits found in input")]
    Empty,
    /// A character that is neither a decimal digit, a single leading `+`,
    /// nor terminating whitespace.
    #[error("invalid character {0:?} in decimal input")]
    InvalidDigit(char),
}
