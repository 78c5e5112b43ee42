//! Check digit calculation errors

use thiserror::Error;

/// Errors returned by the check digit functions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckDigitError {
    /// Input character is not part of the substitution table
    #[error("unmapped character '{character}' at position {position}")]
    UnmappedCharacter { character: char, position: usize },
    /// Identifier or number string is empty
    #[error("empty input")]
    EmptyInput,
    /// Number string contains something other than a decimal digit
    #[error("non-digit character '{character}' at position {position} in number string")]
    NonDigit { character: char, position: usize },
    /// Last digit of the number string is zero
    #[error("division by zero: last digit of the number string is 0")]
    DivisionByZero,
    /// Identifier does not end with a decimal check digit
    #[error("identifier does not end with a check digit")]
    MissingCheckDigit,
}
