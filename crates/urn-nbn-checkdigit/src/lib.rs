//! urn-nbn-checkdigit - Check digit calculation for URN:NBN:DE identifiers
//!
//! This crate provides functionality to:
//! - Convert an identifier into its number string via the fixed character table
//! - Calculate the check digit (weighted positional sum, divided by the last digit)
//! - Append or verify the check digit of `urn:nbn:de:...` identifiers
//! - Process many identifiers at once (optionally in parallel)

pub mod app;
pub mod constants;
pub mod domain;

// Re-export commonly used types
pub use constants::*;
pub use domain::check_digit::{append_check_digit, calc, split_check_digit, verify};
pub use domain::error::CheckDigitError;
pub use domain::mapping::char_value;
