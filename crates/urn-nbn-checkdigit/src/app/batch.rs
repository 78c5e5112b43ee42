//! Batch check digit workflow
//!
//! This module applies the check digit functions to many identifiers at once.
//! Results are always returned in input order.

use crate::domain::check_digit::{append_check_digit, calc, verify};
use crate::domain::error::CheckDigitError;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Append check digits to every identifier
pub fn append_check_digits<S: AsRef<str>>(urns: &[S]) -> Vec<Result<String, CheckDigitError>> {
    urns.iter()
        .map(|urn| append_check_digit(urn.as_ref()))
        .collect()
}

/// Calculate the check digit of every identifier
pub fn calc_all<S: AsRef<str>>(urns: &[S]) -> Vec<Result<char, CheckDigitError>> {
    urns.iter().map(|urn| calc(urn.as_ref())).collect()
}

/// Verify every identifier
pub fn verify_all<S: AsRef<str>>(urns: &[S]) -> Vec<Result<bool, CheckDigitError>> {
    urns.iter().map(|urn| verify(urn.as_ref())).collect()
}

/// Append check digits to every identifier in parallel
///
/// Uses rayon across identifiers. Each identifier is still computed sequentially.
#[cfg(feature = "parallel")]
pub fn append_check_digits_parallel<S: AsRef<str> + Sync>(
    urns: &[S],
) -> Vec<Result<String, CheckDigitError>> {
    urns.par_iter()
        .map(|urn| append_check_digit(urn.as_ref()))
        .collect()
}

/// Calculate the check digit of every identifier in parallel
#[cfg(feature = "parallel")]
pub fn calc_all_parallel<S: AsRef<str> + Sync>(
    urns: &[S],
) -> Vec<Result<char, CheckDigitError>> {
    urns.par_iter().map(|urn| calc(urn.as_ref())).collect()
}

/// Verify every identifier in parallel
#[cfg(feature = "parallel")]
pub fn verify_all_parallel<S: AsRef<str> + Sync>(
    urns: &[S],
) -> Vec<Result<bool, CheckDigitError>> {
    urns.par_iter().map(|urn| verify(urn.as_ref())).collect()
}

/// Outcome counts of a batch run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Number of identifiers processed
    pub total: usize,
    /// Number of identifiers that succeeded
    pub succeeded: usize,
    /// Number of identifiers that returned an error
    pub failed: usize,
}

impl BatchSummary {
    /// Count successes and failures of batch results
    pub fn from_results<T>(results: &[Result<T, CheckDigitError>]) -> Self {
        let failed = results.iter().filter(|r| r.is_err()).count();
        Self {
            total: results.len(),
            succeeded: results.len() - failed,
            failed,
        }
    }

    /// Check if every identifier succeeded
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}
