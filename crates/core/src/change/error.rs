//! Validation errors for change calculation.

use thiserror::Error;

/// Validation errors for a change request.
///
/// All variants are caller errors (bad input); none are retryable and
/// none are fatal to the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChangeError {
    /// Tendered amount is not a positive, in-range, whole-pence amount.
    #[error("tendered value is invalid")]
    InvalidTendered,

    /// Item value is not a positive, in-range, whole-pence amount.
    #[error("item value is invalid")]
    InvalidItemValue,

    /// Tendered amount does not cover the item value.
    #[error("tendered value is less than item value")]
    TenderedBelowItemValue,
}
