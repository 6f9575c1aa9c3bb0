//! Minimum-denomination change calculation.

pub mod calculator;
pub mod denomination;
pub mod error;

#[cfg(test)]
mod props;

pub use calculator::{ChangeBreakdown, ChangeLine, compute_change};
pub use denomination::denominations;
pub use error::ChangeError;
