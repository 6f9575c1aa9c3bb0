//! Greedy change decomposition over the sterling denomination table.
//!
//! The calculation is a pure function: no state, no I/O, safe to call
//! concurrently from any number of request handlers.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::denomination::{denominations, format_entry};
use super::error::ChangeError;

/// Response when tendered exactly equals the item value.
const NO_CHANGE_NEEDED: &str = "No change needed";

/// Prefix for a rendered change summary.
const RESPONSE_PREFIX: &str = "Your change is: ";

/// One entry of a change breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeLine {
    /// Denomination value in pounds.
    pub denomination: Decimal,
    /// How many units of this denomination to hand back.
    pub count: u64,
}

/// Per-denomination counts composing a change amount.
///
/// Entries mirror the denomination table: one entry per denomination,
/// strictly descending, zero counts included. [`total`](Self::total)
/// always equals the amount the breakdown was built for, exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeBreakdown {
    lines: Vec<ChangeLine>,
}

impl ChangeBreakdown {
    /// Decomposes a non-negative amount into denomination counts.
    ///
    /// # Panics
    ///
    /// Panics if the amount cannot be decomposed exactly, meaning it is
    /// not representable in whole pence. The denomination table ends at
    /// 1p, so this is unreachable for any whole-pence amount.
    #[must_use]
    pub fn for_amount(amount: Decimal) -> Self {
        let mut remaining = amount;
        let mut lines = Vec::new();

        for denomination in denominations() {
            let count = (remaining / denomination).floor();
            // Counts above u64::MAX are unrepresentable; the truncation
            // leaves a nonzero remainder and trips the check below.
            let count = count.to_u64().unwrap_or(0);
            remaining -= Decimal::from(count) * denomination;
            lines.push(ChangeLine {
                denomination,
                count,
            });
        }

        assert!(
            remaining.is_zero(),
            "amount {amount} not fully decomposed, remainder {remaining}"
        );

        Self { lines }
    }

    /// All entries, descending, including zero counts.
    #[must_use]
    pub fn lines(&self) -> &[ChangeLine] {
        &self.lines
    }

    /// Exact sum of `denomination * count` over all entries.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .map(|line| line.denomination * Decimal::from(line.count))
            .sum()
    }

    /// Renders the non-zero entries as a change summary.
    fn render(&self) -> String {
        let entries: Vec<String> = self
            .lines
            .iter()
            .filter(|line| line.count > 0)
            .map(|line| format_entry(line.denomination, line.count))
            .collect();

        format!("{RESPONSE_PREFIX}{}", entries.join(", "))
    }
}

/// Computes the change summary for a tendered amount against an item value.
///
/// Validation runs in a fixed order: tendered, then item value, then the
/// relational check. An invalid item value therefore masks a relational
/// violation; callers depend on which message they get back, so the
/// order must not change.
///
/// Amounts must be whole-pence values within the supported range; a
/// sub-penny or out-of-range amount fails the same rule as a
/// non-positive one. This keeps the decomposition precondition
/// unreachable for validated input.
///
/// # Errors
///
/// Returns a [`ChangeError`] naming the first validation rule violated.
pub fn compute_change(tendered: Decimal, item_value: Decimal) -> Result<String, ChangeError> {
    validate(tendered, item_value)?;

    if tendered == item_value {
        return Ok(NO_CHANGE_NEEDED.to_string());
    }

    Ok(ChangeBreakdown::for_amount(tendered - item_value).render())
}

/// Largest amount the till will reason about: £1,000,000,000.
fn max_amount() -> Decimal {
    Decimal::new(100_000_000_000, 2)
}

/// An acceptable amount is positive, within range, and representable in
/// whole pence (trailing zeros beyond two decimals are fine).
fn is_acceptable_amount(value: Decimal) -> bool {
    value > Decimal::ZERO && value <= max_amount() && value.normalize().scale() <= 2
}

fn validate(tendered: Decimal, item_value: Decimal) -> Result<(), ChangeError> {
    if !is_acceptable_amount(tendered) {
        return Err(ChangeError::InvalidTendered);
    }
    if !is_acceptable_amount(item_value) {
        return Err(ChangeError::InvalidItemValue);
    }
    if tendered < item_value {
        return Err(ChangeError::TenderedBelowItemValue);
    }
    Ok(())
}
