//! Sterling denomination table.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All values are exact `rust_decimal::Decimal` amounts.

use rust_decimal::Decimal;

/// Legal sterling denominations in pence, strictly descending.
///
/// The order is load-bearing: the greedy decomposition walks this table
/// top-down, and rendered output must follow it. The table ends at the
/// minor unit (1p) so every whole-pence amount decomposes exactly.
const DENOMINATIONS_PENCE: [i64; 12] = [5000, 2000, 1000, 500, 200, 100, 50, 20, 10, 5, 2, 1];

/// Returns the sterling denominations as exact pound values, strictly
/// descending (£50 down to 1p).
pub fn denominations() -> impl Iterator<Item = Decimal> {
    DENOMINATIONS_PENCE
        .into_iter()
        .map(|pence| Decimal::new(pence, 2))
}

/// Renders a single breakdown entry.
///
/// Pound denominations print as `1 x £10` (no trailing zeros),
/// sub-pound denominations as integer pence, `1 x 50p`.
pub(crate) fn format_entry(denomination: Decimal, count: u64) -> String {
    if denomination >= Decimal::ONE {
        format!("{count} x £{}", denomination.normalize())
    } else {
        format!(
            "{count} x {}p",
            (denomination * Decimal::ONE_HUNDRED).normalize()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_table_is_strictly_descending() {
        let values: Vec<Decimal> = denominations().collect();
        for pair in values.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn test_table_ends_at_minor_unit() {
        assert_eq!(denominations().last(), Some(dec!(0.01)));
    }

    #[test]
    fn test_pound_entries_drop_trailing_zeros() {
        assert_eq!(format_entry(dec!(10.00), 1), "1 x £10");
        assert_eq!(format_entry(dec!(2.00), 2), "2 x £2");
    }

    #[test]
    fn test_sub_pound_entries_render_as_pence() {
        assert_eq!(format_entry(dec!(0.50), 1), "1 x 50p");
        assert_eq!(format_entry(dec!(0.02), 2), "2 x 2p");
        assert_eq!(format_entry(dec!(0.01), 1), "1 x 1p");
    }
}
