//! Property-based tests for change decomposition.
//!
//! - The breakdown sums back to its amount exactly
//! - Rendered entries stay in descending denomination order
//! - The calculation is deterministic
//! - Zero-count denominations never reach the output

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{ChangeBreakdown, compute_change};

/// Strategy for whole-pence amounts between 1p and £10,000.
fn pence_amount() -> impl Strategy<Value = Decimal> {
    (1i64..=1_000_000i64).prop_map(|pence| Decimal::new(pence, 2))
}

/// Strategy for a valid (tendered, item_value) pair with tendered >= item.
fn valid_request() -> impl Strategy<Value = (Decimal, Decimal)> {
    (1i64..=1_000_000i64, 1i64..=1_000_000i64).prop_map(|(a, b)| {
        (Decimal::new(a.max(b), 2), Decimal::new(a.min(b), 2))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The breakdown always sums back to the amount it was built for.
    #[test]
    fn prop_breakdown_sum_invariant(amount in pence_amount()) {
        let breakdown = ChangeBreakdown::for_amount(amount);
        prop_assert_eq!(breakdown.total(), amount);
    }

    /// Entries follow the denomination table in strictly descending order.
    #[test]
    fn prop_breakdown_strictly_descending(amount in pence_amount()) {
        let breakdown = ChangeBreakdown::for_amount(amount);
        for pair in breakdown.lines().windows(2) {
            prop_assert!(pair[0].denomination > pair[1].denomination);
        }
    }

    /// Identical inputs always yield identical output.
    #[test]
    fn prop_compute_change_deterministic((tendered, item_value) in valid_request()) {
        prop_assert_eq!(
            compute_change(tendered, item_value),
            compute_change(tendered, item_value)
        );
    }

    /// Every valid request succeeds, and every rendered count is positive.
    #[test]
    fn prop_rendered_counts_positive((tendered, item_value) in valid_request()) {
        let summary = compute_change(tendered, item_value).unwrap();
        if let Some(entries) = summary.strip_prefix("Your change is: ") {
            for entry in entries.split(", ") {
                let count: u64 = entry
                    .split(" x ")
                    .next()
                    .unwrap()
                    .parse()
                    .expect("entry should start with a count");
                prop_assert!(count > 0, "zero count rendered in {}", summary);
            }
        } else {
            prop_assert_eq!(summary.as_str(), "No change needed");
            prop_assert_eq!(tendered, item_value);
        }
    }
}
