//! Invoice layout and money-formatting tests
//!
//! The invoice is a fixed-layout projection: title at (100, 800), one line
//! per entry from y=750 stepping down 20, and the total one extra step below
//! the last line. Money renders via Decimal's natural string form.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Mirror of the layout rule: y coordinate of the nth entry line (0-based).
fn line_y(index: usize) -> i64 {
    750 - 20 * index as i64
}

/// Mirror of the layout rule: y coordinate of the total line.
fn total_y(line_count: usize) -> i64 {
    line_y(line_count) - 20
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_line_text_format() {
        let text = format!("{} x {} @ {}", "Item 1", 2, dec("10.0"));
        assert_eq!(text, "Item 1 x 2 @ 10.0");
    }

    #[test]
    fn test_total_preserves_decimal_scale() {
        let total = dec("10.0") * Decimal::from(2) + dec("20.0") * Decimal::from(3);
        assert_eq!(format!("Total: {}", total), "Total: 80.0");
    }

    #[test]
    fn test_two_decimal_prices_render_two_places() {
        let total = dec("10.99") * Decimal::from(1);
        assert_eq!(total.to_string(), "10.99");
    }

    #[test]
    fn test_line_positions_step_down_by_twenty() {
        assert_eq!(line_y(0), 750);
        assert_eq!(line_y(1), 730);
        assert_eq!(line_y(2), 710);
    }

    #[test]
    fn test_total_sits_one_extra_step_below_last_line() {
        // Two entry lines: last at 730, total at 690.
        assert_eq!(total_y(2), 690);
        // No entries: total at 730.
        assert_eq!(total_y(0), 730);
    }

    #[test]
    fn test_decimal_string_is_not_binary_float() {
        // 0.1 + 0.2 is exactly 0.3 in decimal arithmetic.
        let sum = dec("0.1") + dec("0.2");
        assert_eq!(sum.to_string(), "0.3");
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;

    fn price_strategy() -> impl Strategy<Value = Decimal> {
        (1i64..=100000i64).prop_map(|n| Decimal::new(n, 2)) // 0.01 to 1000.00
    }

    fn quantity_strategy() -> impl Strategy<Value = i32> {
        1i32..=100
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Total equals the sum of price * quantity over all entries.
        #[test]
        fn prop_total_is_sum_of_line_amounts(
            entries in prop::collection::vec((price_strategy(), quantity_strategy()), 1..10)
        ) {
            let total: Decimal = entries
                .iter()
                .map(|(p, q)| p * Decimal::from(*q))
                .sum();

            let mut expected = Decimal::ZERO;
            for (p, q) in &entries {
                expected += p * Decimal::from(*q);
            }

            prop_assert_eq!(total, expected);
            prop_assert!(total > Decimal::ZERO);
        }

        /// Line y positions are strictly decreasing and evenly stepped.
        #[test]
        fn prop_line_positions_monotonic(count in 1usize..50) {
            for i in 1..count {
                prop_assert_eq!(line_y(i - 1) - line_y(i), 20);
            }
            prop_assert_eq!(total_y(count), line_y(count - 1) - 40);
        }

        /// Decimal round-trips through its string form without loss.
        #[test]
        fn prop_decimal_string_round_trip(price in price_strategy()) {
            let parsed = Decimal::from_str(&price.to_string()).unwrap();
            prop_assert_eq!(parsed, price);
        }
    }
}
