//! Common utility functions for tax calculations.
//!
//! Shared rounding and comparison helpers used by the engine and the
//! regime comparison.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to the nearest whole rupee, halves away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use itr_core::calculations::common::round_to_rupee;
///
/// assert_eq!(round_to_rupee(dec!(299.4)), dec!(299));
/// assert_eq!(round_to_rupee(dec!(299.5)), dec!(300));
/// assert_eq!(round_to_rupee(dec!(1950)), dec!(1950));
/// ```
pub fn round_to_rupee(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use itr_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(0)), dec!(0));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_to_rupee tests
    // =========================================================================

    #[test]
    fn round_to_rupee_rounds_down_below_midpoint() {
        let result = round_to_rupee(dec!(1949.49));

        assert_eq!(result, dec!(1949));
    }

    #[test]
    fn round_to_rupee_rounds_up_at_midpoint() {
        let result = round_to_rupee(dec!(1949.5));

        assert_eq!(result, dec!(1950));
    }

    #[test]
    fn round_to_rupee_preserves_whole_values() {
        let result = round_to_rupee(dec!(5400.00));

        assert_eq!(result, dec!(5400));
    }

    #[test]
    fn round_to_rupee_handles_zero() {
        let result = round_to_rupee(Decimal::ZERO);

        assert_eq!(result, Decimal::ZERO);
    }

    // =========================================================================
    // max tests
    // =========================================================================

    #[test]
    fn max_returns_larger_value() {
        let result = max(dec!(100.00), dec!(200.00));

        assert_eq!(result, dec!(200.00));
    }

    #[test]
    fn max_clamps_negative_to_zero() {
        let result = max(dec!(-25000), Decimal::ZERO);

        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn max_handles_equal_values() {
        let result = max(dec!(150.00), dec!(150.00));

        assert_eq!(result, dec!(150.00));
    }
}
