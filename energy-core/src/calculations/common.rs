//! Common utility functions for consumption calculations.
//!
//! This module provides shared rounding helpers used across the worksheet
//! and projection calculations.

use rust_decimal::Decimal;

/// Rounds a kilowatt value to one decimal place, away from zero at the
/// midpoint.
///
/// Load figures are reported at one decimal place everywhere they surface.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use energy_core::calculations::common::round_to_tenth;
///
/// assert_eq!(round_to_tenth(dec!(6.64)), dec!(6.6));
/// assert_eq!(round_to_tenth(dec!(6.65)), dec!(6.7));
/// assert_eq!(round_to_tenth(dec!(6.6)), dec!(6.6));
/// ```
pub fn round_to_tenth(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a currency value to exactly two decimal places using half-up
/// rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use energy_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(123.456)), dec!(123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_to_tenth tests
    // =========================================================================

    #[test]
    fn round_to_tenth_rounds_down_below_midpoint() {
        let result = round_to_tenth(dec!(2.44));

        assert_eq!(result, dec!(2.4));
    }

    #[test]
    fn round_to_tenth_rounds_up_at_midpoint() {
        let result = round_to_tenth(dec!(2.45));

        assert_eq!(result, dec!(2.5));
    }

    #[test]
    fn round_to_tenth_preserves_already_rounded_values() {
        let result = round_to_tenth(dec!(3.6));

        assert_eq!(result, dec!(3.6));
    }

    #[test]
    fn round_to_tenth_handles_whole_numbers() {
        let result = round_to_tenth(dec!(13));

        assert_eq!(result, dec!(13));
    }

    #[test]
    fn round_to_tenth_handles_zero() {
        let result = round_to_tenth(dec!(0.0));

        assert_eq!(result, dec!(0.0));
    }

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(33.004));

        assert_eq!(result, dec!(33.00));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(33.005));

        assert_eq!(result, dec!(33.01));
    }

    #[test]
    fn round_half_up_rounds_up_above_midpoint() {
        let result = round_half_up(dec!(33.006));

        assert_eq!(result, dec!(33.01));
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        let result = round_half_up(dec!(1500.00));

        assert_eq!(result, dec!(1500.00));
    }

    #[test]
    fn round_half_up_handles_zero() {
        let result = round_half_up(dec!(0.00));

        assert_eq!(result, dec!(0.00));
    }
}
