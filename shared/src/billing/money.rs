//! Money helpers
//!
//! Everything inside the billing core is kept at full `Decimal` precision.
//! Rounding to two places happens when GST is derived from a percentage and
//! when a record is composed for the API.

use rust_decimal::prelude::*;

/// Decimal places of every monetary amount sent to the API
pub const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Round to two places, half away from zero.
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// `rate` percent of `base`, unrounded.
#[inline]
pub fn percent_of(base: Decimal, rate: Decimal) -> Decimal {
    base * rate / Decimal::ONE_HUNDRED
}

/// Compare two amounts within [`MONEY_TOLERANCE`].
#[inline]
pub fn money_eq(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() < MONEY_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_money(dec!(11.505)), dec!(11.51));
        assert_eq!(round_money(dec!(11.504)), dec!(11.50));
        assert_eq!(round_money(dec!(-36.505)), dec!(-36.51));
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(dec!(230), dec!(5)), dec!(11.5));
        assert_eq!(percent_of(dec!(240), dec!(10)), dec!(24));
        assert_eq!(percent_of(dec!(999), dec!(0)), dec!(0));
    }

    #[test]
    fn test_money_eq() {
        assert!(money_eq(dec!(0.1) + dec!(0.2), dec!(0.3)));
        assert!(money_eq(dec!(10.004), dec!(10.00)));
        assert!(!money_eq(dec!(10.01), dec!(10.00)));
    }
}
