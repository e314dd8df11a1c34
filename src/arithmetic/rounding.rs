//! The single rounding rule used wherever fractional math meets minor units.
//!
//! Ties go to the even neighbour (banker's rounding).

use crate::core::error::MoneyError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounding strategy applied to decimal intermediates.
pub const STRATEGY: RoundingStrategy = RoundingStrategy::MidpointNearestEven;

/// `numerator / denominator` rounded half-to-even.
///
/// Returns `None` when `denominator` is zero.
pub fn div_round_half_even(numerator: i128, denominator: i128) -> Option<i128> {
    if denominator == 0 {
        return None;
    }
    let (mut n, mut d) = (numerator, denominator);
    if d < 0 {
        n = -n;
        d = -d;
    }
    let q = n.div_euclid(d);
    let r = n.rem_euclid(d);
    // q is the floor; compare the remainder against half the divisor.
    let twice = r * 2;
    let rounded = match twice.cmp(&d) {
        std::cmp::Ordering::Less => q,
        std::cmp::Ordering::Greater => q + 1,
        std::cmp::Ordering::Equal => {
            if q % 2 == 0 {
                q
            } else {
                q + 1
            }
        }
    };
    Some(rounded)
}

/// Round a decimal to a whole number of minor units.
pub fn round_decimal(value: Decimal) -> Result<i64, MoneyError> {
    let rounded = value.round_dp_with_strategy(0, STRATEGY);
    rounded
        .to_i64()
        .ok_or_else(|| MoneyError::overflow("round_decimal"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ties_go_to_even() {
        assert_eq!(div_round_half_even(5, 2), Some(2));
        assert_eq!(div_round_half_even(7, 2), Some(4));
        assert_eq!(div_round_half_even(-5, 2), Some(-2));
        assert_eq!(div_round_half_even(-7, 2), Some(-4));
        assert_eq!(div_round_half_even(5, -2), Some(-2));
    }

    #[test]
    fn test_non_ties_round_to_nearest() {
        assert_eq!(div_round_half_even(10, 3), Some(3));
        assert_eq!(div_round_half_even(20, 3), Some(7));
        assert_eq!(div_round_half_even(-10, 3), Some(-3));
        assert_eq!(div_round_half_even(-20, 3), Some(-7));
        assert_eq!(div_round_half_even(9, 3), Some(3));
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(div_round_half_even(1, 0), None);
    }

    #[test]
    fn test_round_decimal() {
        assert_eq!(round_decimal(dec!(2.5)).unwrap(), 2);
        assert_eq!(round_decimal(dec!(3.5)).unwrap(), 4);
        assert_eq!(round_decimal(dec!(-2.5)).unwrap(), -2);
        assert_eq!(round_decimal(dec!(2.51)).unwrap(), 3);
        assert_eq!(round_decimal(dec!(1234)).unwrap(), 1234);
    }

    #[test]
    fn test_round_decimal_overflow() {
        let huge = Decimal::from(i64::MAX) * dec!(10);
        assert!(matches!(
            round_decimal(huge),
            Err(MoneyError::Overflow { .. })
        ));
    }
}
