//! Late fee policy
//!
//! Domain primitive for pricing overdue loans. All arithmetic is done in
//! `Decimal`, so fees such as 0.75 or 1.8 come out exact.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{LibraryError, LibraryResult};

/// Message carried by the error for a negative day count.
pub const NEGATIVE_OVERDUE_DAYS: &str = "Overdue days cannot be negative.";

/// Pricing formula for overdue loans.
///
/// `fee = days * base_rate_per_day`, then multiplied by
/// `bestseller_multiplier` and/or `premium_multiplier` when those flags are set.
/// The multipliers are independent, so their order never matters.
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use library_circulation::domain::FeePolicy;
///
/// let fee = FeePolicy::default().calculate(3, true, true).unwrap();
/// assert_eq!(fee, Decimal::new(18, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeePolicy {
    pub base_rate_per_day: Decimal,
    pub bestseller_multiplier: Decimal,
    pub premium_multiplier: Decimal,
}

impl FeePolicy {
    /// Compute the late fee for a loan.
    ///
    /// # Errors
    /// - `LibraryError::InvalidArgument` if `overdue_days` is negative
    /// - `LibraryError::FeeOverflow` if the fee exceeds `Decimal::MAX`
    pub fn calculate(
        &self,
        overdue_days: i64,
        is_bestseller: bool,
        is_premium_member: bool,
    ) -> LibraryResult<Decimal> {
        if overdue_days < 0 {
            return Err(LibraryError::invalid_argument(NEGATIVE_OVERDUE_DAYS));
        }

        let mut fee = Decimal::from(overdue_days)
            .checked_mul(self.base_rate_per_day)
            .ok_or(LibraryError::FeeOverflow)?;

        if is_bestseller {
            fee = fee
                .checked_mul(self.bestseller_multiplier)
                .ok_or(LibraryError::FeeOverflow)?;
        }

        if is_premium_member {
            fee = fee
                .checked_mul(self.premium_multiplier)
                .ok_or(LibraryError::FeeOverflow)?;
        }

        Ok(fee)
    }
}

impl Default for FeePolicy {
    fn default() -> Self {
        Self {
            base_rate_per_day: Decimal::new(5, 1),
            bestseller_multiplier: Decimal::new(15, 1),
            premium_multiplier: Decimal::new(8, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fee_table() {
        let policy = FeePolicy::default();
        let cases = [
            (0, false, false, dec!(0.0)),
            (1, false, false, dec!(0.5)),
            (1, true, false, dec!(0.75)),
            (1, false, true, dec!(0.4)),
            (1, true, true, dec!(0.6)),
            (3, true, true, dec!(1.8)),
            (5, true, false, dec!(3.75)),
        ];

        for (days, bestseller, premium, expected) in cases {
            let fee = policy.calculate(days, bestseller, premium).unwrap();
            assert_eq!(fee, expected, "days={days} bestseller={bestseller} premium={premium}");
        }
    }

    #[test]
    fn test_zero_days_is_free_regardless_of_flags() {
        let policy = FeePolicy::default();
        for (bestseller, premium) in [(false, false), (true, false), (false, true), (true, true)] {
            assert_eq!(policy.calculate(0, bestseller, premium).unwrap(), Decimal::ZERO);
        }
    }

    #[test]
    fn test_negative_days_rejected() {
        let result = FeePolicy::default().calculate(-1, false, false);
        assert_eq!(
            result,
            Err(LibraryError::InvalidArgument(NEGATIVE_OVERDUE_DAYS.to_string()))
        );
    }

    #[test]
    fn test_overflow_is_an_error() {
        let policy = FeePolicy {
            base_rate_per_day: dec!(10000000000),
            ..FeePolicy::default()
        };

        assert_eq!(
            policy.calculate(i64::MAX, false, false),
            Err(LibraryError::FeeOverflow)
        );
    }

    #[test]
    fn test_overflow_from_multiplier() {
        let policy = FeePolicy {
            base_rate_per_day: dec!(1000000000),
            bestseller_multiplier: dec!(100),
            ..FeePolicy::default()
        };

        assert!(policy.calculate(i64::MAX, false, false).is_ok());
        assert_eq!(
            policy.calculate(i64::MAX, true, false),
            Err(LibraryError::FeeOverflow)
        );
    }

    #[test]
    fn test_custom_policy() {
        let policy = FeePolicy {
            base_rate_per_day: dec!(1.25),
            bestseller_multiplier: dec!(2),
            premium_multiplier: dec!(0.5),
        };

        assert_eq!(policy.calculate(4, false, false).unwrap(), dec!(5));
        assert_eq!(policy.calculate(4, true, true).unwrap(), dec!(5));
        assert_eq!(policy.calculate(4, true, false).unwrap(), dec!(10));
    }
}
