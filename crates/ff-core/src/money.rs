//! Fixed-point monetary magnitudes.
//!
//! Income-statement figures are entered in millions with one decimal, so a
//! `Money` is stored as an integer count of tenths of a million. Sums and
//! remainders of named constants stay exact.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Neg, Sub};

use crate::{FfError, FfResult};

/// A monetary amount in millions, one decimal of precision.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "f64", try_from = "f64")
)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Smallest representable step (0.1 million).
    pub const PRECISION: Money = Money(1);

    /// `Money::new(2225, 6)` is 2225.6 million. `tenth` must be below 10.
    pub const fn new(whole: i64, tenth: u8) -> Self {
        debug_assert!(tenth < 10, "tenth digit must be below 10");
        Self(whole * 10 + tenth as i64)
    }

    pub const fn from_tenths(tenths: i64) -> Self {
        Self(tenths)
    }

    pub const fn tenths(self) -> i64 {
        self.0
    }

    /// Const-context addition for derived constants.
    pub const fn plus(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }

    /// Const-context subtraction for derived constants.
    pub const fn minus(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub const fn abs_diff(self, other: Money) -> Money {
        Money(self.0.abs_diff(other.0) as i64)
    }

    /// Parse a float amount in millions. Rejects non-finite values and
    /// anything that does not sit on the 0.1 grid.
    pub fn from_millions(value: f64) -> FfResult<Self> {
        if !value.is_finite() {
            return Err(FfError::NonFinite {
                what: "money",
                value,
            });
        }
        let scaled = value * 10.0;
        let rounded = scaled.round();
        if (scaled - rounded).abs() > 1e-6 {
            return Err(FfError::InvalidArg {
                what: "money must have at most one decimal",
            });
        }
        if rounded.abs() > i64::MAX as f64 {
            return Err(FfError::InvalidArg {
                what: "money out of range",
            });
        }
        Ok(Self(rounded as i64))
    }

    /// Amount in millions as a float, for the renderer.
    pub fn to_millions(self) -> f64 {
        self.0 as f64 / 10.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        self.plus(rhs)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        self.minus(rhs)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl From<Money> for f64 {
    fn from(m: Money) -> f64 {
        m.to_millions()
    }
}

impl TryFrom<f64> for Money {
    type Error = FfError;

    fn try_from(value: f64) -> FfResult<Money> {
        Money::from_millions(value)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{}", sign, abs / 10, abs % 10)
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Money({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_display() {
        assert_eq!(Money::new(2225, 6).to_string(), "2225.6");
        assert_eq!(Money::new(7, 0).to_string(), "7.0");
        assert_eq!(Money::from_tenths(-3).to_string(), "-0.3");
        assert_eq!(Money::ZERO.to_string(), "0.0");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "tenth digit must be below 10")]
    fn new_rejects_two_digit_tenth() {
        let _ = Money::new(1, 15);
    }

    #[test]
    fn remainder_is_exact() {
        let net_revenue = Money::new(1996, 1);
        let opex = Money::new(701, 2) + Money::new(104, 5) + Money::new(309, 6);
        assert_eq!(net_revenue - opex, Money::new(880, 8));
    }

    #[test]
    fn const_arithmetic() {
        const A: Money = Money::new(148, 2).plus(Money::new(89, 7));
        assert_eq!(A, Money::new(237, 9));
        assert_eq!(A.minus(Money::new(89, 7)), Money::new(148, 2));
    }

    #[test]
    fn from_millions_accepts_one_decimal() {
        assert_eq!(Money::from_millions(925.2).unwrap(), Money::new(925, 2));
        assert_eq!(Money::from_millions(0.0).unwrap(), Money::ZERO);
    }

    #[test]
    fn from_millions_rejects_bad_input() {
        let err = Money::from_millions(f64::NAN).unwrap_err();
        assert!(format!("{err}").contains("Non-finite"));
        assert!(matches!(
            Money::from_millions(1.25),
            Err(FfError::InvalidArg { .. })
        ));
    }

    #[test]
    fn sum_and_abs_diff() {
        let parts = [Money::new(876, 9), Money::new(349, 8)];
        let total: Money = parts.iter().sum();
        assert_eq!(total, Money::new(1226, 7));
        assert_eq!(
            total.abs_diff(Money::new(1226, 8)),
            Money::PRECISION
        );
        assert!((-total).is_negative());
    }
}
