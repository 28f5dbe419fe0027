//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so that allocation, share and
//! settlement arithmetic is exact. Rounding to currency precision happens
//! only through the explicit helpers on this type.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Basis points in a whole (100%)
pub const BASIS_POINTS: i64 = 10_000;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
///
/// Serialized as a decimal string with two places (`"125.00"`) and
/// deserialized from either a string or a plain JSON/YAML number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use tripsplit::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Divide and round to the nearest cent, halves away from zero
    ///
    /// A divisor below one is treated as one.
    ///
    /// # Examples
    /// ```
    /// use tripsplit::models::Money;
    /// assert_eq!(Money::from_units(100).div_round(3), Money::from_cents(3333));
    /// assert_eq!(Money::from_cents(5).div_round(2), Money::from_cents(3));
    /// ```
    pub fn div_round(&self, divisor: i64) -> Self {
        Self(round_div(self.0 as i128, divisor.max(1) as i128) as i64)
    }

    /// Apply a weight expressed in basis points and round to whole units
    ///
    /// `Money::from_units(200).weighted_whole_units(4500)` is `90.00`.
    pub fn weighted_whole_units(&self, basis_points: i64) -> Self {
        let scaled = self.0 as i128 * basis_points as i128;
        let units = round_div(scaled, BASIS_POINTS as i128 * 100);
        Self((units * 100) as i64)
    }

    /// Whole-percent share of `total` this amount represents (0 for a zero total)
    pub fn percent_of(&self, total: Money) -> i64 {
        if total.is_zero() {
            return 0;
        }
        round_div(self.0 as i128 * 100, total.0 as i128) as i64
    }

    /// Add two amounts, `None` on overflow
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtract two amounts, `None` on overflow
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Sum amounts, `None` if any partial sum overflows
    pub fn checked_sum<I: IntoIterator<Item = Money>>(amounts: I) -> Option<Money> {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |acc, m| acc.checked_add(m))
    }

    /// Convert a floating point amount, rounding to the nearest cent
    pub fn from_f64(value: f64) -> Result<Self, MoneyParseError> {
        if !value.is_finite() {
            return Err(MoneyParseError::InvalidFormat(value.to_string()));
        }
        let cents = (value * 100.0).round();
        if cents >= i64::MAX as f64 || cents <= i64::MIN as f64 {
            return Err(MoneyParseError::OutOfRange(value.to_string()));
        }
        Ok(Self(cents as i64))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "-$10.50", "$-10.50",
    /// "10", "10.5". A third fractional digit rounds the cents half-up.
    ///
    /// # Examples
    /// ```
    /// use tripsplit::models::Money;
    /// assert_eq!(Money::parse("$-5.50").unwrap().cents(), -550);
    /// assert!(Money::parse("--5").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());
        let out_of_range = || MoneyParseError::OutOfRange(s.to_string());

        // At most one minus sign, on either side of the currency symbol
        let trimmed = s.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest.strip_prefix('$').unwrap_or(rest)),
            None => {
                let rest = trimmed.strip_prefix('$').unwrap_or(trimmed);
                match rest.strip_prefix('-') {
                    Some(rest) => (true, rest),
                    None => (false, rest),
                }
            }
        };

        let (whole, fraction) = rest.split_once('.').unwrap_or((rest, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        // Only digits are left, so a failed parse means the value is too large
        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };

        let digits: Vec<i64> = fraction.bytes().map(|b| i64::from(b - b'0')).collect();
        let mut cents = digits.first().copied().unwrap_or(0) * 10
            + digits.get(1).copied().unwrap_or(0);
        if digits.get(2).copied().unwrap_or(0) >= 5 {
            cents += 1;
        }

        let cents = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(out_of_range)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency code or symbol in front, e.g. `EUR 12.50`
    pub fn format_with_currency(&self, currency: &str) -> String {
        if currency.is_empty() {
            self.to_string()
        } else {
            format!("{} {}", currency, self)
        }
    }
}

/// Integer division rounding halves away from zero (divisor must be positive)
fn round_div(numerator: i128, divisor: i128) -> i128 {
    let quotient = numerator / divisor;
    let remainder = numerator % divisor;
    if remainder.abs() * 2 >= divisor {
        quotient + numerator.signum()
    } else {
        quotient
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal amount as a number or string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        v.checked_mul(100)
            .map(Money::from_cents)
            .ok_or_else(|| E::custom(format!("amount out of range: {}", v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        i64::try_from(v)
            .ok()
            .and_then(|v| v.checked_mul(100))
            .map(Money::from_cents)
            .ok_or_else(|| E::custom(format!("amount out of range: {}", v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Money::from_f64(v).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        if v.trim().is_empty() {
            return Ok(Money::zero());
        }
        Money::parse(v).map_err(E::custom)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Money amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(Money::from_units(125).format_with_currency("EUR"), "EUR 125.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_div_round_halves_away_from_zero() {
        assert_eq!(Money::from_units(500).div_round(4), Money::from_units(125));
        assert_eq!(Money::from_units(100).div_round(3).cents(), 3333);
        assert_eq!(Money::from_units(200).div_round(3).cents(), 6667);
        assert_eq!(Money::from_cents(1).div_round(2).cents(), 1);
        assert_eq!(Money::from_cents(-1).div_round(2).cents(), -1);
        assert_eq!(Money::from_units(10).div_round(0), Money::from_units(10));
    }

    #[test]
    fn test_weighted_whole_units() {
        assert_eq!(
            Money::from_units(1000).weighted_whole_units(4500),
            Money::from_units(450)
        );
        assert_eq!(
            Money::from_units(200).weighted_whole_units(2500),
            Money::from_units(50)
        );
        // 333 * 0.15 = 49.95 -> 50
        assert_eq!(
            Money::from_units(333).weighted_whole_units(1500),
            Money::from_units(50)
        );
        // 10.10 * 0.45 = 4.545 -> 5
        assert_eq!(
            Money::from_cents(1010).weighted_whole_units(4500),
            Money::from_units(5)
        );
    }

    #[test]
    fn test_percent_of() {
        let total = Money::from_units(1000);
        assert_eq!(Money::from_units(450).percent_of(total), 45);
        assert_eq!(Money::from_units(1).percent_of(Money::from_units(3)), 33);
        assert_eq!(Money::from_units(5).percent_of(Money::zero()), 0);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("1.005").unwrap().cents(), 101);
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("").is_err());
        assert!(Money::parse("-").is_err());
    }

    #[test]
    fn test_parse_sign_around_symbol() {
        assert_eq!(Money::parse("-$5.50").unwrap().cents(), -550);
        assert_eq!(Money::parse("$-5.50").unwrap().cents(), -550);
        assert_eq!(Money::parse(" $-0.05 ").unwrap().cents(), -5);

        assert!(Money::parse("--5").is_err());
        assert!(Money::parse("--5.5").is_err());
        assert!(Money::parse("-$-5").is_err());
        assert!(Money::parse("$+5").is_err());
        assert!(Money::parse("5.-5").is_err());
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(
            Money::parse("100000000000000000"),
            Err(MoneyParseError::OutOfRange("100000000000000000".into()))
        );
        assert!(matches!(
            Money::parse("99999999999999999999.99"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert_eq!(
            Money::parse("92233720368547758.07").unwrap().cents(),
            i64::MAX
        );
        assert!(matches!(
            Money::from_f64(1e30),
            Err(MoneyParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_checked_arithmetic() {
        let big = Money::from_cents(i64::MAX - 1);
        assert_eq!(big.checked_add(Money::from_cents(1)), Some(Money::from_cents(i64::MAX)));
        assert_eq!(big.checked_add(Money::from_cents(2)), None);
        assert_eq!(Money::from_cents(i64::MIN).checked_sub(Money::from_cents(1)), None);

        assert_eq!(
            Money::checked_sum([Money::from_units(1), Money::from_units(2)]),
            Some(Money::from_units(3))
        );
        assert_eq!(Money::checked_sum([big, big]), None);
    }

    #[test]
    fn test_comparison() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert!(a > b);
        assert_eq!(a.min(b), b);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let borrowed: Money = amounts.iter().sum();
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
        assert_eq!(borrowed, total);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"10.50\"");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }

    #[test]
    fn test_deserialize_numbers() {
        let whole: Money = serde_json::from_str("300").unwrap();
        assert_eq!(whole, Money::from_units(300));

        let fractional: Money = serde_json::from_str("12.34").unwrap();
        assert_eq!(fractional.cents(), 1234);

        let blank: Money = serde_json::from_str("\"\"").unwrap();
        assert!(blank.is_zero());

        assert!(serde_json::from_str::<Money>("\"lots\"").is_err());
    }
}
