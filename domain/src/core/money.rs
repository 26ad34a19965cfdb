//! Money value object stored as integer cents

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing a decimal money amount
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    #[error("Invalid amount format: {0}")]
    InvalidFormat(String),

    #[error("Amount has more than two decimal places: {0}")]
    TooPrecise(String),

    #[error("Amount is out of range: {0}")]
    OutOfRange(String),
}

/// An amount of money in cents (Value Object)
///
/// Parsing accepts an optional sign, whole units, and up to two fractional
/// digits (`"100"`, `"100.5"`, `"-0.25"`). Floating point never enters the
/// arithmetic. Serializes as the decimal string (`"100.50"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub const ZERO: Money = Money { cents: 0 };

    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Whole units, e.g. `Money::from_units(100)` is 100.00
    pub const fn from_units(units: i64) -> Self {
        Self { cents: units * 100 }
    }

    pub const fn cents(self) -> i64 {
        self.cents
    }

    pub const fn is_positive(self) -> bool {
        self.cents > 0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.cents.checked_add(other.cents).map(Money::from_cents)
    }

    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.cents.checked_sub(other.cents).map(Money::from_cents)
    }

    pub fn negate(self) -> Money {
        Money::from_cents(-self.cents)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        let rendered = format!("{}{}.{:02}", sign, abs / 100, abs % 100);
        // Route through `pad` so width/alignment flags apply
        f.pad(&rendered)
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let (negative, digits) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw.strip_prefix('+').unwrap_or(raw)),
        };

        let (whole, fraction) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }
        if digits.ends_with('.') {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }
        if fraction.len() > 2 {
            return Err(MoneyParseError::TooPrecise(s.to_string()));
        }

        let out_of_range = || MoneyParseError::OutOfRange(s.to_string());
        let units: i64 = whole.parse().map_err(|_| out_of_range())?;
        let fraction_cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| out_of_range())? * 10,
            _ => fraction.parse().map_err(|_| out_of_range())?,
        };

        let cents = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction_cents))
            .ok_or_else(out_of_range)?;

        Ok(Money::from_cents(if negative { -cents } else { cents }))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MoneyVisitor;

        impl Visitor<'_> for MoneyVisitor {
            type Value = Money;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal amount such as \"100.50\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(MoneyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_and_fractional() {
        assert_eq!("100".parse::<Money>().unwrap(), Money::from_cents(10_000));
        assert_eq!("100.5".parse::<Money>().unwrap(), Money::from_cents(10_050));
        assert_eq!("100.50".parse::<Money>().unwrap(), Money::from_cents(10_050));
        assert_eq!("-0.25".parse::<Money>().unwrap(), Money::from_cents(-25));
        assert_eq!(" 7.05 ".parse::<Money>().unwrap(), Money::from_cents(705));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "lots of money".parse::<Money>(),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(matches!("".parse::<Money>(), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!(".5".parse::<Money>(), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!("5.".parse::<Money>(), Err(MoneyParseError::InvalidFormat(_))));
        assert!(matches!("1.234".parse::<Money>(), Err(MoneyParseError::TooPrecise(_))));
        assert!(matches!(
            "99999999999999999999".parse::<Money>(),
            Err(MoneyParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Money::from_cents(10_050).to_string(), "100.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(Money::ZERO.to_string(), "0.00");
        assert_eq!(format!("{:>8}", Money::from_units(3)), "    3.00");
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_units(10);
        let b = Money::from_cents(250);
        assert_eq!(a.checked_sub(b), Some(Money::from_cents(750)));
        assert_eq!(a.checked_add(b), Some(Money::from_cents(1250)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(b), None);
        assert_eq!(b.negate(), Money::from_cents(-250));
    }

    #[test]
    fn test_serde_uses_decimal_string() {
        let json = serde_json::to_string(&Money::from_cents(10_050)).unwrap();
        assert_eq!(json, "\"100.50\"");
        assert_eq!(serde_json::from_str::<Money>(&json).unwrap(), Money::from_cents(10_050));
        assert!(serde_json::from_str::<Money>("\"1.005\"").is_err());
    }
}
