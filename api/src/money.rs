//! A canonical price type and its display-currency formatting.

use std::fmt;
use std::str::FromStr;

use serde::de;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use thiserror::Error;

use crate::currency::Currency;

/// An error that can occur when parsing a string into a `Price`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParsePriceError {
    /// The string is not a plain integer amount (e.g., "abc", "1.2.3").
    #[error("invalid price format")]
    InvalidFormat,
    /// The amount is negative, which the catalog never produces.
    #[error("price cannot be negative")]
    Negative,
}

/// A price in the base currency.
///
/// The backend stores every amount as a whole number of base-currency units
/// and emits it as either a JSON number or a numeric string depending on the
/// endpoint. Both shapes deserialize into this one type so nothing past the
/// fetch boundary has to care. The value itself is never mutated; display in
/// another currency is a pure transform via [`Price::format_in`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(i64);

impl Price {
    /// Creates a price from a whole number of base-currency units.
    pub fn from_base_units(amount: i64) -> Self {
        Self(amount)
    }

    /// The raw amount in base-currency units.
    pub fn base_units(&self) -> i64 {
        self.0
    }

    /// Converts the amount into the given display currency.
    pub fn convert_to(&self, currency: Currency) -> f64 {
        self.0 as f64 * currency.rate_from_base()
    }

    /// Formats the amount for display in the given currency.
    ///
    /// The base currency renders with no fraction digits and a trailing
    /// symbol ("1.000.000 ₫"); every other currency renders with two
    /// fraction digits and a leading symbol ("$39.00").
    pub fn format_in(&self, currency: Currency) -> String {
        let value = self.convert_to(currency);
        let formatted = if currency.is_base() {
            format!("{} {}", group_digits(&self.0.to_string(), '.'), currency.symbol())
        } else {
            let minor = (value * 100.0).round() as i64;
            let (major, cents) = (minor / 100, (minor % 100).abs());
            format!(
                "{}{}.{:02}",
                currency.symbol(),
                group_digits(&major.to_string(), ','),
                cents
            )
        };
        formatted.trim().to_string()
    }
}

/// Inserts a grouping separator every three digits, leaving any leading
/// sign alone.
fn group_digits(s: &str, sep: char) -> String {
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(sep);
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}

impl FromStr for Price {
    type Err = ParsePriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount: i64 = s
            .trim()
            .parse()
            .map_err(|_| ParsePriceError::InvalidFormat)?;
        if amount < 0 {
            return Err(ParsePriceError::Negative);
        }
        Ok(Self(amount))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PriceVisitor;

        impl de::Visitor<'_> for PriceVisitor {
            type Value = Price;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a non-negative amount as a number or numeric string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
                if v < 0 {
                    return Err(E::custom(ParsePriceError::Negative));
                }
                Ok(Price(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
                i64::try_from(v)
                    .map(Price)
                    .map_err(|_| E::custom("price out of range"))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
                self.visit_i64(v.round() as i64)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(PriceVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_with_the_target_rate() {
        let price = Price::from_base_units(1_000_000);
        assert_eq!(price.convert_to(Currency::USD), 39.0);
    }

    #[test]
    fn non_base_format_has_two_fraction_digits_and_target_symbol() {
        let price = Price::from_base_units(1_000_000);
        let formatted = price.format_in(Currency::USD);
        assert_eq!(formatted, "$39.00");
        assert!(!formatted.contains('₫'));
    }

    #[test]
    fn base_format_is_integer_denominated_with_grouping() {
        let price = Price::from_base_units(1_000_000);
        assert_eq!(price.format_in(Currency::VND), "1.000.000 ₫");
    }

    #[test]
    fn small_amounts_need_no_grouping() {
        assert_eq!(Price::from_base_units(950).format_in(Currency::VND), "950 ₫");
    }

    #[test]
    fn rounds_to_the_nearest_cent() {
        // 123_456 VND * 0.000039 = 4.814784 USD
        let price = Price::from_base_units(123_456);
        assert_eq!(price.format_in(Currency::USD), "$4.81");
    }

    #[test]
    fn deserializes_from_number_and_numeric_string() {
        let from_number: Price = serde_json::from_str("2500000").unwrap();
        let from_string: Price = serde_json::from_str("\"2500000\"").unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number.base_units(), 2_500_000);
    }

    #[test]
    fn rejects_garbage_at_the_boundary() {
        assert!(serde_json::from_str::<Price>("\"not-a-price\"").is_err());
        assert!(serde_json::from_str::<Price>("-5").is_err());
    }

    #[test]
    fn parse_errors_are_typed() {
        assert_eq!("abc".parse::<Price>(), Err(ParsePriceError::InvalidFormat));
        assert_eq!("-1".parse::<Price>(), Err(ParsePriceError::Negative));
    }
}
