//! Defines the display currencies supported by the storefront.

use serde::Deserialize;
use serde::Serialize;

/// A currency the shopper can choose to display prices in.
///
/// All prices are stored and transmitted in the base currency (VND); the
/// other variants exist purely as display transforms.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum Currency {
    #[default]
    VND, // Vietnamese Đồng (base)
    USD, // United States Dollar
    EUR, // Euro
    GBP, // Great British Pound
    AUD, // Australian Dollar
}

/// The currency prices are canonically stored in.
pub const BASE_CURRENCY: Currency = Currency::VND;

impl Currency {
    /// Whether this is the base (stored) currency.
    pub fn is_base(&self) -> bool {
        *self == BASE_CURRENCY
    }

    /// Returns the number of fraction digits shown for the currency.
    ///
    /// The base currency is integer-denominated; everything else shows cents.
    pub fn decimals(&self) -> u8 {
        if self.is_base() {
            0
        } else {
            2
        }
    }

    /// Units of this currency per one unit of the base currency.
    pub fn rate_from_base(&self) -> f64 {
        match self {
            Self::VND => 1.0,
            Self::USD => 0.000_039,
            Self::EUR => 0.000_036,
            Self::GBP => 0.000_031,
            Self::AUD => 0.000_060,
        }
    }

    /// Returns the graphical symbol for the currency (e.g., '$').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::VND => "₫",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::AUD => "A$",
        }
    }

    /// Returns the flag glyph shown next to the currency in the chooser.
    pub fn flag(&self) -> &'static str {
        match self {
            Self::VND => "🇻🇳",
            Self::USD => "🇺🇸",
            Self::EUR => "🇪🇺",
            Self::GBP => "🇬🇧",
            Self::AUD => "🇦🇺",
        }
    }

    /// Returns the ISO 4217 string code for the currency (e.g., "USD").
    /// This is handled automatically by the `strum::IntoStaticStr` derive macro.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the full name of the currency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::VND => "Vietnamese Đồng",
            Self::USD => "United States Dollar",
            Self::EUR => "Euro",
            Self::GBP => "Great British Pound",
            Self::AUD => "Australian Dollar",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn code_round_trips_through_from_str() {
        for currency in Currency::iter() {
            assert_eq!(Currency::from_str(currency.code()), Ok(currency));
        }
    }

    #[test]
    fn base_currency_is_integer_denominated() {
        assert_eq!(BASE_CURRENCY.decimals(), 0);
        assert_eq!(Currency::USD.decimals(), 2);
    }

    #[test]
    fn base_rate_is_identity() {
        assert_eq!(BASE_CURRENCY.rate_from_base(), 1.0);
    }
}
