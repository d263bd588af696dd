//! Markups

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::money::parse_currency;

/// Errors raised while parsing a markup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MarkupError {
    /// The text is neither `"<rate>%"` nor `"<amount> <CURRENCY>/unit"`.
    #[error("Invalid markup: {0:?}")]
    Invalid(String),

    /// The fixed amount names a currency we don't price in.
    #[error("Unknown currency in markup {text:?}: {code}")]
    UnknownCurrency {
        /// Original markup text
        text: String,
        /// Currency code found in the markup
        code: String,
    },
}

/// Amount added to a product's unit cost to form its standard price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Markup {
    /// Percentage of the unit cost, `25` meaning 25%. May be zero or negative.
    Percentage(Decimal),

    /// Fixed amount added to every unit.
    FixedAmount {
        /// Amount per unit
        amount: Decimal,
        /// Currency the amount is expressed in
        currency: &'static Currency,
    },
}

impl FromStr for Markup {
    type Err = MarkupError;

    /// Parse `"25%"` or `"30 EUR/unit"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MarkupError::Invalid(s.to_string());
        let trimmed = s.trim();

        if let Some(rate) = trimmed.strip_suffix('%') {
            let rate = rate.trim().parse::<Decimal>().map_err(|_err| invalid())?;

            return Ok(Markup::Percentage(rate));
        }

        let per_unit = trimmed.strip_suffix("/unit").ok_or_else(invalid)?;
        let mut parts = per_unit.split_whitespace();

        let (Some(amount), Some(code), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };

        let amount = amount.parse::<Decimal>().map_err(|_err| invalid())?;
        let currency = parse_currency(code).ok_or_else(|| MarkupError::UnknownCurrency {
            text: s.to_string(),
            code: code.to_string(),
        })?;

        Ok(Markup::FixedAmount { amount, currency })
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Markup::Percentage(rate) => write!(f, "{rate}%"),
            Markup::FixedAmount { amount, currency } => {
                write!(f, "{amount} {}/unit", currency.iso_alpha_code)
            }
        }
    }
}
