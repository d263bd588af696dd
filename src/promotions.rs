//! Promotions
//!
//! Promotions arrive from the catalog as free text. They are parsed once,
//! when a product record enters the engine, into a closed set of variants. An
//! unrecognised promotion is rejected at that point and nowhere else.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while parsing a promotion.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PromotionError {
    /// The text matches none of the known promotion variants.
    #[error("Unknown promotion type: {0}")]
    Unknown(String),
}

/// Promotion applied on top of a product's standard price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Promotion {
    /// No promotion; the promotional price is the standard price.
    None,

    /// Flat percentage off the standard price, `30` meaning 30% off.
    PercentageOff(Decimal),

    /// In every full group of `group_size` units only `paid` are billed.
    ///
    /// "Buy 2, get 3rd free" is `paid: 2, group_size: 3`.
    BuyNGetMthFree {
        /// Units billed per group
        paid: u32,
        /// Units in a group
        group_size: u32,
    },
}

impl FromStr for Promotion {
    type Err = PromotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.split_whitespace().collect::<Vec<_>>().join(" ");
        let normalised = normalised.to_ascii_lowercase();

        if normalised == "none" {
            return Ok(Promotion::None);
        }

        parse_percentage_off(&normalised)
            .or_else(|| parse_buy_n_get_mth_free(&normalised))
            .ok_or_else(|| PromotionError::Unknown(s.to_string()))
    }
}

/// `"30% off"`
fn parse_percentage_off(text: &str) -> Option<Promotion> {
    let rate = text.strip_suffix("off")?.trim_end().strip_suffix('%')?;
    let rate = rate.trim().parse::<Decimal>().ok()?;

    (Decimal::ZERO..=Decimal::ONE_HUNDRED)
        .contains(&rate)
        .then_some(Promotion::PercentageOff(rate))
}

/// `"buy 2, get 3rd free"`
fn parse_buy_n_get_mth_free(text: &str) -> Option<Promotion> {
    let body = text.strip_prefix("buy ")?.strip_suffix(" free")?;
    let (paid, free) = body.split_once(',')?;

    let paid = paid.trim().parse::<u32>().ok()?;
    let ordinal = free.trim().strip_prefix("get ")?.trim();

    let digits = ordinal.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    let suffix = ordinal.strip_prefix(digits)?;
    let group_size = digits.parse::<u32>().ok()?;

    if paid == 0 || paid.checked_add(1)? != group_size || suffix != ordinal_suffix(group_size) {
        return None;
    }

    Some(Promotion::BuyNGetMthFree { paid, group_size })
}

fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

impl fmt::Display for Promotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Promotion::None => write!(f, "none"),
            Promotion::PercentageOff(rate) => write!(f, "{rate}% off"),
            Promotion::BuyNGetMthFree { paid, group_size } => write!(
                f,
                "Buy {paid}, get {group_size}{} free",
                ordinal_suffix(*group_size)
            ),
        }
    }
}
