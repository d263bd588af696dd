//! Discounts
//!
//! Client discounts on an order subtotal: a basic rate applied to every order,
//! plus a volume rate chosen by the subtotal's tier.
//!
//! Tiers are selected with a strict greater-than and are not cumulative. A
//! subtotal of exactly 10,000 gets no volume rate, and exactly 30,000 gets the
//! 10,000 tier's rate.

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    clients::Client,
    money::{PRICE_DP, round_half_up},
};

/// Errors that can occur while calculating a discount.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscountError {
    /// The discount is too large to represent.
    #[error("Arithmetic overflow while discounting a subtotal of {0}")]
    Overflow(Decimal),
}

/// Subtotal above which the 10,000 volume rate applies.
pub const VOLUME_THRESHOLD_10K: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Subtotal above which the 30,000 volume rate applies.
pub const VOLUME_THRESHOLD_30K: Decimal = Decimal::from_parts(30_000, 0, 0, false, 0);

/// Volume tier an order subtotal falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeTier {
    /// At or below 10,000.
    Base,

    /// Above 10,000, at or below 30,000.
    Above10k,

    /// Above 30,000.
    Above30k,
}

impl VolumeTier {
    /// Select the tier for a subtotal.
    pub fn for_total(total: Decimal) -> Self {
        if total > VOLUME_THRESHOLD_30K {
            VolumeTier::Above30k
        } else if total > VOLUME_THRESHOLD_10K {
            VolumeTier::Above10k
        } else {
            VolumeTier::Base
        }
    }

    /// The client's volume rate for this tier, in percentage points.
    pub fn rate(self, client: &Client) -> Decimal {
        match self {
            VolumeTier::Base => Decimal::ZERO,
            VolumeTier::Above10k => client.volume_rate_10k,
            VolumeTier::Above30k => client.volume_rate_30k,
        }
    }
}

/// The parts that make up a client discount.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountBreakdown<'a> {
    /// Basic discount, rounded to cents
    pub basic: Money<'a, Currency>,

    /// Volume tier the subtotal fell in
    pub tier: VolumeTier,

    /// Volume discount, rounded to cents
    pub volume: Money<'a, Currency>,

    /// Basic plus volume, rounded to cents
    pub total: Money<'a, Currency>,
}

/// Breaks the client discount on `total` down into its basic and volume parts.
///
/// # Errors
///
/// - [`DiscountError::Overflow`]: a part of the discount is too large to
///   represent.
pub fn discount_breakdown<'a>(
    client: &Client,
    total: &Money<'a, Currency>,
) -> Result<DiscountBreakdown<'a>, DiscountError> {
    let amount = *total.amount();
    let currency = total.currency();
    let overflow = || DiscountError::Overflow(amount);

    let tier = VolumeTier::for_total(amount);
    let basic = percent_of(amount, client.basic_discount_rate).ok_or_else(overflow)?;
    let volume = match tier {
        VolumeTier::Base => Decimal::ZERO,
        VolumeTier::Above10k | VolumeTier::Above30k => {
            percent_of(amount, tier.rate(client)).ok_or_else(overflow)?
        }
    };
    let sum = basic.checked_add(volume).ok_or_else(overflow)?;

    Ok(DiscountBreakdown {
        basic: Money::from_decimal(basic, currency),
        tier,
        volume: Money::from_decimal(volume, currency),
        total: Money::from_decimal(round_half_up(sum, PRICE_DP), currency),
    })
}

/// Calculates the total client discount on an order subtotal, rounded to cents.
///
/// Negative subtotals are not rejected; they produce a negative discount.
///
/// # Errors
///
/// - [`DiscountError::Overflow`]: the discount is too large to represent.
pub fn compute_discount<'a>(
    client: &Client,
    total: &Money<'a, Currency>,
) -> Result<Money<'a, Currency>, DiscountError> {
    Ok(discount_breakdown(client, total)?.total)
}

fn percent_of(amount: Decimal, rate: Decimal) -> Option<Decimal> {
    let part = amount.checked_mul(rate)?.checked_div(Decimal::ONE_HUNDRED)?;

    Some(round_half_up(part, PRICE_DP))
}
