//! Prices
//!
//! Standard and promotional unit prices for a product, and the fold that sums
//! line amounts into an order subtotal.

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    markup::Markup,
    money::{PRICE_DP, PROMOTIONAL_PRICE_DP, round_half_up},
    products::{Product, ProductId},
    promotions::Promotion,
};

/// Errors that can occur while pricing a product.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// A group-based promotion was priced for zero units.
    #[error("Division by zero: product {product} has promotion {promotion:?} and quantity 0")]
    DivisionByZero {
        /// Product being priced
        product: ProductId,
        /// Promotion that divides by the quantity
        promotion: String,
    },

    /// A unit price or line total is too large to represent.
    #[error("Arithmetic overflow while pricing product {product}")]
    Overflow {
        /// Product being priced
        product: ProductId,
    },

    /// The sum of the line totals is too large to represent.
    #[error("Arithmetic overflow while summing line totals")]
    SubtotalOverflow,

    /// An amount is in a currency other than the subtotal's (expected, found).
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(&'static str, &'static str),
}

/// Calculates the standard unit price of a unit cost under a markup.
///
/// Percentage markups are rounded to cents before being added; the result is
/// always rounded to cents. Returns `None` if the price overflows.
pub fn compute_standard_price<'a>(
    unit_cost: &Money<'a, Currency>,
    markup: &Markup,
) -> Option<Money<'a, Currency>> {
    let cost = *unit_cost.amount();

    let price = match markup {
        Markup::Percentage(rate) => {
            let markup_amount = cost.checked_mul(*rate)?.checked_div(Decimal::ONE_HUNDRED)?;

            cost.checked_add(round_half_up(markup_amount, PRICE_DP))?
        }
        Markup::FixedAmount { amount, .. } => cost.checked_add(*amount)?,
    };

    Some(Money::from_decimal(
        round_half_up(price, PRICE_DP),
        unit_cost.currency(),
    ))
}

/// Calculates the promotional unit price of `quantity` units of a product,
/// rounded to five decimal places.
///
/// # Errors
///
/// - [`PricingError::DivisionByZero`]: the product's promotion bills per group
///   of units and `quantity` is zero.
/// - [`PricingError::Overflow`]: the price is too large to represent.
pub fn compute_promotional_price<'a>(
    product: &Product<'a>,
    quantity: u32,
) -> Result<Money<'a, Currency>, PricingError> {
    let overflow = || PricingError::Overflow {
        product: product.id,
    };

    let standard =
        compute_standard_price(&product.unit_cost, &product.markup).ok_or_else(overflow)?;
    let standard_amount = *standard.amount();

    let price = match product.promotion {
        Promotion::None => return Ok(standard),
        Promotion::PercentageOff(rate) => {
            let kept = Decimal::ONE - rate / Decimal::ONE_HUNDRED;

            standard_amount.checked_mul(kept).ok_or_else(overflow)?
        }
        Promotion::BuyNGetMthFree { paid, group_size } => {
            let division_by_zero = || PricingError::DivisionByZero {
                product: product.id,
                promotion: product.promotion.to_string(),
            };

            if quantity == 0 {
                return Err(division_by_zero());
            }

            let groups = quantity.checked_div(group_size).ok_or_else(division_by_zero)?;
            let remainder = quantity.checked_rem(group_size).ok_or_else(division_by_zero)?;
            let billed = u64::from(groups) * u64::from(paid) + u64::from(remainder);

            standard_amount
                .checked_mul(Decimal::from(billed))
                .ok_or_else(overflow)?
                .checked_div(Decimal::from(quantity))
                .ok_or_else(overflow)?
        }
    };

    Ok(Money::from_decimal(
        round_half_up(price, PROMOTIONAL_PRICE_DP),
        standard.currency(),
    ))
}

/// Calculates a line total: the promotional unit price times the quantity,
/// without further rounding. Returns `None` if the total overflows.
pub fn compute_line_total<'a>(
    promotional_unit_price: &Money<'a, Currency>,
    quantity: u32,
) -> Option<Money<'a, Currency>> {
    let total = promotional_unit_price
        .amount()
        .checked_mul(Decimal::from(quantity))?;

    Some(Money::from_decimal(total, promotional_unit_price.currency()))
}

/// Sums amounts, starting from zero in `currency`.
///
/// # Errors
///
/// - [`PricingError::CurrencyMismatch`]: an amount is in a different currency.
/// - [`PricingError::SubtotalOverflow`]: the sum is too large to represent.
pub fn total_price<'a>(
    amounts: impl IntoIterator<Item = Money<'a, Currency>>,
    currency: &'a Currency,
) -> Result<Money<'a, Currency>, PricingError> {
    let total = amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| {
            if amount.currency() != currency {
                return Err(PricingError::CurrencyMismatch(
                    currency.iso_alpha_code,
                    amount.currency().iso_alpha_code,
                ));
            }

            acc.checked_add(*amount.amount())
                .ok_or(PricingError::SubtotalOverflow)
        })?;

    Ok(Money::from_decimal(total, currency))
}
