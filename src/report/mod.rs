//! Reports
//!
//! Human-readable renderings of a priced order.

use std::io;

use clap::ValueEnum;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    lookup::ProductLookup,
    money::{PRICE_DP, round_half_up, to_display_scale},
    orders::Order,
};

pub mod table;
pub mod text;

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing to the output failed.
    #[error("Failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Output format for order reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Plain text, one labelled value per line
    #[default]
    Text,

    /// Box-drawn table with a summary block
    Table,
}

/// Writes `order` to `out` in the given format.
///
/// Product names come from `products`; products that can't be found are
/// shown as [`crate::lookup::UNKNOWN_PRODUCT`].
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_order(
    out: &mut impl io::Write,
    format: ReportFormat,
    order: &Order<'_>,
    products: &impl ProductLookup,
) -> Result<(), ReportError> {
    match format {
        ReportFormat::Text => text::write_order(out, order, products),
        ReportFormat::Table => table::write_order(out, order, products),
    }
}

/// Discount as a percentage of the total before discounts, or `None` when
/// there is no positive discount to show.
///
/// The ratio is rounded to four places before scaling, so the percentage
/// always has at most two significant decimals.
pub fn discount_percent(order: &Order<'_>) -> Option<Decimal> {
    let discount = *order.discount_amount().amount();
    let total = *order.total_before_discounts().amount();

    if discount <= Decimal::ZERO {
        return None;
    }

    let ratio = round_half_up(discount.checked_div(total)?, 4);

    let percent = ratio.checked_mul(Decimal::ONE_HUNDRED)?;

    Some(to_display_scale(percent, PRICE_DP))
}
