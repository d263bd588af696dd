//! Money helpers
//!
//! Rounding and currency lookup shared by the pricing engine, the catalog
//! loader and the reports. All rounding is half-up: ties move away from zero,
//! which matches how the distributor's price lists are computed by hand.

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::iso::{Currency, EUR, GBP, USD};

/// Decimal places kept for standard unit prices, discounts and displayed totals.
pub const PRICE_DP: u32 = 2;

/// Decimal places kept for promotional unit prices.
///
/// The extra precision survives until the price is multiplied by a quantity.
pub const PROMOTIONAL_PRICE_DP: u32 = 5;

/// Round `amount` to `dp` decimal places, ties away from zero.
pub fn round_half_up(amount: Decimal, dp: u32) -> Decimal {
    amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Round `amount` to `dp` decimal places and pad it so it displays exactly
/// `dp` digits after the point (`125` becomes `125.00`).
pub fn to_display_scale(amount: Decimal, dp: u32) -> Decimal {
    let mut scaled = round_half_up(amount, dp);
    scaled.rescale(dp);

    scaled
}

/// Find a supported currency by its ISO alpha code.
pub fn parse_currency(code: &str) -> Option<&'static Currency> {
    match code.trim() {
        "EUR" => Some(EUR),
        "GBP" => Some(GBP),
        "USD" => Some(USD),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_up_rounds_ties_away_from_zero() {
        assert_eq!(round_half_up(Decimal::new(5_005, 3), 2), Decimal::new(501, 2));
        assert_eq!(
            round_half_up(Decimal::new(-5_005, 3), 2),
            Decimal::new(-501, 2)
        );
        assert_eq!(round_half_up(Decimal::new(5_004, 3), 2), Decimal::new(500, 2));
    }

    #[test]
    fn round_half_up_keeps_short_values() {
        let rounded = round_half_up(Decimal::new(125, 0), 2);

        assert_eq!(rounded, Decimal::new(125, 0));
        assert_eq!(rounded.to_string(), "125");
    }

    #[test]
    fn to_display_scale_pads_and_rounds() {
        assert_eq!(to_display_scale(Decimal::new(125, 0), 2).to_string(), "125.00");
        assert_eq!(
            to_display_scale(Decimal::new(6_666_667, 5), 2).to_string(),
            "66.67"
        );
        assert_eq!(
            to_display_scale(Decimal::new(77, 0), 5).to_string(),
            "77.00000"
        );
    }

    #[test]
    fn parse_currency_accepts_supported_codes() {
        assert_eq!(parse_currency("EUR"), Some(EUR));
        assert_eq!(parse_currency(" GBP "), Some(GBP));
        assert_eq!(parse_currency("USD"), Some(USD));
        assert_eq!(parse_currency("ABC"), None);
    }
}
