//! Products

use std::fmt;

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    markup::{Markup, MarkupError},
    promotions::{Promotion, PromotionError},
};

/// Product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors raised while turning a catalog record into a priceable product.
#[derive(Debug, Error, PartialEq)]
pub enum ProductError {
    /// Markup could not be parsed.
    #[error("Product {0}: {1}")]
    Markup(ProductId, #[source] MarkupError),

    /// Promotion matches no known promotion.
    #[error("Product {0}: {1}")]
    Promotion(ProductId, #[source] PromotionError),

    /// Fixed markup is expressed in a different currency from the unit cost.
    #[error("Product {0} costs in {1} but its markup is in {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),
}

/// Product as held by the catalog.
///
/// The markup and promotion are parsed once, when the record is built. A
/// parse failure is kept on the record so that only orders for this product
/// fail.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    /// Product identifier
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Cost of a single unit
    pub unit_cost: Money<'static, Currency>,

    /// Parsed markup, e.g. from `"80%"` or `"0.90 EUR/unit"`
    pub markup: Result<Markup, MarkupError>,

    /// Parsed promotion, e.g. from `"none"` or `"Buy 2, get 3rd free"`
    pub promotion: Result<Promotion, PromotionError>,
}

impl ProductRecord {
    /// Build a record, parsing the textual markup and promotion.
    pub fn parse(
        id: ProductId,
        name: impl Into<String>,
        unit_cost: Money<'static, Currency>,
        markup: &str,
        promotion: &str,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            unit_cost,
            markup: markup.parse(),
            promotion: promotion.parse(),
        }
    }
}

/// Product ready to be priced.
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Product identifier
    pub id: ProductId,

    /// Cost of a single unit
    pub unit_cost: Money<'a, Currency>,

    /// Markup applied to the unit cost
    pub markup: Markup,

    /// Promotion applied to the standard price
    pub promotion: Promotion,
}

impl<'a> Product<'a> {
    /// Create a new product from already-parsed parts.
    pub fn new(
        id: ProductId,
        unit_cost: Money<'a, Currency>,
        markup: Markup,
        promotion: Promotion,
    ) -> Self {
        Self {
            id,
            unit_cost,
            markup,
            promotion,
        }
    }

    /// Currency the product is priced in.
    pub fn currency(&self) -> &'a Currency {
        self.unit_cost.currency()
    }
}

impl TryFrom<ProductRecord> for Product<'_> {
    type Error = ProductError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let markup = record
            .markup
            .map_err(|err| ProductError::Markup(record.id, err))?;

        let promotion = record
            .promotion
            .map_err(|err| ProductError::Promotion(record.id, err))?;

        let cost_currency = record.unit_cost.currency();

        if let Markup::FixedAmount { currency, .. } = markup
            && currency != cost_currency
        {
            return Err(ProductError::CurrencyMismatch(
                record.id,
                cost_currency.iso_alpha_code,
                currency.iso_alpha_code,
            ));
        }

        Ok(Product::new(record.id, record.unit_cost, markup, promotion))
    }
}
