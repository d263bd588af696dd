//! Catalog records

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::{
    catalog::CatalogError,
    clients::{Client, ClientId},
    money::parse_currency,
    products::{ProductId, ProductRecord},
};

/// Catalog document as stored in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Currency every product is priced in (e.g., "EUR")
    pub currency: String,

    /// Map of client id -> client fixture
    #[serde(default)]
    pub clients: FxHashMap<u32, ClientFixture>,

    /// Map of product id -> product fixture
    #[serde(default)]
    pub products: FxHashMap<u32, ProductFixture>,
}

/// Client Fixture
#[derive(Debug, Deserialize)]
pub struct ClientFixture {
    /// Client name
    pub name: String,

    /// Basic discount rate (e.g., "5%")
    pub basic_discount: String,

    /// Volume discount rate above 10,000 (e.g., "1%")
    #[serde(default = "zero_rate")]
    pub volume_discount_10k: String,

    /// Volume discount rate above 30,000 (e.g., "2%")
    #[serde(default = "zero_rate")]
    pub volume_discount_30k: String,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// Unit cost (e.g., "0.52 EUR")
    pub unit_cost: String,

    /// Markup (e.g., "80%" or "0.90 EUR/unit")
    pub markup: String,

    /// Promotion (e.g., "none")
    #[serde(default = "no_promotion")]
    pub promotion: String,
}

fn zero_rate() -> String {
    "0%".to_string()
}

fn no_promotion() -> String {
    "none".to_string()
}

impl ClientFixture {
    /// Convert into a client with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the rates cannot be parsed.
    pub fn try_into_client(self, id: ClientId) -> Result<Client, CatalogError> {
        Ok(Client::new(
            id,
            self.name,
            parse_rate(&self.basic_discount)?,
            parse_rate(&self.volume_discount_10k)?,
            parse_rate(&self.volume_discount_30k)?,
        ))
    }
}

impl ProductFixture {
    /// Convert into a product record with the given id.
    ///
    /// The markup and promotion are parsed here. An invalid one is stored
    /// on the record and only fails orders for this product.
    ///
    /// # Errors
    ///
    /// Returns an error if the unit cost cannot be parsed.
    pub fn try_into_record(self, id: ProductId) -> Result<ProductRecord, CatalogError> {
        let (amount, currency) = parse_price(&self.unit_cost)?;

        Ok(ProductRecord::parse(
            id,
            self.name,
            Money::from_decimal(amount, currency),
            &self.markup,
            &self.promotion,
        ))
    }
}

/// Parse price string (e.g., "0.52 EUR") into an exact amount and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(Decimal, &'static Currency), CatalogError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(CatalogError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| CatalogError::InvalidPrice(s.to_string()))?;

    let currency = parse_currency(currency_code)
        .ok_or_else(|| CatalogError::UnknownCurrency((*currency_code).to_string()))?;

    Ok((amount, currency))
}

/// Parse rate string (e.g., "5%" or "5") into percentage points
///
/// Both forms mean 5 percent.
///
/// # Errors
///
/// Returns an error if the string cannot be parsed as a decimal.
pub fn parse_rate(s: &str) -> Result<Decimal, CatalogError> {
    let trimmed = s.trim();
    let value = trimmed.strip_suffix('%').unwrap_or(trimmed);

    value
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| CatalogError::InvalidRate(s.to_string()))
}
