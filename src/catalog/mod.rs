//! Catalog
//!
//! In-memory client and product reference data, loaded from YAML.

use std::{fs, path::Path};

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::records::CatalogFixture,
    clients::{Client, ClientId},
    lookup::{ClientLookup, ProductLookup, UNKNOWN_PRODUCT},
    money::parse_currency,
    products::{ProductId, ProductRecord},
};

pub mod records;

/// Catalog Loading Errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading the catalog file
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid rate format
    #[error("Invalid rate format: {0}")]
    InvalidRate(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// A product is priced in a currency other than the catalog's
    #[error("Currency mismatch for product {product}: expected {expected}, found {found}")]
    CurrencyMismatch {
        /// Offending product
        product: ProductId,
        /// Catalog currency
        expected: &'static str,
        /// Product currency
        found: &'static str,
    },
}

/// Client and product reference data for a single currency.
#[derive(Debug, Clone)]
pub struct Catalog {
    currency: &'static Currency,
    clients: FxHashMap<ClientId, Client>,
    products: FxHashMap<ProductId, ProductRecord>,
}

impl Catalog {
    /// Create an empty catalog priced in `currency`.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            currency,
            clients: FxHashMap::default(),
            products: FxHashMap::default(),
        }
    }

    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if any price or
    /// rate is malformed, or if a product is priced in another currency.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let catalog = Self::from_yaml_str(&contents)?;

        debug!(
            path = %path.display(),
            clients = catalog.clients.len(),
            products = catalog.products.len(),
            "loaded catalog"
        );

        Ok(catalog)
    }

    /// Load a catalog from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed, if any price or rate
    /// is malformed, or if a product is priced in another currency.
    pub fn from_yaml_str(contents: &str) -> Result<Self, CatalogError> {
        let fixture: CatalogFixture = serde_norway::from_str(contents)?;

        let currency = parse_currency(&fixture.currency)
            .ok_or_else(|| CatalogError::UnknownCurrency(fixture.currency.clone()))?;

        let mut catalog = Self::new(currency);

        for (id, client_fixture) in fixture.clients {
            let id = ClientId(id);

            catalog.insert_client(client_fixture.try_into_client(id)?);
        }

        for (id, product_fixture) in fixture.products {
            let id = ProductId(id);

            catalog.insert_product(product_fixture.try_into_record(id)?)?;
        }

        Ok(catalog)
    }

    /// Add or replace a client.
    pub fn insert_client(&mut self, client: Client) -> &mut Self {
        self.clients.insert(client.id, client);

        self
    }

    /// Add or replace a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the product's unit cost is not in the catalog currency.
    pub fn insert_product(&mut self, record: ProductRecord) -> Result<&mut Self, CatalogError> {
        let found = record.unit_cost.currency();

        if found != self.currency {
            return Err(CatalogError::CurrencyMismatch {
                product: record.id,
                expected: self.currency.iso_alpha_code,
                found: found.iso_alpha_code,
            });
        }

        self.products.insert(record.id, record);

        Ok(self)
    }

    /// Currency every product is priced in
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Number of clients
    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    /// Number of products
    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

impl ClientLookup for Catalog {
    fn find_client_by_id(&self, id: ClientId) -> Option<Client> {
        let client = self.clients.get(&id).cloned();

        if client.is_none() {
            debug!(client_id = %id, "client not in catalog");
        }

        client
    }
}

impl ProductLookup for Catalog {
    fn find_product_by_id(&self, id: ProductId) -> Option<ProductRecord> {
        let record = self.products.get(&id).cloned();

        if record.is_none() {
            debug!(product_id = %id, "product not in catalog");
        }

        record
    }

    fn find_product_name_by_id(&self, id: ProductId) -> String {
        self.products.get(&id).map_or_else(
            || UNKNOWN_PRODUCT.to_string(),
            |record| record.name.clone(),
        )
    }
}
