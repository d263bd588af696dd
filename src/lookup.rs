//! Lookups
//!
//! Read-only access to client and product reference data. The order service
//! depends on these traits only, so any store can back it.

use crate::{
    clients::{Client, ClientId},
    products::{ProductId, ProductRecord},
};

/// Display name used for products that can't be found.
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// Client reference data.
#[cfg_attr(test, mockall::automock)]
pub trait ClientLookup {
    /// Find a client by id.
    fn find_client_by_id(&self, id: ClientId) -> Option<Client>;
}

/// Product reference data.
#[cfg_attr(test, mockall::automock)]
pub trait ProductLookup {
    /// Find a product record by id.
    fn find_product_by_id(&self, id: ProductId) -> Option<ProductRecord>;

    /// Find a product's display name, or [`UNKNOWN_PRODUCT`] when it is absent.
    fn find_product_name_by_id(&self, id: ProductId) -> String {
        self.find_product_by_id(id)
            .map_or_else(|| UNKNOWN_PRODUCT.to_string(), |record| record.name)
    }
}
