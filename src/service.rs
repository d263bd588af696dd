//! Order service
//!
//! Resolves order descriptors against client and product lookups and hands
//! the resolved lines to [`build_order`].

use rusty_money::iso::Currency;
use tracing::{Span, info, warn};

use crate::{
    batch::BatchOutcome,
    descriptor::OrderDescriptor,
    lookup::{ClientLookup, ProductLookup},
    orders::{Order, OrderError, build_order},
    products::Product,
};

/// Prices orders using the given lookups.
#[derive(Debug)]
pub struct OrderService<'l, C, P> {
    clients: &'l C,
    products: &'l P,
    currency: &'static Currency,
}

impl<'l, C: ClientLookup, P: ProductLookup> OrderService<'l, C, P> {
    /// Create a service pricing in `currency`.
    pub fn new(clients: &'l C, products: &'l P, currency: &'static Currency) -> Self {
        Self {
            clients,
            products,
            currency,
        }
    }

    /// Parse and price a textual order descriptor.
    ///
    /// Returns `Ok(None)` when the client does not exist. Lines for unknown
    /// products are skipped.
    ///
    /// # Errors
    ///
    /// - [`OrderError::Descriptor`]: the descriptor is malformed.
    /// - [`OrderError::Product`]: a product's markup or promotion is invalid.
    /// - [`OrderError::Pricing`]: a line could not be priced.
    #[tracing::instrument(skip(self), fields(client_id = tracing::field::Empty))]
    pub fn process_order(&self, input: &str) -> Result<Option<Order<'static>>, OrderError> {
        let descriptor = input.parse::<OrderDescriptor>()?;

        Span::current().record("client_id", tracing::field::display(descriptor.client));

        self.process_descriptor(&descriptor)
    }

    /// Price an already parsed descriptor.
    ///
    /// # Errors
    ///
    /// See [`OrderService::process_order`].
    pub fn process_descriptor(
        &self,
        descriptor: &OrderDescriptor,
    ) -> Result<Option<Order<'static>>, OrderError> {
        let Some(client) = self.clients.find_client_by_id(descriptor.client) else {
            warn!(
                client_id = %descriptor.client,
                "client not found, cannot proceed with order"
            );

            return Ok(None);
        };

        let mut lines = Vec::with_capacity(descriptor.lines.len());

        for line in &descriptor.lines {
            let Some(record) = self.products.find_product_by_id(line.product) else {
                warn!(product_id = %line.product, "product not found, skipping line");

                continue;
            };

            lines.push((Product::try_from(record)?, line.quantity));
        }

        build_order(client, lines, self.currency).map(Some)
    }

    /// Price every descriptor of a batch, in order.
    ///
    /// Each item gets its own outcome; a failing item doesn't stop the batch.
    #[tracing::instrument(skip_all, fields(items = tracing::field::Empty))]
    pub fn process_batch<I, S>(&self, inputs: I) -> Vec<BatchOutcome<'static>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let outcomes = inputs
            .into_iter()
            .map(|input| {
                let input = input.as_ref();
                let result = self.process_order(input);

                if let Err(error) = &result {
                    warn!(input, %error, "failed to process order");
                }

                BatchOutcome {
                    input: input.to_string(),
                    result,
                }
            })
            .collect::<Vec<_>>();

        Span::current().record("items", outcomes.len());

        info!(
            priced = outcomes.iter().filter(|outcome| outcome.is_priced()).count(),
            "processed batch"
        );

        outcomes
    }
}
