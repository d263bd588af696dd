//! Orders
//!
//! Prices every line of an order, sums the lines and applies the client's
//! discount.

use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::debug;

use crate::{
    clients::Client,
    descriptor::DescriptorError,
    discounts::{DiscountBreakdown, DiscountError, discount_breakdown},
    pricing::{
        PricingError, compute_line_total, compute_promotional_price, compute_standard_price,
        total_price,
    },
    products::{Product, ProductError, ProductId},
};

/// Errors that abort an order.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The order descriptor could not be parsed.
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// A product record could not be turned into a priceable product.
    #[error(transparent)]
    Product(#[from] ProductError),

    /// A line could not be priced.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// A product's currency differs from the order currency (product, product currency, order currency).
    #[error("Product {0} has currency {1}, but order has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),

    /// The client discount could not be calculated.
    #[error(transparent)]
    Discount(#[from] DiscountError),
}

/// A priced order line.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine<'a> {
    product: ProductId,
    quantity: u32,
    standard_unit_price: Money<'a, Currency>,
    promotional_unit_price: Money<'a, Currency>,
    line_total: Money<'a, Currency>,
}

impl<'a> OrderLine<'a> {
    /// Price `quantity` units of a product.
    ///
    /// # Errors
    ///
    /// - [`PricingError::DivisionByZero`]: the product has a group-based
    ///   promotion and `quantity` is zero.
    /// - [`PricingError::Overflow`]: a price or the line total is too large to
    ///   represent.
    pub fn price(product: &Product<'a>, quantity: u32) -> Result<Self, PricingError> {
        let overflow = || PricingError::Overflow {
            product: product.id,
        };

        let standard_unit_price =
            compute_standard_price(&product.unit_cost, &product.markup).ok_or_else(overflow)?;
        let promotional_unit_price = compute_promotional_price(product, quantity)?;
        let line_total =
            compute_line_total(&promotional_unit_price, quantity).ok_or_else(overflow)?;

        Ok(Self {
            product: product.id,
            quantity,
            standard_unit_price,
            promotional_unit_price,
            line_total,
        })
    }

    /// Ordered product
    pub fn product(&self) -> ProductId {
        self.product
    }

    /// Ordered units
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price after markup, rounded to cents
    pub fn standard_unit_price(&self) -> Money<'a, Currency> {
        self.standard_unit_price
    }

    /// Unit price after promotion, rounded to five decimal places
    pub fn promotional_unit_price(&self) -> Money<'a, Currency> {
        self.promotional_unit_price
    }

    /// Promotional unit price times quantity, unrounded
    pub fn line_total(&self) -> Money<'a, Currency> {
        self.line_total
    }
}

/// A fully priced order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order<'a> {
    client: Client,
    lines: Vec<OrderLine<'a>>,
    currency: &'a Currency,
    total_before_discounts: Money<'a, Currency>,
    discount: DiscountBreakdown<'a>,
    order_total_amount: Money<'a, Currency>,
}

impl<'a> Order<'a> {
    /// Ordering client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Priced lines, in the order they were requested
    pub fn lines(&self) -> &[OrderLine<'a>] {
        &self.lines
    }

    /// Currency every amount on the order is in
    pub fn currency(&self) -> &'a Currency {
        self.currency
    }

    /// Sum of line totals, unrounded
    pub fn total_before_discounts(&self) -> Money<'a, Currency> {
        self.total_before_discounts
    }

    /// Client discount, rounded to cents
    pub fn discount_amount(&self) -> Money<'a, Currency> {
        self.discount.total
    }

    /// Basic and volume parts of the client discount
    pub fn discount_breakdown(&self) -> &DiscountBreakdown<'a> {
        &self.discount
    }

    /// Amount payable: total before discounts minus the discount
    pub fn order_total_amount(&self) -> Money<'a, Currency> {
        self.order_total_amount
    }
}

/// Builds a priced order for a client from resolved products and quantities.
///
/// Lines keep their input order. An order without lines is valid and totals
/// zero.
///
/// # Errors
///
/// - [`OrderError::CurrencyMismatch`]: a product is priced in a currency other
///   than `currency`.
/// - [`OrderError::Pricing`]: a line could not be priced, or the subtotal is
///   too large to represent.
/// - [`OrderError::Discount`]: the discount is too large to represent.
pub fn build_order<'a>(
    client: Client,
    lines: impl IntoIterator<Item = (Product<'a>, u32)>,
    currency: &'a Currency,
) -> Result<Order<'a>, OrderError> {
    let lines = lines
        .into_iter()
        .map(|(product, quantity)| {
            let product_currency = product.currency();

            if product_currency != currency {
                return Err(OrderError::CurrencyMismatch(
                    product.id,
                    product_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }

            let line = OrderLine::price(&product, quantity)?;

            debug!(
                product_id = %line.product,
                quantity,
                standard_unit_price = %line.standard_unit_price.amount(),
                promotional_unit_price = %line.promotional_unit_price.amount(),
                "priced order line"
            );

            Ok(line)
        })
        .collect::<Result<Vec<_>, OrderError>>()?;

    let total_before_discounts = total_price(lines.iter().map(OrderLine::line_total), currency)?;
    let discount = discount_breakdown(&client, &total_before_discounts)?;
    let order_total_amount = total_before_discounts
        .amount()
        .checked_sub(*discount.total.amount())
        .ok_or(DiscountError::Overflow(*total_before_discounts.amount()))?;

    debug!(
        client_id = %client.id,
        lines = lines.len(),
        total_before_discounts = %total_before_discounts.amount(),
        discount_amount = %discount.total.amount(),
        volume_tier = ?discount.tier,
        "built order"
    );

    Ok(Order {
        client,
        lines,
        currency,
        total_before_discounts,
        discount,
        order_total_amount: Money::from_decimal(order_total_amount, currency),
    })
}
