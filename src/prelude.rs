//! Tally prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    batch::{BatchError, BatchOutcome, load_descriptors},
    catalog::{Catalog, CatalogError},
    clients::{Client, ClientId},
    descriptor::{DescriptorError, DescriptorLine, OrderDescriptor},
    discounts::{
        DiscountBreakdown, DiscountError, VolumeTier, compute_discount, discount_breakdown,
    },
    lookup::{ClientLookup, ProductLookup, UNKNOWN_PRODUCT},
    markup::{Markup, MarkupError},
    orders::{Order, OrderError, OrderLine, build_order},
    pricing::{
        PricingError, compute_line_total, compute_promotional_price, compute_standard_price,
        total_price,
    },
    products::{Product, ProductError, ProductId, ProductRecord},
    promotions::{Promotion, PromotionError},
    report::{ReportError, ReportFormat},
    service::OrderService,
};
