//! Tally
//!
//! Tally is a wholesale order pricing engine. It marks up product costs, applies
//! per-product promotions and client volume discounts, and reports the totals.

pub mod batch;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod descriptor;
pub mod discounts;
pub mod logging;
pub mod lookup;
pub mod markup;
pub mod money;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod promotions;
pub mod report;
pub mod service;
