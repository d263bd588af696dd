//! Clients

use std::fmt;

use rust_decimal::Decimal;

/// Client identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientId(pub u32);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Client and their discount schedule.
///
/// Rates are percentage points: `5` means 5%.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    /// Client identifier
    pub id: ClientId,

    /// Display name
    pub name: String,

    /// Discount applied to every order
    pub basic_discount_rate: Decimal,

    /// Additional discount for orders above 10,000
    pub volume_rate_10k: Decimal,

    /// Additional discount for orders above 30,000, replacing the 10,000 rate
    pub volume_rate_30k: Decimal,
}

impl Client {
    /// Create a new client.
    pub fn new(
        id: ClientId,
        name: impl Into<String>,
        basic_discount_rate: Decimal,
        volume_rate_10k: Decimal,
        volume_rate_30k: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            basic_discount_rate,
            volume_rate_10k,
            volume_rate_30k,
        }
    }
}
