//! Order descriptors
//!
//! Textual orders of the form `"<clientId>,<productId>=<quantity>,..."`.
//! A descriptor is parsed as a whole: one malformed token rejects it.

use std::str::FromStr;

use thiserror::Error;

use crate::{clients::ClientId, products::ProductId};

/// Errors raised while parsing an order descriptor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DescriptorError {
    /// Nothing to parse.
    #[error("Order descriptor is empty")]
    Empty,

    /// The leading token is not a client id.
    #[error("Invalid client id: {0:?}")]
    InvalidClientId(String),

    /// A line token is not of the form `PRODUCT=QUANTITY`.
    #[error("Invalid order line {0:?}, expected PRODUCT=QUANTITY")]
    InvalidLine(String),

    /// The product side of a line is not a product id.
    #[error("Invalid product id in order line {0:?}")]
    InvalidProductId(String),

    /// The quantity side of a line is not a non-negative integer.
    #[error("Invalid quantity in order line {0:?}")]
    InvalidQuantity(String),
}

/// A requested quantity of one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptorLine {
    /// Requested product
    pub product: ProductId,

    /// Requested units
    pub quantity: u32,
}

/// A parsed order request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDescriptor {
    /// Ordering client
    pub client: ClientId,

    /// Requested lines, in input order
    pub lines: Vec<DescriptorLine>,
}

impl FromStr for OrderDescriptor {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(DescriptorError::Empty);
        }

        let mut tokens = s.split(',').map(str::trim);

        let client_token = tokens.next().ok_or(DescriptorError::Empty)?;
        let client = client_token
            .parse::<u32>()
            .map(ClientId)
            .map_err(|_err| DescriptorError::InvalidClientId(client_token.to_string()))?;

        let lines = tokens.map(parse_line).collect::<Result<Vec<_>, _>>()?;

        Ok(OrderDescriptor { client, lines })
    }
}

fn parse_line(token: &str) -> Result<DescriptorLine, DescriptorError> {
    let (product, quantity) = token
        .split_once('=')
        .filter(|(_, quantity)| !quantity.contains('='))
        .ok_or_else(|| DescriptorError::InvalidLine(token.to_string()))?;

    let product = product
        .trim()
        .parse::<u32>()
        .map(ProductId)
        .map_err(|_err| DescriptorError::InvalidProductId(token.to_string()))?;

    let quantity = quantity
        .trim()
        .parse::<u32>()
        .map_err(|_err| DescriptorError::InvalidQuantity(token.to_string()))?;

    Ok(DescriptorLine { product, quantity })
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_client_and_lines_in_order() -> TestResult {
        let descriptor = "5,1=1000,3=20000, 2 = 5".parse::<OrderDescriptor>()?;

        assert_eq!(descriptor.client, ClientId(5));
        assert_eq!(
            descriptor.lines,
            vec![
                DescriptorLine {
                    product: ProductId(1),
                    quantity: 1000,
                },
                DescriptorLine {
                    product: ProductId(3),
                    quantity: 20000,
                },
                DescriptorLine {
                    product: ProductId(2),
                    quantity: 5,
                },
            ]
        );

        Ok(())
    }

    #[test]
    fn parses_client_without_lines() -> TestResult {
        let descriptor = "7".parse::<OrderDescriptor>()?;

        assert_eq!(descriptor.client, ClientId(7));
        assert!(descriptor.lines.is_empty());

        Ok(())
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!("".parse::<OrderDescriptor>(), Err(DescriptorError::Empty));
        assert_eq!("   ".parse::<OrderDescriptor>(), Err(DescriptorError::Empty));
    }

    #[test]
    fn rejects_malformed_tokens() {
        let cases = [
            ("x,1=2", DescriptorError::InvalidClientId("x".to_string())),
            ("-1,1=2", DescriptorError::InvalidClientId("-1".to_string())),
            ("1,1", DescriptorError::InvalidLine("1".to_string())),
            ("1,,1=2", DescriptorError::InvalidLine(String::new())),
            ("1,1=2,", DescriptorError::InvalidLine(String::new())),
            ("1,1=2=3", DescriptorError::InvalidLine("1=2=3".to_string())),
            ("1,a=2", DescriptorError::InvalidProductId("a=2".to_string())),
            ("1,1=x", DescriptorError::InvalidQuantity("1=x".to_string())),
            ("1,1=-3", DescriptorError::InvalidQuantity("1=-3".to_string())),
            ("1,1=", DescriptorError::InvalidQuantity("1=".to_string())),
        ];

        for (input, expected) in cases {
            assert_eq!(
                input.parse::<OrderDescriptor>(),
                Err(expected),
                "unexpected result for {input:?}"
            );
        }
    }
}
