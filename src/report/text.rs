//! Plain text report

use std::io;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

use crate::{
    lookup::ProductLookup,
    money::{PRICE_DP, PROMOTIONAL_PRICE_DP, to_display_scale},
    orders::Order,
    report::{ReportError, discount_percent},
};

/// Writes the plain text report for `order`.
///
/// The discount line is left out when there is no positive discount.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_order(
    out: &mut impl io::Write,
    order: &Order<'_>,
    products: &impl ProductLookup,
) -> Result<(), ReportError> {
    writeln!(out, "Client: {}", order.client().name)?;

    for line in order.lines() {
        writeln!(out, "Product: {}", products.find_product_name_by_id(line.product()))?;
        writeln!(out, "\tQuantity: {}", line.quantity())?;
        writeln!(
            out,
            "\tStandard Unit Price: {}",
            scaled(&line.standard_unit_price(), PRICE_DP)
        )?;
        writeln!(
            out,
            "\tPromotional Unit Price: {}",
            scaled(&line.promotional_unit_price(), PROMOTIONAL_PRICE_DP)
        )?;
        writeln!(out, "\tLine Total: {}", scaled(&line.line_total(), PRICE_DP))?;
    }

    writeln!(
        out,
        "Total Before Client Discounts: {}",
        scaled(&order.total_before_discounts(), PRICE_DP)
    )?;

    if let Some(percent) = discount_percent(order) {
        writeln!(
            out,
            "Additional Volume Discount at {percent}%: {}",
            scaled(&order.discount_amount(), PRICE_DP)
        )?;
    }

    writeln!(
        out,
        "Order Total Amount: {}",
        scaled(&order.order_total_amount(), PRICE_DP)
    )?;

    Ok(())
}

fn scaled(money: &Money<'_, Currency>, dp: u32) -> Decimal {
    to_display_scale(*money.amount(), dp)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::EUR;
    use testresult::TestResult;

    use crate::{
        clients::{Client, ClientId},
        lookup::MockProductLookup,
        orders::build_order,
        products::{Product, ProductId},
    };

    use super::*;

    fn products() -> MockProductLookup {
        let mut products = MockProductLookup::new();

        products
            .expect_find_product_name_by_id()
            .returning(|id| match id.0 {
                1 => "Danish Muffin".to_string(),
                3 => "Frenchy's Croissant".to_string(),
                _ => "Unknown Product".to_string(),
            });

        products
    }

    fn render(order: &Order<'_>) -> TestResult<String> {
        let mut out = Vec::new();

        write_order(&mut out, order, &products())?;

        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn renders_lines_and_discount() -> TestResult {
        let client = Client::new(
            ClientId(5),
            "MNO Vending",
            Decimal::from(5),
            Decimal::from(10),
            Decimal::from(15),
        );

        let muffin = Product::new(
            ProductId(1),
            Money::from_decimal(Decimal::new(1_000, 2), EUR),
            "10%".parse()?,
            "none".parse()?,
        );

        let croissant = Product::new(
            ProductId(3),
            Money::from_decimal(Decimal::new(100, 0), EUR),
            "0%".parse()?,
            "Buy 2, get 3rd free".parse()?,
        );

        let order = build_order(client, [(muffin, 2), (croissant, 3)], EUR)?;

        let expected = "\
Client: MNO Vending
Product: Danish Muffin
\tQuantity: 2
\tStandard Unit Price: 11.00
\tPromotional Unit Price: 11.00000
\tLine Total: 22.00
Product: Frenchy's Croissant
\tQuantity: 3
\tStandard Unit Price: 100.00
\tPromotional Unit Price: 66.66667
\tLine Total: 200.00
Total Before Client Discounts: 222.00
Additional Volume Discount at 5.00%: 11.10
Order Total Amount: 210.90
";

        assert_eq!(render(&order)?, expected);

        Ok(())
    }

    #[test]
    fn hides_discount_line_without_a_discount() -> TestResult {
        let client = Client::new(
            ClientId(2),
            "DEF Foods",
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        );

        let order = build_order(client, Vec::new(), EUR)?;

        let expected = "\
Client: DEF Foods
Total Before Client Discounts: 0.00
Order Total Amount: 0.00
";

        assert_eq!(render(&order)?, expected);

        Ok(())
    }
}
