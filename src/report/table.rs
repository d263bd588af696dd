//! Table report

use std::io;

use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

use crate::{
    discounts::VolumeTier,
    lookup::ProductLookup,
    money::{PRICE_DP, PROMOTIONAL_PRICE_DP, to_display_scale},
    orders::Order,
    report::ReportError,
};

/// Writes `order` as a table of lines followed by a summary block.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_order(
    out: &mut impl io::Write,
    order: &Order<'_>,
    products: &impl ProductLookup,
) -> Result<(), ReportError> {
    let currency = order.currency().iso_alpha_code;

    writeln!(out, "Client: {} ({})", order.client().name, order.client().id)?;

    let mut builder = Builder::default();

    builder.push_record([
        "Product",
        "Quantity",
        "Standard Unit Price",
        "Promotional Unit Price",
        "Line Total",
    ]);

    for line in order.lines() {
        builder.push_record([
            products.find_product_name_by_id(line.product()),
            line.quantity().to_string(),
            to_display_scale(*line.standard_unit_price().amount(), PRICE_DP).to_string(),
            to_display_scale(*line.promotional_unit_price().amount(), PROMOTIONAL_PRICE_DP)
                .to_string(),
            to_display_scale(*line.line_total().amount(), PRICE_DP).to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(1..5), Alignment::right());

    writeln!(out, "{table}")?;

    let breakdown = order.discount_breakdown();
    let client = order.client();

    let volume_label = match breakdown.tier {
        VolumeTier::Base => "Volume discount".to_string(),
        VolumeTier::Above10k => format!("Volume discount above 10,000 ({}%)", client.volume_rate_10k),
        VolumeTier::Above30k => format!("Volume discount above 30,000 ({}%)", client.volume_rate_30k),
    };

    let mut summary = Builder::default();

    summary.push_record([
        "Total Before Client Discounts".to_string(),
        amount(*order.total_before_discounts().amount(), currency),
    ]);
    summary.push_record([
        format!("Basic discount ({}%)", client.basic_discount_rate),
        amount(*breakdown.basic.amount(), currency),
    ]);
    summary.push_record([volume_label, amount(*breakdown.volume.amount(), currency)]);
    summary.push_record([
        "Order Total Amount".to_string(),
        amount(*order.order_total_amount().amount(), currency),
    ]);

    let mut summary = summary.build();

    summary.with(Style::modern_rounded());
    summary.modify(Rows::last(), Color::BOLD);
    summary.modify(Columns::last(), Alignment::right());

    writeln!(out, "{summary}")?;

    Ok(())
}

fn amount(value: Decimal, currency: &str) -> String {
    format!("{} {currency}", to_display_scale(value, PRICE_DP))
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::EUR};
    use testresult::TestResult;

    use crate::{
        clients::{Client, ClientId},
        lookup::MockProductLookup,
        orders::build_order,
        products::{Product, ProductId},
    };

    use super::*;

    #[test]
    fn renders_lines_and_summary() -> TestResult {
        let client = Client::new(
            ClientId(4),
            "JKL Catering",
            Decimal::from(3),
            Decimal::from(1),
            Decimal::from(2),
        );

        let chips = Product::new(
            ProductId(4),
            Money::from_decimal(Decimal::new(60, 2), EUR),
            "1 EUR/unit".parse()?,
            "none".parse()?,
        );

        let order = build_order(client, [(chips, 10_000)], EUR)?;

        let mut products = MockProductLookup::new();

        products
            .expect_find_product_name_by_id()
            .returning(|_| "Crispy Chips".to_string());

        let mut out = Vec::new();

        write_order(&mut out, &order, &products)?;

        let report = String::from_utf8(out)?;

        assert!(report.starts_with("Client: JKL Catering (4)\n"));
        assert!(report.contains("Crispy Chips"));
        assert!(report.contains("10000"));
        assert!(report.contains("1.60000"));
        assert!(report.contains("16000.00 EUR"));
        assert!(report.contains("Basic discount (3%)"));
        assert!(report.contains("480.00 EUR"));
        assert!(report.contains("Volume discount above 10,000 (1%)"));
        assert!(report.contains("160.00 EUR"));
        assert!(report.contains("15360.00 EUR"));

        Ok(())
    }
}
