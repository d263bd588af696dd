//! Integration tests pricing orders against the sample catalog.
//!
//! Client 1 (ABC Distribution) ordering 10,000 muffins, 20,000 cup cakes and
//! 5,000 croissants:
//!
//! 1. Danish Muffin: 0.52 + 80% = 0.94, no promotion, line total 9,400.00
//! 2. Granny's Cup Cake: 0.38 + 120% = 0.84, 30% off = 0.58800, line total 11,760.00
//! 3. Frenchy's Croissant: 0.41 + 0.90 = 1.31, buy 2 get 3rd free
//!    - 1,666 groups of 3 plus 2 units, so 3,334 units are billed
//!    - 1.31 * 3,334 / 5,000 = 0.87351, line total 4,367.55
//!
//! Total before discounts: 25,527.55, above 10,000 so the 0% volume rate
//! applies on top of the 5% basic rate. Discount 1,276.38, total 24,251.17.

use rust_decimal::Decimal;
use rusty_money::{
    Money,
    iso::{Currency, EUR},
};
use testresult::TestResult;

use tally::{
    catalog::Catalog,
    clients::ClientId,
    lookup::ClientLookup,
    orders::OrderError,
    products::{ProductError, ProductId},
    promotions::PromotionError,
    report::{ReportFormat, write_order},
    service::OrderService,
};

fn catalog() -> TestResult<Catalog> {
    Ok(Catalog::from_path(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/fixtures/catalog.yml"
    ))?)
}

fn eur(amount: &str) -> TestResult<Money<'static, Currency>> {
    Ok(Money::from_decimal(amount.parse::<Decimal>()?, EUR))
}

#[test]
fn prices_a_mixed_order() -> TestResult {
    let catalog = catalog()?;
    let service = OrderService::new(&catalog, &catalog, catalog.currency());

    let order = service
        .process_order("1,1=10000,2=20000,3=5000")?
        .ok_or("client 1 should exist")?;

    let promotional_prices = order
        .lines()
        .iter()
        .map(|line| *line.promotional_unit_price().amount())
        .collect::<Vec<_>>();

    assert_eq!(
        promotional_prices,
        vec![
            Decimal::new(94, 2),
            Decimal::new(58_800, 5),
            Decimal::new(87_351, 5)
        ]
    );
    assert_eq!(order.total_before_discounts(), eur("25527.55")?);
    assert_eq!(order.discount_amount(), eur("1276.38")?);
    assert_eq!(order.order_total_amount(), eur("24251.17")?);

    Ok(())
}

#[test]
fn applies_the_top_volume_tier() -> TestResult {
    let catalog = catalog()?;
    let service = OrderService::new(&catalog, &catalog, catalog.currency());

    // 20,000 chips at 1.60 is 32,000, above 30,000: 0% basic plus 7% volume
    let order = service.process_order("5,4=20000")?.ok_or("client 5 should exist")?;

    assert_eq!(order.discount_amount(), eur("2240.00")?);
    assert_eq!(order.order_total_amount(), eur("29760.00")?);

    Ok(())
}

#[test]
fn writes_the_text_report() -> TestResult {
    let catalog = catalog()?;
    let service = OrderService::new(&catalog, &catalog, catalog.currency());

    let order = service.process_order("2,3=7,4=3")?.ok_or("client 2 should exist")?;

    let mut out = Vec::new();

    write_order(&mut out, ReportFormat::Text, &order, &catalog)?;

    let expected = "\
Client: DEF Foods
Product: Frenchy's Croissant
\tQuantity: 7
\tStandard Unit Price: 1.31
\tPromotional Unit Price: 0.93571
\tLine Total: 6.55
Product: Crispy Chips
\tQuantity: 3
\tStandard Unit Price: 1.60
\tPromotional Unit Price: 1.60000
\tLine Total: 4.80
Total Before Client Discounts: 11.35
Additional Volume Discount at 3.96%: 0.45
Order Total Amount: 10.90
";

    assert_eq!(String::from_utf8(out)?, expected);

    Ok(())
}

#[test]
fn unknown_client_produces_no_order() -> TestResult {
    let catalog = catalog()?;
    let service = OrderService::new(&catalog, &catalog, catalog.currency());

    assert!(catalog.find_client_by_id(ClientId(9)).is_none());
    assert!(service.process_order("9,1=5")?.is_none());

    Ok(())
}

#[test]
fn unknown_products_are_left_off_the_order() -> TestResult {
    let catalog = catalog()?;
    let service = OrderService::new(&catalog, &catalog, catalog.currency());

    let order = service.process_order("1,42=3,4=1")?.ok_or("client 1 should exist")?;

    let products = order.lines().iter().map(|line| line.product()).collect::<Vec<_>>();

    assert_eq!(products, vec![ProductId(4)]);
    assert_eq!(order.total_before_discounts(), eur("1.60")?);

    Ok(())
}

#[test]
fn unknown_promotions_fail_the_order() -> TestResult {
    let catalog = Catalog::from_yaml_str(
        "currency: EUR
clients:
  1:
    name: ABC Distribution
    basic_discount: \"5%\"
products:
  1:
    name: Mystery Box
    unit_cost: 1.00 EUR
    markup: 10%
    promotion: Buy one, get a hug
  2:
    name: Plain Box
    unit_cost: 1.00 EUR
    markup: 10%
",
    )?;
    let service = OrderService::new(&catalog, &catalog, catalog.currency());

    let result = service.process_order("1,1=2");

    assert!(matches!(
        result,
        Err(OrderError::Product(ProductError::Promotion(
            ProductId(1),
            PromotionError::Unknown(_)
        )))
    ));

    // The catalog still loads, and other products can be ordered
    let order = service.process_order("1,2=2")?.ok_or("expected an order")?;

    assert_eq!(order.total_before_discounts(), eur("2.20")?);

    Ok(())
}

#[test]
fn malformed_descriptors_fail_before_pricing() -> TestResult {
    let catalog = catalog()?;
    let service = OrderService::new(&catalog, &catalog, catalog.currency());

    for input in ["", "x,1=2", "1,1=x", "1,1", "1,,1=2", "1,1=-2"] {
        assert!(
            matches!(service.process_order(input), Err(OrderError::Descriptor(_))),
            "{input:?} should be rejected"
        );
    }

    Ok(())
}
