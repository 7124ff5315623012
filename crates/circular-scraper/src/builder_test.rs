use chrono::NaiveDate;
use circular_core::Category;
use scraper::{Html, Selector};

use super::*;

fn builder() -> DealBuilder {
    DealBuilder::new("Smart & Final", &SelectorTable::default()).expect("default selectors compile")
}

fn window() -> ValidityWindow {
    ValidityWindow::starting(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
}

fn fields(product: Option<&str>, price: Option<&str>, size: Option<&str>) -> RawDealFields {
    RawDealFields {
        product: product.map(str::to_owned),
        price: price.map(str::to_owned),
        size: size.map(str::to_owned),
    }
}

/// Parses `markup` and builds a record from its first `.tile` element.
fn build_from_markup(markup: &str) -> Result<DealRecord, SkipReason> {
    let html = Html::parse_document(markup);
    let tile = Selector::parse(".tile").unwrap();
    let item = html.select(&tile).next().expect("fixture has a .tile");
    builder().build(item, window())
}

// -----------------------------------------------------------------------
// assemble
// -----------------------------------------------------------------------

#[test]
fn multi_buy_without_size_defaults_to_each() {
    let deal = builder()
        .assemble(fields(Some("Organic Avocados"), Some("2 for $10"), None), window())
        .unwrap();
    assert_eq!(deal.size(), "each");
    assert_eq!(deal.price(), Decimal::new(500, 2));
    assert_eq!(deal.category(), Category::Produce);
}

#[test]
fn size_is_derived_from_product_name_and_stripped() {
    let deal = builder()
        .assemble(
            fields(Some("Lay's Potato Chips 8 oz Bag"), Some("$2.50"), None),
            window(),
        )
        .unwrap();
    assert_eq!(deal.size(), "8 oz");
    assert_eq!(deal.product(), "Lay's Potato Chips Bag");
}

#[test]
fn explicit_size_leaves_product_name_alone() {
    let deal = builder()
        .assemble(
            fields(Some("Coca-Cola 2 liter"), Some("$1.99"), Some("2 L bottle")),
            window(),
        )
        .unwrap();
    assert_eq!(deal.size(), "2 L bottle");
    assert_eq!(deal.product(), "Coca-Cola 2 liter");
}

#[test]
fn blank_size_falls_back_to_product_name() {
    let deal = builder()
        .assemble(
            fields(Some("Ground Beef per lb"), Some("$3.99"), Some("   ")),
            window(),
        )
        .unwrap();
    assert_eq!(deal.size(), "per lb");
    assert_eq!(deal.product(), "Ground Beef");
}

#[test]
fn category_uses_size_stripped_name() {
    // "tea" must still be present after "20 ct" is stripped.
    let deal = builder()
        .assemble(fields(Some("Green Tea 20 ct"), Some("$4"), None), window())
        .unwrap();
    assert_eq!(deal.category(), Category::Beverages);
    assert_eq!(deal.product(), "Green Tea");
}

#[test]
fn product_name_is_cleaned() {
    let deal = builder()
        .assemble(
            fields(Some("-- Tide   Laundry\n Detergent, ."), Some("$11.99"), None),
            window(),
        )
        .unwrap();
    assert_eq!(deal.product(), "Tide Laundry Detergent");
}

#[test]
fn price_is_rounded_once_at_assembly() {
    let deal = builder()
        .assemble(fields(Some("Greek Yogurt"), Some("3 for $5"), None), window())
        .unwrap();
    assert_eq!(deal.price(), Decimal::new(167, 2));
}

#[test]
fn record_carries_retailer_and_window() {
    let deal = builder()
        .assemble(fields(Some("Bananas"), Some("$0.59"), None), window())
        .unwrap();
    assert_eq!(deal.retailer(), "Smart & Final");
    assert_eq!(deal.start().to_string(), "2026-10-18");
    assert_eq!(deal.end().to_string(), "2026-10-25");
}

#[test]
fn missing_product_is_skipped() {
    let err = builder()
        .assemble(fields(None, Some("$1.00"), None), window())
        .unwrap_err();
    assert_eq!(err, SkipReason::MissingProduct);
}

#[test]
fn missing_price_is_skipped() {
    let err = builder()
        .assemble(fields(Some("Bananas"), None, None), window())
        .unwrap_err();
    assert_eq!(err, SkipReason::MissingPrice);
}

#[test]
fn unparseable_price_is_skipped() {
    let err = builder()
        .assemble(fields(Some("Bananas"), Some("See store"), None), window())
        .unwrap_err();
    assert_eq!(
        err,
        SkipReason::UnparseablePrice {
            text: "See store".to_string()
        }
    );
}

#[test]
fn zero_price_is_skipped() {
    let err = builder()
        .assemble(fields(Some("Bananas"), Some("$0.00"), None), window())
        .unwrap_err();
    assert!(matches!(err, SkipReason::UnparseablePrice { .. }));
}

#[test]
fn product_that_cleans_to_nothing_is_skipped() {
    let err = builder()
        .assemble(fields(Some("- , ."), Some("$1.00"), None), window())
        .unwrap_err();
    assert_eq!(
        err,
        SkipReason::InvalidRecord(RecordError::EmptyField { field: "product" })
    );
}

// -----------------------------------------------------------------------
// field extraction from markup
// -----------------------------------------------------------------------

#[test]
fn build_reads_fields_with_default_selectors() {
    let deal = build_from_markup(
        r#"<div class="tile">
             <h3 class="product-name">Tide Laundry Detergent</h3>
             <span class="price">2 for $10</span>
             <span class="size">100 oz</span>
           </div>"#,
    )
    .unwrap();
    assert_eq!(deal.product(), "Tide Laundry Detergent");
    assert_eq!(deal.price(), Decimal::from(5));
    assert_eq!(deal.size(), "100 oz");
    assert_eq!(deal.category(), Category::Household);
}

#[test]
fn test_id_strategy_beats_class_strategy() {
    let deal = build_from_markup(
        r#"<div class="tile">
             <span class="price">$9.99</span>
             <span data-testid="price">$4.99</span>
             <h4>Cheddar Block</h4>
           </div>"#,
    )
    .unwrap();
    assert_eq!(deal.price(), Decimal::new(499, 2));
    assert_eq!(deal.product(), "Cheddar Block");
}

#[test]
fn blank_strategy_falls_through_to_next() {
    let deal = build_from_markup(
        r#"<div class="tile">
             <span class="product-name">   </span>
             <div class="product-title">Whole Milk</div>
             <span class="sale-price">$3.49</span>
           </div>"#,
    )
    .unwrap();
    assert_eq!(deal.product(), "Whole Milk");
    assert_eq!(deal.price(), Decimal::new(349, 2));
}

#[test]
fn nested_text_nodes_are_trimmed_and_joined() {
    let fields = {
        let html = Html::parse_document(
            r#"<div class="tile">
                 <h3>Pepsi <em> 12 pack </em></h3>
                 <span class="price"> $<b>6</b>.99 </span>
               </div>"#,
        );
        let tile = Selector::parse(".tile").unwrap();
        let item = html.select(&tile).next().unwrap();
        builder().extract_fields(item)
    };
    assert_eq!(fields.product.as_deref(), Some("Pepsi12 pack"));
    assert_eq!(fields.price.as_deref(), Some("$6.99"));
    assert!(fields.size.is_none());
}

#[test]
fn item_without_name_element_is_skipped() {
    let err = build_from_markup(r#"<div class="tile"><span class="price">$1.00</span></div>"#)
        .unwrap_err();
    assert_eq!(err, SkipReason::MissingProduct);
}

#[test]
fn invalid_field_selector_is_rejected() {
    let mut table = SelectorTable::default();
    table.price.push("span[".to_string());
    let err = DealBuilder::new("Smart & Final", &table).unwrap_err();
    assert!(matches!(
        err,
        ScraperError::InvalidSelector { field: "price", .. }
    ));
}

#[test]
fn clean_product_name_collapses_and_trims() {
    assert_eq!(clean_product_name("  a \t b  "), "a b");
    assert_eq!(clean_product_name("...Salsa, -"), "Salsa");
}

#[test]
fn skip_reason_display() {
    assert_eq!(SkipReason::MissingProduct.to_string(), "missing product name");
    assert_eq!(
        SkipReason::UnparseablePrice {
            text: "TBD".to_string()
        }
        .to_string(),
        "unparseable price \"TBD\""
    );
}
