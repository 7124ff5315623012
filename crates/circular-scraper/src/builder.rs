//! Turns one located item node into a [`DealRecord`].
//!
//! Field text is pulled with the per-field selector strategies, then run
//! through the price parser, size extractor and category classifier. Any
//! item that cannot produce a complete record is reported as a
//! [`SkipReason`] instead of an error so the batch keeps going.

use std::fmt;
use std::sync::LazyLock;

use circular_core::{DealRecord, RecordError, SelectorTable, ValidityWindow, DEFAULT_SIZE};
use regex::Regex;
use rust_decimal::Decimal;

use crate::category::classify;
use crate::error::ScraperError;
use crate::locator::ItemNode;
use crate::price::parse_price;
use crate::size::{extract_size, strip_size};
use crate::strategy::{compile_strategies, SelectorStrategy};

static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Why an item produced no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No product-name strategy yielded text.
    MissingProduct,
    /// No price strategy yielded text.
    MissingPrice,
    /// Price text was present but did not parse to a positive amount.
    UnparseablePrice { text: String },
    /// Fields were present but the assembled record was rejected.
    InvalidRecord(RecordError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingProduct => f.write_str("missing product name"),
            SkipReason::MissingPrice => f.write_str("missing price"),
            SkipReason::UnparseablePrice { text } => write!(f, "unparseable price {text:?}"),
            SkipReason::InvalidRecord(err) => write!(f, "invalid record: {err}"),
        }
    }
}

/// Field text as found in the markup, before any interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDealFields {
    pub product: Option<String>,
    pub price: Option<String>,
    pub size: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DealBuilder {
    retailer: String,
    product_name: Vec<SelectorStrategy>,
    price: Vec<SelectorStrategy>,
    size: Vec<SelectorStrategy>,
}

impl DealBuilder {
    /// Compiles the per-field selector lists of `table`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidSelector`] if any field selector does
    /// not parse.
    pub fn new(retailer: impl Into<String>, table: &SelectorTable) -> Result<Self, ScraperError> {
        Ok(Self {
            retailer: retailer.into(),
            product_name: compile_strategies("product_name", &table.product_name)?,
            price: compile_strategies("price", &table.price)?,
            size: compile_strategies("size", &table.size)?,
        })
    }

    /// Reads the raw product, price and size text from an item node.
    #[must_use]
    pub fn extract_fields(&self, item: ItemNode<'_>) -> RawDealFields {
        RawDealFields {
            product: first_text(item, &self.product_name),
            price: first_text(item, &self.price),
            size: first_text(item, &self.size),
        }
    }

    /// Extracts and assembles a record from one item node.
    ///
    /// # Errors
    ///
    /// Returns the [`SkipReason`] when the item cannot yield a complete record.
    pub fn build(
        &self,
        item: ItemNode<'_>,
        window: ValidityWindow,
    ) -> Result<DealRecord, SkipReason> {
        self.assemble(self.extract_fields(item), window)
    }

    /// Interprets raw field text and assembles a record.
    ///
    /// # Errors
    ///
    /// Returns the [`SkipReason`] when a required field is missing or the
    /// price does not parse to a positive amount.
    pub fn assemble(
        &self,
        fields: RawDealFields,
        window: ValidityWindow,
    ) -> Result<DealRecord, SkipReason> {
        let mut product = non_blank(fields.product).ok_or(SkipReason::MissingProduct)?;

        let price_text = non_blank(fields.price).ok_or(SkipReason::MissingPrice)?;
        let price = parse_price(&price_text);
        if price <= Decimal::ZERO {
            return Err(SkipReason::UnparseablePrice { text: price_text });
        }

        let size = match non_blank(fields.size) {
            Some(size) => size,
            None => {
                let derived = extract_size(&product).map(str::to_owned);
                match derived {
                    Some(token) => {
                        product = strip_size(&product, &token);
                        token
                    }
                    None => DEFAULT_SIZE.to_string(),
                }
            }
        };

        let category = classify(&product);
        let product = clean_product_name(&product);

        DealRecord::new(
            self.retailer.as_str(),
            product,
            size,
            price,
            window,
            category,
        )
        .map_err(SkipReason::InvalidRecord)
    }
}

/// Text of the first element matched by each strategy in turn; the first
/// non-blank result wins. Only the first match of a strategy is considered.
fn first_text(item: ItemNode<'_>, strategies: &[SelectorStrategy]) -> Option<String> {
    strategies.iter().find_map(|strategy| {
        let element = item.select(&strategy.selector).next()?;
        let text: String = element.text().map(str::trim).collect();
        (!text.is_empty()).then_some(text)
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Collapses whitespace runs and trims ` -,.` from both ends.
pub(crate) fn clean_product_name(product: &str) -> String {
    WHITESPACE_RUN_RE
        .replace_all(product, " ")
        .trim_matches(|c: char| matches!(c, ' ' | '-' | ',' | '.'))
        .to_string()
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod tests;
