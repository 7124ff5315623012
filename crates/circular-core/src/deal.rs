use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Size recorded when neither the item markup nor the product name carries one.
pub const DEFAULT_SIZE: &str = "each";

/// Length of a circular's validity window, in days.
const VALIDITY_DAYS: u64 = 7;

/// Closed set of downstream grouping labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Produce,
    Protein,
    Dairy,
    Household,
    Pantry,
    Snacks,
    Beverages,
    Other,
}

impl Category {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Produce => "produce",
            Category::Protein => "protein",
            Category::Dairy => "dairy",
            Category::Household => "household",
            Category::Pantry => "pantry",
            Category::Snacks => "snacks",
            Category::Beverages => "beverages",
            Category::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `[start, end]` dates a scraped circular is considered valid for.
///
/// Computed once per batch so every record in a run shares the same window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidityWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl ValidityWindow {
    /// Window running from `today` through `today + 7 days`.
    #[must_use]
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            start: today,
            end: today + Days::new(VALIDITY_DAYS),
        }
    }

    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("{field} must be non-empty")]
    EmptyField { field: &'static str },

    #[error("price must be positive after rounding, got {0}")]
    NonPositivePrice(Decimal),
}

/// One promotional product entry, shaped for the downstream ingestion schema.
///
/// Fields are private: a `DealRecord` can only be produced through
/// [`DealRecord::new`], which enforces that every field is populated and the
/// price is positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealRecord {
    retailer: String,
    product: String,
    size: String,
    /// Unit price, rounded to cents. Serialized as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
    start: NaiveDate,
    end: NaiveDate,
    category: Category,
}

impl DealRecord {
    /// Assembles a record, rounding `price` to two decimal places.
    ///
    /// This is the single rounding point of the pipeline; callers pass the
    /// unrounded unit price.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::EmptyField`] if `retailer`, `product` or `size`
    /// is blank, and [`RecordError::NonPositivePrice`] if the rounded price is
    /// not greater than zero.
    pub fn new(
        retailer: impl Into<String>,
        product: impl Into<String>,
        size: impl Into<String>,
        price: Decimal,
        window: ValidityWindow,
        category: Category,
    ) -> Result<Self, RecordError> {
        let retailer = non_empty("retailer", retailer.into())?;
        let product = non_empty("product", product.into())?;
        let size = non_empty("size", size.into())?;

        let price = price.round_dp(2);
        if price <= Decimal::ZERO {
            return Err(RecordError::NonPositivePrice(price));
        }

        Ok(Self {
            retailer,
            product,
            size,
            price,
            start: window.start(),
            end: window.end(),
            category,
        })
    }

    #[must_use]
    pub fn retailer(&self) -> &str {
        &self.retailer
    }

    #[must_use]
    pub fn product(&self) -> &str {
        &self.product
    }

    #[must_use]
    pub fn size(&self) -> &str {
        &self.size
    }

    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }

    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }
}

fn non_empty(field: &'static str, value: String) -> Result<String, RecordError> {
    if value.trim().is_empty() {
        Err(RecordError::EmptyField { field })
    } else {
        Ok(value)
    }
}
