//! Schema check for the ingestion JSON before it is persisted.
//!
//! Runs on the serialized form rather than on [`DealRecord`] so that what is
//! checked is exactly what would be written.

use chrono::NaiveDate;
use circular_core::DealRecord;
use serde_json::Value;
use thiserror::Error;

/// Keys every output object must carry.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "retailer", "product", "size", "price", "start", "end", "category",
];

const STRING_FIELDS: [&str; 4] = ["retailer", "product", "size", "category"];
const DATE_FIELDS: [&str; 2] = ["start", "end"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// First schema violation found; `index` is 1-based.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("deal {index}: {field} {reason}")]
pub struct ValidationError {
    pub index: usize,
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    fn new(index: usize, field: &str, reason: impl Into<String>) -> Self {
        Self {
            index,
            field: field.to_owned(),
            reason: reason.into(),
        }
    }
}

/// Checks records in order and stops at the first violation.
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first record that is not an
/// object, lacks a required key, or carries a value of the wrong type or
/// date format.
pub fn validate_deals(deals: &[Value]) -> Result<(), ValidationError> {
    for (i, deal) in deals.iter().enumerate() {
        validate_deal(i + 1, deal)?;
    }
    tracing::debug!(count = deals.len(), "all deals valid");
    Ok(())
}

fn validate_deal(index: usize, deal: &Value) -> Result<(), ValidationError> {
    let Some(object) = deal.as_object() else {
        return Err(ValidationError::new(index, "record", "must be a JSON object"));
    };

    if let Some(missing) = REQUIRED_FIELDS.iter().find(|f| !object.contains_key(**f)) {
        return Err(ValidationError::new(index, missing, "is missing"));
    }

    if !object["price"].is_number() {
        return Err(ValidationError::new(index, "price", "must be a number"));
    }

    for field in STRING_FIELDS {
        if !object[field].is_string() {
            return Err(ValidationError::new(index, field, "must be a string"));
        }
    }

    for field in DATE_FIELDS {
        let parsed = object[field]
            .as_str()
            .map(|s| NaiveDate::parse_from_str(s, DATE_FORMAT));
        match parsed {
            Some(Ok(_)) => {}
            Some(Err(_)) => {
                return Err(ValidationError::new(
                    index,
                    field,
                    format!("is not a {DATE_FORMAT} date: {}", object[field]),
                ));
            }
            None => return Err(ValidationError::new(index, field, "must be a string")),
        }
    }

    Ok(())
}

/// Serializes records into the JSON values that get validated and written.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if a record fails to serialize.
pub fn to_json_values(deals: &[DealRecord]) -> Result<Vec<Value>, serde_json::Error> {
    deals.iter().map(serde_json::to_value).collect()
}
