//! Weekly circular extraction: locate deal tiles in page markup, turn each
//! into a [`circular_core::DealRecord`], and validate the result for ingestion.

pub mod batch;
pub mod builder;
pub mod category;
pub mod client;
pub mod error;
pub mod locator;
pub mod price;
pub mod sample;
pub mod size;
mod strategy;
pub mod validate;

pub use batch::{CircularScraper, ScrapeReport};
pub use builder::{DealBuilder, RawDealFields, SkipReason};
pub use category::classify;
pub use client::{circular_url, CircularClient};
pub use error::ScraperError;
pub use locator::{ItemLocator, ItemNode, LocatedItems, LocatorStrategy};
pub use price::parse_price;
pub use sample::SAMPLE_MARKUP;
pub use size::{extract_size, strip_size};
pub use validate::{to_json_values, validate_deals, ValidationError, REQUIRED_FIELDS};
