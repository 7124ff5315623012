//! Runs the locator and record builder over a whole circular document.

use chrono::Local;
use circular_core::{DealRecord, SelectorTable, ValidityWindow};
use scraper::Html;

use crate::builder::DealBuilder;
use crate::error::ScraperError;
use crate::locator::{ItemLocator, LocatorStrategy};

/// Outcome of one batch extraction.
#[derive(Debug, Clone)]
pub struct ScrapeReport {
    /// Records in document order.
    pub records: Vec<DealRecord>,
    /// Item nodes the locator returned.
    pub items_found: usize,
    /// Items that produced no record.
    pub skipped: usize,
    /// Strategy the locator used; `None` when no items were found.
    pub strategy: Option<LocatorStrategy>,
}

impl ScrapeReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Extracts deal records from circular markup with a fixed selector table.
#[derive(Debug, Clone)]
pub struct CircularScraper {
    locator: ItemLocator,
    builder: DealBuilder,
}

impl CircularScraper {
    /// Compiles every selector list in `table`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidSelector`] if any selector does not parse.
    pub fn new(retailer: impl Into<String>, table: &SelectorTable) -> Result<Self, ScraperError> {
        Ok(Self {
            locator: ItemLocator::new(&table.item_container)?,
            builder: DealBuilder::new(retailer, table)?,
        })
    }

    /// Extracts every deal from `markup`, stamping each with `window`.
    ///
    /// Items that cannot be turned into a record are logged and counted,
    /// never fatal. An empty report is a valid result.
    #[must_use]
    pub fn scrape_markup(&self, markup: &str, window: ValidityWindow) -> ScrapeReport {
        let document = Html::parse_document(markup);
        let located = self.locator.locate(&document);
        let items_found = located.items.len();

        let mut records = Vec::with_capacity(items_found);
        let mut skipped = 0usize;
        for (ordinal, item) in located.items.into_iter().enumerate() {
            let ordinal = ordinal + 1;
            match self.builder.build(item, window) {
                Ok(deal) => {
                    tracing::info!(
                        ordinal,
                        product = deal.product(),
                        price = %deal.price(),
                        "✓ extracted deal"
                    );
                    records.push(deal);
                }
                Err(reason) => {
                    tracing::info!(ordinal, %reason, "skipped item");
                    skipped += 1;
                }
            }
        }

        tracing::info!(
            items_found,
            extracted = records.len(),
            skipped,
            start = %window.start(),
            end = %window.end(),
            "circular extraction complete"
        );

        ScrapeReport {
            records,
            items_found,
            skipped,
            strategy: located.strategy,
        }
    }

    /// [`Self::scrape_markup`] with a window starting today in local time.
    #[must_use]
    pub fn scrape_markup_today(&self, markup: &str) -> ScrapeReport {
        self.scrape_markup(markup, ValidityWindow::starting(Local::now().date_naive()))
    }
}
