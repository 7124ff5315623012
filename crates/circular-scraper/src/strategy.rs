//! Compiled form of the selector strategy lists in [`circular_core::SelectorTable`].

use scraper::Selector;

use crate::error::ScraperError;

/// One CSS selector strategy, kept alongside its source text for logging.
#[derive(Debug, Clone)]
pub(crate) struct SelectorStrategy {
    pub(crate) css: String,
    pub(crate) selector: Selector,
}

/// Compiles an ordered selector list, preserving order.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidSelector`] naming the first selector that
/// does not parse.
pub(crate) fn compile_strategies(
    field: &'static str,
    selectors: &[String],
) -> Result<Vec<SelectorStrategy>, ScraperError> {
    selectors
        .iter()
        .map(|css| {
            Selector::parse(css)
                .map(|selector| SelectorStrategy {
                    css: css.clone(),
                    selector,
                })
                .map_err(|e| ScraperError::InvalidSelector {
                    field,
                    selector: css.clone(),
                    reason: e.to_string(),
                })
        })
        .collect()
}
