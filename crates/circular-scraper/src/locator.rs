//! Finds the repeating deal tiles on a circular page.
//!
//! Tries the configured container selectors in priority order and returns
//! the matches of the first one that hits anything. Results are never merged
//! across strategies, even when the winning selector undercounts. When no
//! selector matches, falls back to scanning `class` attributes for generic
//! product-ish keywords and accepts the first keyword that looks like a
//! repeating list.

use std::fmt;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::ScraperError;
use crate::strategy::{compile_strategies, SelectorStrategy};

/// One candidate deal element, borrowed from the parsed document.
pub type ItemNode<'a> = ElementRef<'a>;

/// Class-attribute keywords for the structural fallback, in priority order.
const FALLBACK_CLASS_KEYWORDS: [&str; 6] = ["product", "item", "card", "deal", "circular", "offer"];

/// A keyword must match more than this many elements to count as a list.
const FALLBACK_MIN_MATCHES: usize = 5;

static CLASSED_ELEMENTS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[class]").expect("valid selector"));

/// Which strategy produced the located items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocatorStrategy {
    /// A configured container selector.
    Selector(String),
    /// The class-keyword fallback.
    ClassKeyword(&'static str),
}

impl fmt::Display for LocatorStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocatorStrategy::Selector(css) => write!(f, "selector {css}"),
            LocatorStrategy::ClassKeyword(kw) => write!(f, "class*='{kw}'"),
        }
    }
}

/// Item nodes in document order plus the strategy that found them.
#[derive(Debug)]
pub struct LocatedItems<'a> {
    pub items: Vec<ItemNode<'a>>,
    /// `None` when nothing was found.
    pub strategy: Option<LocatorStrategy>,
}

impl LocatedItems<'_> {
    fn none() -> Self {
        Self {
            items: Vec::new(),
            strategy: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ItemLocator {
    containers: Vec<SelectorStrategy>,
}

impl ItemLocator {
    /// Compiles the container selector list.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidSelector`] if a selector does not parse.
    pub fn new(container_selectors: &[String]) -> Result<Self, ScraperError> {
        Ok(Self {
            containers: compile_strategies("item_container", container_selectors)?,
        })
    }

    /// Locates candidate deal items. An empty result is a valid outcome, not
    /// an error.
    #[must_use]
    pub fn locate<'a>(&self, document: &'a Html) -> LocatedItems<'a> {
        for strategy in &self.containers {
            let items: Vec<ItemNode<'a>> = document.select(&strategy.selector).collect();
            if !items.is_empty() {
                tracing::info!(
                    selector = %strategy.css,
                    count = items.len(),
                    "items found with container selector"
                );
                return LocatedItems {
                    items,
                    strategy: Some(LocatorStrategy::Selector(strategy.css.clone())),
                };
            }
        }

        tracing::warn!("known container selectors failed; analyzing page structure");
        locate_by_class_keyword(document)
    }
}

fn locate_by_class_keyword(document: &Html) -> LocatedItems<'_> {
    let classed: Vec<(ItemNode<'_>, String)> = document
        .select(&CLASSED_ELEMENTS)
        .filter_map(|el| el.value().attr("class").map(|c| (el, c.to_lowercase())))
        .collect();

    for keyword in FALLBACK_CLASS_KEYWORDS {
        let items: Vec<ItemNode<'_>> = classed
            .iter()
            .filter(|(_, class)| class.contains(keyword))
            .map(|(el, _)| *el)
            .collect();

        if items.len() > FALLBACK_MIN_MATCHES {
            tracing::info!(
                keyword,
                count = items.len(),
                "items found by class keyword fallback"
            );
            return LocatedItems {
                items,
                strategy: Some(LocatorStrategy::ClassKeyword(keyword)),
            };
        }
        tracing::debug!(keyword, count = items.len(), "class keyword below threshold");
    }

    tracing::error!("could not identify deal items");
    LocatedItems::none()
}

#[cfg(test)]
#[path = "locator_test.rs"]
mod tests;
