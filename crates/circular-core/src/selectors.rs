//! Ordered CSS selector strategies for locating circular items and their fields.
//!
//! Each list is tried front to back and the first strategy producing a
//! non-blank result wins, so order encodes priority: exact test-id attributes
//! first, then known class names, then broad substring matches.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorTable {
    pub item_container: Vec<String>,
    pub product_name: Vec<String>,
    pub price: Vec<String>,
    pub size: Vec<String>,
}

impl Default for SelectorTable {
    fn default() -> Self {
        Self {
            item_container: to_owned_list(&[
                r#"[data-testid="circular-item"]"#,
                ".CircularItemCard",
                ".product-card",
                ".circular-item",
                ".deal-card",
                r#"[class*="CircularItem"]"#,
            ]),
            product_name: to_owned_list(&[
                r#"[data-testid="product-name"]"#,
                ".product-name",
                ".product-title",
                "h3",
                "h4",
                r#"[class*="title"]"#,
                r#"[class*="name"]"#,
            ]),
            price: to_owned_list(&[
                r#"[data-testid="price"]"#,
                ".price",
                ".sale-price",
                ".current-price",
                r#"[class*="price"]"#,
            ]),
            size: to_owned_list(&[
                r#"[data-testid="size"]"#,
                ".size",
                ".unit",
                ".quantity",
                r#"[class*="size"]"#,
                r#"[class*="unit"]"#,
            ]),
        }
    }
}

fn to_owned_list(selectors: &[&str]) -> Vec<String> {
    selectors.iter().map(|s| (*s).to_string()).collect()
}

/// Load a selector table from a YAML file with the four strategy lists.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or has an empty
/// or blank strategy list.
pub fn load_selector_table(path: &Path) -> Result<SelectorTable, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SelectorsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let table: SelectorTable = serde_yaml::from_str(&content)?;

    validate_selector_table(&table)?;

    Ok(table)
}

fn validate_selector_table(table: &SelectorTable) -> Result<(), ConfigError> {
    let lists = [
        ("item_container", &table.item_container),
        ("product_name", &table.product_name),
        ("price", &table.price),
        ("size", &table.size),
    ];

    for (name, list) in lists {
        if list.is_empty() {
            return Err(ConfigError::Validation(format!(
                "'{name}' must list at least one selector"
            )));
        }
        if list.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "'{name}' contains a blank selector"
            )));
        }
    }

    Ok(())
}
