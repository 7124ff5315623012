//! Quantity tokens embedded in product names (`"Chips 16 oz"`, `"Beef per lb"`).

use std::sync::LazyLock;

use regex::Regex;

/// Number + unit, e.g. `"16 oz"`, `"2.5lb"`, `"12 ct"`. Alternation order
/// matters: `lb` is tried before `lbs` and only wins when a word boundary
/// follows it.
static QUANTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b([0-9]+\.?[0-9]*\s*(?:oz|lb|lbs|g|kg|ml|l|liter|gallon|gal|ct|count|pk|pack))\b",
    )
    .expect("valid regex")
});
static PER_WEIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(per\s+lb|per\s+pound)\b").expect("valid regex"));

/// Finds the first size token in `text`, preserving its original casing.
#[must_use]
pub fn extract_size(text: &str) -> Option<&str> {
    [&*QUANTITY_RE, &*PER_WEIGHT_RE]
        .into_iter()
        .find_map(|re| re.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Removes the first case-insensitive occurrence of `token` and the
/// whitespace around it from `product`.
#[must_use]
pub fn strip_size(product: &str, token: &str) -> String {
    let pattern = format!(r"(?i)\s*{}\s*", regex::escape(token));
    match Regex::new(&pattern) {
        Ok(re) => re.replacen(product, 1, " ").trim().to_string(),
        Err(err) => {
            tracing::debug!(token, error = %err, "size token did not compile; leaving product as-is");
            product.trim().to_string()
        }
    }
}

#[cfg(test)]
#[path = "size_test.rs"]
mod tests;
