//! Free-text price parsing for circular tiles.
//!
//! Circulars print prices as `"$3.99"`, `"3.99"`, `"$1.99 ea"` or multi-buy
//! offers like `"2 for $5"`. Multi-buy offers are converted to a unit price.
//! Nothing is rounded here; [`circular_core::DealRecord::new`] rounds once at
//! assembly.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

// ASCII digits only: `\d` also matches other scripts' digits, which
// `Decimal::from_str` rejects.
static MULTI_BUY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\s*for\s*\$?([0-9]+\.?[0-9]*)").expect("valid regex")
});
static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?([0-9]+\.?[0-9]*)").expect("valid regex"));

/// Parses a unit price out of `text`.
///
/// Returns [`Decimal::ZERO`] when no price can be read, which callers treat
/// as a reason to skip the item. The result is never negative.
#[must_use]
pub fn parse_price(text: &str) -> Decimal {
    if let Some(caps) = MULTI_BUY_RE.captures(text) {
        let quantity = caps[1].parse::<u64>().ok().filter(|q| *q > 0);
        let total = parse_amount(&caps[2]);
        return match (quantity, total) {
            (Some(quantity), Some(total)) => total
                .checked_div(Decimal::from(quantity))
                .unwrap_or(Decimal::ZERO),
            _ => Decimal::ZERO,
        };
    }

    AMOUNT_RE
        .captures(text)
        .and_then(|caps| parse_amount(&caps[1]))
        .unwrap_or(Decimal::ZERO)
}

/// `"5."` is a legal regex match but not a legal decimal literal.
fn parse_amount(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim_end_matches('.')).ok()
}
