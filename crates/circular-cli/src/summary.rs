//! End-of-run statistics printed after the output file is written.

use std::fmt;

use circular_core::{Category, DealRecord};
use rust_decimal::Decimal;

const RULE_WIDTH: usize = 60;
const CHEAPEST_COUNT: usize = 3;
const PRODUCT_DISPLAY_CHARS: usize = 45;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) total: usize,
    /// Count per category, largest first; ties keep first-seen order.
    pub(crate) by_category: Vec<(Category, usize)>,
    pub(crate) min_price: Decimal,
    pub(crate) max_price: Decimal,
    /// `None` if the price total overflows.
    pub(crate) average_price: Option<Decimal>,
    /// `(price, product)` of the cheapest deals, cheapest first.
    pub(crate) cheapest: Vec<(Decimal, String)>,
}

impl Summary {
    /// Returns `None` for an empty slice.
    pub(crate) fn from_records(records: &[DealRecord]) -> Option<Self> {
        let first = records.first()?;

        let mut by_category: Vec<(Category, usize)> = Vec::new();
        for deal in records {
            match by_category.iter_mut().find(|(c, _)| *c == deal.category()) {
                Some((_, count)) => *count += 1,
                None => by_category.push((deal.category(), 1)),
            }
        }
        by_category.sort_by(|a, b| b.1.cmp(&a.1));

        let (min_price, max_price) = records
            .iter()
            .fold((first.price(), first.price()), |(lo, hi), d| {
                (lo.min(d.price()), hi.max(d.price()))
            });
        let average_price = records
            .iter()
            .try_fold(Decimal::ZERO, |sum, d| sum.checked_add(d.price()))
            .and_then(|sum| sum.checked_div(Decimal::from(records.len())))
            .map(|avg| avg.round_dp(2));

        let mut by_price: Vec<&DealRecord> = records.iter().collect();
        by_price.sort_by_key(|d| d.price());
        let cheapest = by_price
            .into_iter()
            .take(CHEAPEST_COUNT)
            .map(|d| (d.price(), d.product().chars().take(PRODUCT_DISPLAY_CHARS).collect()))
            .collect();

        Some(Self {
            total: records.len(),
            by_category,
            min_price,
            max_price,
            average_price,
            cheapest,
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "SUMMARY")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Total deals: {}", self.total)?;

        writeln!(f)?;
        writeln!(f, "By category:")?;
        for (category, count) in &self.by_category {
            writeln!(f, "  {:<15} {count:>3} deals", category.as_str())?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Price range: ${:.2} - ${:.2}",
            self.min_price, self.max_price
        )?;
        match self.average_price {
            Some(avg) => writeln!(f, "Average: ${avg:.2}")?,
            None => writeln!(f, "Average: n/a")?,
        }

        writeln!(f)?;
        writeln!(f, "Top {CHEAPEST_COUNT} cheapest deals:")?;
        for (price, product) in &self.cheapest {
            let price = format!("{price:.2}");
            writeln!(f, "  ${price:>6} - {product}")?;
        }
        Ok(())
    }
}
