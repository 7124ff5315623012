//! Keyword classification of product names into [`Category`] labels.
//!
//! Keyword sets overlap ("organic" is produce, but "organic chicken" is
//! protein), so the table is checked in a fixed priority order and the first
//! set with a hit wins. The order and the keyword lists must stay as they are:
//! changing either reclassifies historical data.

use circular_core::Category;

/// Keyword sets in priority order. Matching is lowercase substring.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Protein,
        &[
            "chicken", "beef", "pork", "fish", "salmon", "turkey", "meat", "steak", "sausage",
            "bacon", "ham", "ribs", "ground beef", "tuna",
        ],
    ),
    (
        Category::Produce,
        &[
            "apple", "banana", "grape", "orange", "avocado", "berry", "lettuce", "tomato",
            "onion", "potato", "carrot", "celery", "pepper", "fruit", "vegetable", "produce",
            "organic", "broccoli", "cauliflower",
        ],
    ),
    (
        Category::Dairy,
        &[
            "milk", "cheese", "yogurt", "butter", "cream", "egg", "dairy", "cheddar",
            "mozzarella", "sour cream", "whipped cream",
        ],
    ),
    (
        Category::Household,
        &[
            "soap", "detergent", "cleaner", "paper", "tissue", "towel", "tide", "dawn", "bleach",
            "wipes", "trash bag", "toilet paper",
        ],
    ),
    (
        Category::Pantry,
        &[
            "bread", "pasta", "rice", "cereal", "beans", "flour", "sugar", "oil", "can",
            "canned", "sauce", "grain", "soup",
        ],
    ),
    (
        Category::Snacks,
        &[
            "chip", "cookie", "cracker", "candy", "snack", "popcorn", "pretzel", "nut",
            "granola", "bar",
        ],
    ),
    (
        Category::Beverages,
        &[
            "soda", "juice", "water", "coffee", "tea", "beer", "wine", "drink", "beverage",
            "cola", "pepsi", "coke",
        ],
    ),
];

/// Maps a product name to exactly one category; [`Category::Other`] when no
/// keyword matches.
#[must_use]
pub fn classify(product: &str) -> Category {
    let lower = product.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map_or(Category::Other, |(category, _)| *category)
}

#[cfg(test)]
#[path = "category_test.rs"]
mod tests;
