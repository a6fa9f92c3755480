//! Price text parsing.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

/// Currency-formatted number: optional dollar sign, 1–3 integer digits with
/// optional comma grouping, then exactly two decimal places. The two-decimal
/// requirement keeps bare integers ("12 pack", "2024") from matching.
static PRICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$?(\d{1,3}(?:,\d{3})*\.\d{2})").expect("price pattern is valid")
});

/// Finds the first price-looking amount in `price_text`.
///
/// The first occurrence wins: retail listings commonly append a unit-price
/// fragment like `"$12.99 ($1.08 / Count)"`, and the headline price is the
/// one we want. Returns `None` for absent, empty, or unmatchable input —
/// a parse miss is never an error.
#[must_use]
pub fn parse_price(price_text: Option<&str>) -> Option<Decimal> {
    let text = price_text?;
    if text.is_empty() {
        return None;
    }
    let captures = PRICE_RE.captures(text)?;
    captures[1].replace(',', "").parse::<Decimal>().ok()
}

#[cfg(test)]
#[path = "price_test.rs"]
mod tests;
