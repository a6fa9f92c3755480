//! Data types flowing through the comparison pipeline.

use rust_decimal::Decimal;

/// Display cap for product names; search-result titles routinely run to
/// hundreds of characters of keyword stuffing.
pub const MAX_PRODUCT_NAME_CHARS: usize = 50;

/// Unparsed text pulled out of one item container. Either field may be
/// absent when the retailer's markup has drifted away from the configured
/// selectors. Discarded once parsed into an [`Offer`] or rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawListing {
    pub name_text: Option<String>,
    pub price_text: Option<String>,
}

/// One fully parsed, normalized result for a single retailer.
///
/// An `Offer` is only ever created from a listing with a successfully
/// parsed price. `unit_price`, when present, is the price divided by an
/// inferred quantity of at least 1, so `unit_price <= price` holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    pub retailer: String,
    /// Truncated to [`MAX_PRODUCT_NAME_CHARS`] characters.
    pub product_name: String,
    pub price: Decimal,
    /// Per-unit price, or `None` when no quantity could be inferred from
    /// the product name.
    pub unit_price: Option<Decimal>,
    /// Human-readable unit description ("per can", "per liter") or the
    /// "not applicable" sentinel.
    pub unit_label: String,
}

impl Offer {
    #[must_use]
    pub fn new(
        retailer: &str,
        product_name: &str,
        price: Decimal,
        unit_price: Option<Decimal>,
        unit_label: impl Into<String>,
    ) -> Self {
        Self {
            retailer: retailer.to_owned(),
            product_name: product_name.chars().take(MAX_PRODUCT_NAME_CHARS).collect(),
            price,
            unit_price,
            unit_label: unit_label.into(),
        }
    }
}

/// Everything one retailer contributed to a run. Produced by
/// [`crate::pipeline::scrape_retailer`]; an empty `offers` list with a
/// `failure_reason` is the normal shape for a retailer that timed out or
/// whose selectors missed.
#[derive(Debug)]
pub struct RetailerOutcome {
    pub retailer: String,
    pub offers: Vec<Offer>,
    pub failure_reason: Option<String>,
}

/// Failure record for a retailer that produced zero offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetailerFailure {
    pub retailer: String,
    pub reason: String,
}

/// Ranked output of one comparison run.
#[derive(Debug)]
pub struct RunResult {
    /// Ascending by unit price (absent sorts last), ties broken by price.
    pub offers: Vec<Offer>,
    pub failures: Vec<RetailerFailure>,
}

impl RunResult {
    /// `true` when every retailer failed outright, as opposed to the
    /// retailers being reachable but yielding zero usable listings.
    #[must_use]
    pub fn all_retailers_failed(&self) -> bool {
        self.offers.is_empty() && !self.failures.is_empty()
    }
}
