//! Cross-retailer merge and ranking.

use rust_decimal::Decimal;

use crate::types::{Offer, RetailerFailure, RetailerOutcome, RunResult};

/// Fallback reason when a retailer produced zero offers without reporting
/// a specific failure (containers matched, nothing parseable inside them).
const NO_OFFERS_REASON: &str = "no listings with a parseable price";

/// Merges per-retailer outcomes into a ranked [`RunResult`].
///
/// Offers are ordered ascending by unit price with absent unit prices
/// last, ties broken by ascending price. The sort is stable, so equal
/// offers keep their input order and repeated runs over identical inputs
/// are deterministic. Retailers with zero offers become failure records.
#[must_use]
pub fn aggregate(outcomes: Vec<RetailerOutcome>) -> RunResult {
    let mut offers = Vec::new();
    let mut failures = Vec::new();

    for outcome in outcomes {
        if outcome.offers.is_empty() {
            failures.push(RetailerFailure {
                retailer: outcome.retailer,
                reason: outcome
                    .failure_reason
                    .unwrap_or_else(|| NO_OFFERS_REASON.to_owned()),
            });
        } else {
            offers.extend(outcome.offers);
        }
    }

    offers.sort_by(|a, b| rank_key(a).cmp(&rank_key(b)));

    RunResult { offers, failures }
}

/// Absent unit prices rank behind every real amount.
fn rank_key(offer: &Offer) -> (Decimal, Decimal) {
    (offer.unit_price.unwrap_or(Decimal::MAX), offer.price)
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
