//! Selector-driven listing extraction from rendered search-results markup.

use scraper::{ElementRef, Html, Selector};

use pricelens_core::retailers::Selectors;

use crate::error::ScrapeError;
use crate::types::RawListing;

/// What the extractor found on one page. `containers_matched` is kept
/// separate from the listing count so callers can tell "selector missed
/// entirely" apart from "containers matched but carried no usable text".
#[derive(Debug)]
pub struct Extraction {
    pub containers_matched: usize,
    pub listings: Vec<RawListing>,
}

/// Walks `html` with the retailer's selectors and yields raw listings from
/// the first `max_items` item containers in document order. The cap exists
/// because results pages list far more items than are relevant to the
/// query; entries past the first handful are mostly sponsored or adjacent
/// products.
///
/// A container in which neither the name nor the price selector matches is
/// skipped silently — selector drift on one card is expected, not an error.
/// A page with zero matching containers yields an empty `listings` vec;
/// the caller turns that into a per-retailer failure record.
///
/// # Errors
///
/// Returns [`ScrapeError::InvalidSelector`] when a configured selector
/// expression does not parse.
pub fn extract_listings(
    html: &str,
    selectors: &Selectors,
    max_items: usize,
) -> Result<Extraction, ScrapeError> {
    let container_sel = parse_selector(&selectors.item_container)?;
    let name_sel = parse_selector(&selectors.name)?;
    let price_sel = parse_selector(&selectors.price)?;

    let document = Html::parse_document(html);

    let mut containers_matched = 0usize;
    let mut listings = Vec::new();

    for container in document.select(&container_sel).take(max_items) {
        containers_matched += 1;

        let name_text = first_collapsed_text(container, &name_sel);
        let price_text = first_collapsed_text(container, &price_sel);

        if name_text.is_none() && price_text.is_none() {
            tracing::debug!(
                container = containers_matched,
                "container matched but neither name nor price selector hit; skipping"
            );
            continue;
        }

        listings.push(RawListing {
            name_text,
            price_text,
        });
    }

    Ok(Extraction {
        containers_matched,
        listings,
    })
}

fn parse_selector(expression: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(expression).map_err(|e| ScrapeError::InvalidSelector {
        selector: expression.to_owned(),
        reason: e.to_string(),
    })
}

/// Visible text of the first descendant matching `selector`, trimmed and
/// with inter-node whitespace collapsed to single spaces. `None` when the
/// selector misses or the matched element holds no text.
fn first_collapsed_text(container: ElementRef<'_>, selector: &Selector) -> Option<String> {
    let element = container.select(selector).next()?;
    let text = element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ");
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
