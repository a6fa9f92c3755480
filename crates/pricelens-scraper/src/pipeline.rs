//! Per-retailer orchestration: render, extract, parse, normalize, isolate.

use std::time::Duration;

use pricelens_core::retailers::RetailerConfig;

use crate::aggregate::aggregate;
use crate::error::ScrapeError;
use crate::extract::extract_listings;
use crate::normalize::normalize_unit;
use crate::price::parse_price;
use crate::render::PageRenderer;
use crate::types::{Offer, RetailerOutcome, RunResult};

/// Stand-in name when a listing has a price but the name selector missed.
const FALLBACK_PRODUCT_NAME: &str = "Product";

/// Cap on failure-reason text carried into a [`RunResult`]; collaborator
/// errors can embed whole response bodies.
const MAX_REASON_CHARS: usize = 200;

/// Default cap on listings taken per retailer page.
pub const DEFAULT_MAX_ITEMS: usize = 5;

/// Run-level knobs. The pacing delay between retailers exists to soften
/// the automation signature against the target sites and carries no
/// correctness weight; tests set both bounds to zero.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub max_items: usize,
    pub pacing_delay_min_ms: u64,
    pub pacing_delay_max_ms: u64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
            pacing_delay_min_ms: 0,
            pacing_delay_max_ms: 0,
        }
    }
}

/// Runs the full comparison for `query` across `retailers`, sequentially,
/// and returns the ranked result.
///
/// Retailer failures are isolated: whatever happens to one retailer, the
/// rest still run and partial results survive into the output.
pub async fn run_search<R: PageRenderer>(
    renderer: &R,
    retailers: &[RetailerConfig],
    query: &str,
    options: &RunOptions,
) -> RunResult {
    let mut outcomes = Vec::with_capacity(retailers.len());

    for (idx, retailer) in retailers.iter().enumerate() {
        if idx > 0 {
            pace(options.pacing_delay_min_ms, options.pacing_delay_max_ms).await;
        }
        outcomes.push(scrape_retailer(renderer, retailer, query, options.max_items).await);
    }

    aggregate(outcomes)
}

/// Processes one retailer end to end, absorbing every failure into the
/// outcome. This is the single isolate-and-record boundary: no error from
/// rendering or extraction propagates past it.
pub async fn scrape_retailer<R: PageRenderer>(
    renderer: &R,
    retailer: &RetailerConfig,
    query: &str,
    max_items: usize,
) -> RetailerOutcome {
    tracing::info!(retailer = %retailer.name, "pulling listings");

    match scrape_retailer_inner(renderer, retailer, query, max_items).await {
        Ok(offers) => {
            tracing::info!(
                retailer = %retailer.name,
                offers = offers.len(),
                "retailer done"
            );
            RetailerOutcome {
                retailer: retailer.name.clone(),
                offers,
                failure_reason: None,
            }
        }
        Err(e) => {
            tracing::warn!(retailer = %retailer.name, error = %e, "retailer failed");
            RetailerOutcome {
                retailer: retailer.name.clone(),
                offers: vec![],
                failure_reason: Some(truncate_reason(&e.to_string())),
            }
        }
    }
}

async fn scrape_retailer_inner<R: PageRenderer>(
    renderer: &R,
    retailer: &RetailerConfig,
    query: &str,
    max_items: usize,
) -> Result<Vec<Offer>, ScrapeError> {
    let url = retailer.search_url(query);
    let html = renderer.render(&url).await?;

    let extraction = extract_listings(&html, &retailer.selectors, max_items)?;
    if extraction.containers_matched == 0 {
        return Err(ScrapeError::NoContainers {
            retailer: retailer.name.clone(),
            selector: retailer.selectors.item_container.clone(),
        });
    }

    let mut offers = Vec::with_capacity(extraction.listings.len());
    for listing in extraction.listings {
        // No parsed price, no offer. The listing text often contains a
        // price-shaped fragment elsewhere, so this stays a per-listing
        // skip rather than a retailer failure.
        let Some(price) = parse_price(listing.price_text.as_deref()) else {
            tracing::debug!(
                retailer = %retailer.name,
                price_text = listing.price_text.as_deref().unwrap_or(""),
                "listing skipped: no parseable price"
            );
            continue;
        };

        let unit = normalize_unit(listing.name_text.as_deref(), price);
        let name = listing
            .name_text
            .as_deref()
            .unwrap_or(FALLBACK_PRODUCT_NAME);

        offers.push(Offer::new(
            &retailer.name,
            name,
            price,
            unit.unit_price,
            unit.unit_label,
        ));
    }

    Ok(offers)
}

/// Sleeps for a random duration in `[min_ms, max_ms]`. A zero range is a
/// no-op so tests and one-retailer runs pay nothing.
async fn pace(min_ms: u64, max_ms: u64) {
    if max_ms == 0 {
        return;
    }
    let delay_ms = if max_ms > min_ms {
        min_ms + (rand::random::<f64>() * (max_ms - min_ms) as f64) as u64
    } else {
        min_ms
    };
    if delay_ms > 0 {
        tracing::debug!(delay_ms, "pacing before next retailer");
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
}

fn truncate_reason(reason: &str) -> String {
    if reason.chars().count() <= MAX_REASON_CHARS {
        reason.to_owned()
    } else {
        let mut truncated: String = reason.chars().take(MAX_REASON_CHARS).collect();
        truncated.push('…');
        truncated
    }
}
