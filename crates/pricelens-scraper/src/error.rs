use thiserror::Error;

/// Failure modes surfaced while processing one retailer.
///
/// None of these are fatal to a run: the per-retailer wrapper in
/// [`crate::pipeline`] absorbs every variant into a failure record and the
/// remaining retailers keep going. Price and quantity parse misses are not
/// errors at all — they degrade to absent fields inside [`crate::price`]
/// and [`crate::normalize`].
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("page render timed out after {timeout_secs}s: {url}")]
    Timeout { url: String, timeout_secs: u64 },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("no item containers matched selector \"{selector}\" on {retailer}")]
    NoContainers { retailer: String, selector: String },

    #[error("invalid selector \"{selector}\": {reason}")]
    InvalidSelector { selector: String, reason: String },
}
