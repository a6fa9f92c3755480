pub mod aggregate;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod pipeline;
pub mod price;
pub mod render;
pub mod types;

pub use aggregate::aggregate;
pub use error::ScrapeError;
pub use extract::{extract_listings, Extraction};
pub use normalize::{normalize_unit, UnitInfo, UNIT_NOT_APPLICABLE};
pub use pipeline::{run_search, scrape_retailer, RunOptions};
pub use price::parse_price;
pub use render::{HttpRenderer, PageRenderer};
pub use types::{Offer, RawListing, RetailerFailure, RetailerOutcome, RunResult};
