use std::path::PathBuf;

/// Runtime settings for a comparison run, sourced from environment
/// variables (see [`crate::config::load_app_config`]).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the YAML retailer table.
    pub retailers_path: PathBuf,
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Page-render timeout per retailer, in seconds.
    pub page_timeout_secs: u64,
    /// Cap on listings taken per retailer page.
    pub max_items: usize,
    /// Lower bound of the randomized inter-retailer pacing delay.
    pub pacing_delay_min_ms: u64,
    /// Upper bound of the randomized inter-retailer pacing delay.
    /// Both bounds zero disables pacing entirely.
    pub pacing_delay_max_ms: u64,
    /// User-agent pool; the renderer picks one per request.
    pub user_agents: Vec<String>,
}
