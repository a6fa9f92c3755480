use std::path::PathBuf;

use clap::Parser;

use pricelens_scraper::{run_search, HttpRenderer, RunOptions};

mod report;

#[derive(Debug, Parser)]
#[command(name = "pricelens-cli")]
#[command(about = "Compare a product's price across online retailers")]
struct Cli {
    /// Search terms, e.g. `pricelens-cli schweppes ginger ale 12 pack`.
    #[arg(required = true)]
    query: Vec<String>,

    /// Retailer table to use instead of the configured path.
    #[arg(long)]
    retailers: Option<PathBuf>,

    /// Cap on listings taken per retailer page.
    #[arg(long)]
    max_items: Option<usize>,

    /// Skip the randomized pacing delay between retailers.
    #[arg(long)]
    no_delay: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = pricelens_core::load_app_config_from_env()?;
    init_tracing(&config.log_level);

    let query = cli.query.join(" ");
    let retailers_path = cli.retailers.unwrap_or_else(|| config.retailers_path.clone());
    let retailers = pricelens_core::load_retailers(&retailers_path)?;

    let renderer = HttpRenderer::new(config.page_timeout_secs, config.user_agents.clone())?;
    let options = RunOptions {
        max_items: cli.max_items.unwrap_or(config.max_items),
        pacing_delay_min_ms: if cli.no_delay {
            0
        } else {
            config.pacing_delay_min_ms
        },
        pacing_delay_max_ms: if cli.no_delay {
            0
        } else {
            config.pacing_delay_max_ms
        },
    };

    let result = run_search(&renderer, &retailers.retailers, &query, &options).await;

    // Partial results are a success; only config errors exit non-zero.
    print!("{}", report::format_run_result(&result, &query));

    Ok(())
}

fn init_tracing(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
