use std::sync::Arc;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use marsview::adapters::ReqwestHttpClient;
use marsview::api::MarsApiClient;
use marsview::cli::{parse_args, version_line, CliCommand, USAGE};
use marsview::config::ApiConfig;
use marsview::overview::{ListingLoader, LoadStatus};
use marsview::presenter::{follow_status, format_listing, format_price, take_selection};

/// Environment variable holding the log filter, checked before `RUST_LOG`.
const ENV_LOG: &str = "MARSVIEW_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(ENV_LOG)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so stdout only carries listing lines.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

async fn run(base_url: Option<String>) -> Result<()> {
    let mut config = ApiConfig::from_env();
    if let Some(url) = base_url {
        config = config.with_base_url(url);
    }
    info!(url = %config.listings_url(), "Loading listings");

    let http = ReqwestHttpClient::with_user_agent(&config.user_agent)?;
    let loader = ListingLoader::new(Arc::new(MarsApiClient::new(http, config)));

    let status = follow_status(&loader, |status| info!(%status, "Status changed")).await;
    if status == LoadStatus::Error {
        return Err(eyre!("could not load listings"));
    }

    let listings = loader.listings();
    for listing in &listings {
        println!("{}", format_listing(listing));
    }

    // No interactive input here: pick the first listing to show the one-shot
    // selection handoff a UI would perform on a tap.
    if let Some(first) = listings.first() {
        loader.select_listing(first.clone());
    }
    if let Some(selected) = take_selection(&loader) {
        println!();
        println!("selected {} ({})", selected.id, format_price(&selected));
    }

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let base_url = match parse_args(std::env::args())? {
        CliCommand::Version => {
            println!("{}", version_line());
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Run { base_url } => base_url,
    };

    init_tracing();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(base_url))
}
