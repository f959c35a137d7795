use std::sync::Arc;

use stockview_core::{AlphaVantageProvider, SearchController, StockLookup, StockView};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

/// Logs go to stderr so stdout stays clean for cards and JSON.
pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_controller(
    config: &Config,
    view: Arc<dyn StockView>,
) -> anyhow::Result<SearchController> {
    let provider_config = config.provider_config();
    if provider_config.is_demo_key() {
        tracing::warn!(
            "Using the demo API key; set SV_API_KEY to avoid the daily request limit"
        );
    }
    let provider = AlphaVantageProvider::new(provider_config)?;
    tracing::info!("Market data endpoint: {}", config.base_url);
    Ok(SearchController::new(
        StockLookup::new(Arc::new(provider)),
        view,
    ))
}
