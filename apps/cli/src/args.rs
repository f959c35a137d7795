//! Command-line arguments for stockview.
use clap::Parser;

/// Look up stock quotes and company profiles.
#[derive(Debug, Parser)]
#[command(name = "stockview", version, about, long_about = None)]
pub struct Args {
    /// Tickers to look up, in order. Without any, tickers are read from stdin
    /// one per line.
    pub tickers: Vec<String>,

    /// Print each result as a JSON object instead of a card.
    #[clap(long)]
    pub json: bool,
}
