mod args;
mod config;
mod main_lib;
mod terminal;

use std::io::{IsTerminal, Write};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use stockview_core::{SearchController, SearchOutcome};
use tokio::io::{AsyncBufReadExt, BufReader};

use args::Args;
use config::Config;
use main_lib::{build_controller, init_tracing};
use terminal::TerminalView;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let config = Config::from_env();
    init_tracing(&config.log_format);
    let args = Args::parse();

    let view = Arc::new(TerminalView::new(args.json));
    let controller = build_controller(&config, view)?;

    let failed = if args.tickers.is_empty() {
        run_interactive(&controller).await?
    } else {
        run_batch(&controller, &args.tickers).await
    };

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Looks up each ticker in turn. Reports whether the last search failed.
async fn run_batch(controller: &SearchController, tickers: &[String]) -> bool {
    let mut failed = false;
    for ticker in tickers {
        match controller.submit(ticker).await {
            SearchOutcome::Ignored => {}
            outcome => failed = outcome.is_failure(),
        }
    }
    failed
}

/// Reads tickers from stdin until EOF or `quit`.
async fn run_interactive(controller: &SearchController) -> anyhow::Result<bool> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let prompt = std::io::stdin().is_terminal();
    let mut failed = false;
    loop {
        if prompt {
            print!("Ticker> ");
            std::io::stdout().flush()?;
        }
        let Some(line) = lines.next_line().await? else {
            if prompt {
                println!();
            }
            break;
        };
        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }
        match controller.submit(input).await {
            SearchOutcome::Ignored => {}
            outcome => failed = outcome.is_failure(),
        }
    }
    Ok(failed)
}
