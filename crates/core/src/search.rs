//! One search from user input to screen.
//!
//! Searches are numbered with a monotonically increasing generation. A new
//! search does not cancel one that is still in flight, but when the older one
//! finally answers it is no longer the latest generation and its result is
//! dropped instead of overwriting the screen.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::debug;
use stockview_market_data::{MarketDataError, TickerSymbol};

use crate::lookup::StockLookup;
use crate::presenter::StockDisplay;
use crate::view::StockView;

/// How a call to [`SearchController::submit`] ended.
#[derive(Debug)]
pub enum SearchOutcome {
    /// Blank input, nothing happened.
    Ignored,
    /// The result was rendered.
    Displayed(StockDisplay),
    /// The error message was shown.
    Failed(MarketDataError),
    /// A newer search started before this one finished; nothing was shown.
    Superseded,
}

impl SearchOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

pub struct SearchController {
    lookup: StockLookup,
    view: Arc<dyn StockView>,
    generation: AtomicU64,
}

impl SearchController {
    pub fn new(lookup: StockLookup, view: Arc<dyn StockView>) -> Self {
        Self {
            lookup,
            view,
            generation: AtomicU64::new(0),
        }
    }

    /// Generation of the most recent search, 0 before the first one.
    pub fn latest_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Look up `input` and drive the view through loading, then either the
    /// result card or one error line.
    pub async fn submit(&self, input: &str) -> SearchOutcome {
        let symbol = match TickerSymbol::parse(input) {
            Ok(symbol) => symbol,
            Err(_) => return SearchOutcome::Ignored,
        };

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Search #{} for {}", generation, symbol);

        self.view.show_loading();
        self.view.hide_error();
        self.view.hide_results();
        let _loading = LoadingGuard {
            view: self.view.as_ref(),
            latest: &self.generation,
            generation,
        };

        let result = self.lookup.lookup(&symbol).await;

        if self.latest_generation() != generation {
            debug!(
                "Discarding stale response for {} (search #{}, latest #{})",
                symbol,
                generation,
                self.latest_generation()
            );
            return SearchOutcome::Superseded;
        }

        match result {
            Ok(merged) => {
                let display = StockDisplay::from_result(&merged);
                self.view.render(&display);
                self.view.show_results();
                SearchOutcome::Displayed(display)
            }
            Err(e) => {
                debug!("Search #{} for {} failed: {}", generation, symbol, e);
                self.view.show_error(&e.to_string());
                SearchOutcome::Failed(e)
            }
        }
    }
}

/// Clears the loading indicator when the search that set it ends, however it
/// ends (including a dropped future). A superseded search leaves the
/// indicator to the newer one.
struct LoadingGuard<'a> {
    view: &'a dyn StockView,
    latest: &'a AtomicU64,
    generation: u64,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if self.latest.load(Ordering::SeqCst) == self.generation {
            self.view.hide_loading();
        }
    }
}
