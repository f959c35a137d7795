//! Terminal rendering of a search.
//!
//! Cards and JSON go to stdout; the loading indicator and errors go to stderr.

use std::io::{IsTerminal, Write};
use std::sync::Mutex;

use colored::Colorize;
use stockview_core::{ChangeDirection, StockDisplay, StockView};

pub struct TerminalView {
    json: bool,
    interactive: bool,
    pending: Mutex<Option<StockDisplay>>,
}

impl TerminalView {
    pub fn new(json: bool) -> Self {
        Self {
            json,
            interactive: std::io::stderr().is_terminal(),
            pending: Mutex::new(None),
        }
    }

    fn take_pending(&self) -> Option<StockDisplay> {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
    }
}

impl StockView for TerminalView {
    fn show_loading(&self) {
        if self.interactive {
            eprint!("{}", "Loading...".dimmed());
            let _ = std::io::stderr().flush();
        }
    }

    fn hide_loading(&self) {
        if self.interactive {
            // Carriage return and erase to end of line
            eprint!("\r\x1b[K");
            let _ = std::io::stderr().flush();
        }
    }

    fn show_error(&self, message: &str) {
        if self.interactive {
            eprint!("\r\x1b[K");
        }
        eprintln!("{} {}", "Error:".red().bold(), message.red());
    }

    fn hide_error(&self) {}

    fn render(&self, display: &StockDisplay) {
        *self
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(display.clone());
    }

    fn show_results(&self) {
        let Some(display) = self.take_pending() else {
            return;
        };
        if self.interactive {
            eprint!("\r\x1b[K");
        }
        if self.json {
            match serde_json::to_string(&display) {
                Ok(json) => println!("{}", json),
                Err(e) => tracing::error!("Failed to serialize result: {}", e),
            }
        } else {
            println!("{}", render_card(&display, std::io::stdout().is_terminal()));
        }
    }

    fn hide_results(&self) {
        self.take_pending();
    }
}

const LABEL_WIDTH: usize = 16;
const VALUE_WIDTH: usize = 14;

/// Lays a display out as a plain-text card. With `color`, the change is
/// drawn green or red.
pub fn render_card(display: &StockDisplay, color: bool) -> String {
    let mut lines = Vec::new();

    let mut header = format!("{} ({})", display.company_name, display.ticker);
    if !display.exchange.is_empty() {
        header.push_str(&format!(" · {}", display.exchange));
    }
    lines.push(if color {
        header.bold().to_string()
    } else {
        header
    });

    let change = if color {
        match display.change_direction {
            ChangeDirection::Positive => display.change.green().to_string(),
            ChangeDirection::Negative => display.change.red().to_string(),
        }
    } else {
        display.change.clone()
    };
    let mut price_line = format!("{}  {}", display.price, change);
    if let Some(as_of) = &display.as_of {
        price_line.push_str(&format!("  as of {}", as_of));
    }
    lines.push(price_line);
    lines.push(String::new());

    let stats = [
        ("Open", &display.open, "Previous Close", &display.previous_close),
        ("Day High", &display.high, "Day Low", &display.low),
        ("52 Week High", &display.week_52_high, "52 Week Low", &display.week_52_low),
        ("Volume", &display.volume, "Avg Volume", &display.average_volume),
        ("Market Cap", &display.market_cap, "P/E Ratio", &display.pe_ratio),
        ("EPS", &display.eps, "Dividend Yield", &display.dividend_yield),
        ("Beta", &display.beta, "Sector", &display.sector),
        ("Industry", &display.industry, "Country", &display.country),
    ];
    for (left_label, left, right_label, right) in stats {
        lines.push(format!(
            "{:<lw$}{:>vw$}    {:<lw$}{:>vw$}",
            left_label,
            left,
            right_label,
            right,
            lw = LABEL_WIDTH,
            vw = VALUE_WIDTH,
        ));
    }

    lines.push(String::new());
    lines.push(display.description.clone());
    lines.join("\n")
}
