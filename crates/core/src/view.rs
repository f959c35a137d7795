//! The display boundary.
//!
//! A [`StockView`] owns three areas: a loading indicator, an error line and
//! the result card. [`SearchController`](crate::SearchController) is the only
//! thing that drives it.

use std::sync::{Mutex, MutexGuard};

use crate::presenter::StockDisplay;

/// Something that can show the state of a search.
///
/// Methods take `&self` because one view is shared by every in-flight search;
/// implementations keep their own interior state.
pub trait StockView: Send + Sync {
    fn show_loading(&self);
    fn hide_loading(&self);

    /// Replace the error area with a single-line message and show it.
    fn show_error(&self, message: &str);
    fn hide_error(&self);

    /// Fill the result card. Called once per successful search, before
    /// [`show_results`](Self::show_results).
    fn render(&self, display: &StockDisplay);
    fn show_results(&self);
    fn hide_results(&self);
}

/// Visible state of a [`MemoryView`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub loading: bool,
    pub error: Option<String>,
    pub results_visible: bool,
    pub display: Option<StockDisplay>,
}

/// One call made on a [`MemoryView`], in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    ShowLoading,
    HideLoading,
    ShowError(String),
    HideError,
    Render(String),
    ShowResults,
    HideResults,
}

/// Headless view that keeps its state in memory and records every call.
#[derive(Debug, Default)]
pub struct MemoryView {
    inner: Mutex<(ViewState, Vec<ViewEvent>)>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewState {
        self.lock().0.clone()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.lock().1.clone()
    }

    fn lock(&self) -> MutexGuard<'_, (ViewState, Vec<ViewEvent>)> {
        // A panic mid-update leaves plain data behind; keep using it
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn apply(&self, event: ViewEvent, update: impl FnOnce(&mut ViewState)) {
        let mut guard = self.lock();
        update(&mut guard.0);
        guard.1.push(event);
    }
}

impl StockView for MemoryView {
    fn show_loading(&self) {
        self.apply(ViewEvent::ShowLoading, |s| s.loading = true);
    }

    fn hide_loading(&self) {
        self.apply(ViewEvent::HideLoading, |s| s.loading = false);
    }

    fn show_error(&self, message: &str) {
        self.apply(ViewEvent::ShowError(message.to_string()), |s| {
            s.error = Some(message.to_string())
        });
    }

    fn hide_error(&self) {
        self.apply(ViewEvent::HideError, |s| s.error = None);
    }

    fn render(&self, display: &StockDisplay) {
        self.apply(ViewEvent::Render(display.ticker.clone()), |s| {
            s.display = Some(display.clone())
        });
    }

    fn show_results(&self) {
        self.apply(ViewEvent::ShowResults, |s| s.results_visible = true);
    }

    fn hide_results(&self) {
        self.apply(ViewEvent::HideResults, |s| s.results_visible = false);
    }
}
