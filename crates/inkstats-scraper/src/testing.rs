//! Test doubles for the page driver.
//!
//! [`FakePage`] is a scripted [`PageDriver`] for exercising the whole
//! pipeline without a browser or network: register the HTML each URL
//! renders, optionally as a sequence of snapshots that lazy-load reveals
//! one by one, and optionally the page swap a successful interaction
//! triggers.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::driver::PageDriver;
use crate::error::ScraperError;

#[derive(Default)]
struct FakeState {
    current_url: Option<String>,
    /// Index into the current URL's snapshot sequence.
    snapshot: usize,
    /// Replacement HTML activated by a successful interaction.
    override_html: Option<String>,
    scroll_calls: usize,
    interactions: Vec<String>,
}

/// Scripted in-memory page driver.
///
/// Navigating to an unregistered URL reports [`ScraperError::NotFound`],
/// which makes missing fixtures fail tests loudly instead of silently
/// extracting nothing.
#[derive(Default)]
pub struct FakePage {
    pages: HashMap<String, Vec<String>>,
    /// `(url, selector)` → HTML the page shows after that interaction.
    on_interact: HashMap<(String, String), String>,
    state: Mutex<FakeState>,
}

impl FakePage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a URL that renders `html` and never grows on scroll.
    #[must_use]
    pub fn with_page(self, url: &str, html: impl Into<String>) -> Self {
        self.with_page_sequence(url, [html])
    }

    /// Register a URL whose listing lazy-loads: each scroll to the bottom
    /// reveals the next snapshot until the sequence is exhausted.
    #[must_use]
    pub fn with_page_sequence<I, S>(mut self, url: &str, snapshots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let snapshots: Vec<String> = snapshots.into_iter().map(Into::into).collect();
        assert!(
            !snapshots.is_empty(),
            "page sequence must contain at least one snapshot"
        );
        self.pages.insert(url.to_owned(), snapshots);
        self
    }

    /// Script a successful interaction: while on `url`, acting on
    /// `selector` swaps the rendered document for `html`.
    #[must_use]
    pub fn with_interaction(mut self, url: &str, selector: &str, html: impl Into<String>) -> Self {
        self.on_interact
            .insert((url.to_owned(), selector.to_owned()), html.into());
        self
    }

    /// Number of scroll-to-bottom calls across the whole run.
    #[must_use]
    pub fn scroll_calls(&self) -> usize {
        self.state.lock().expect("fake page lock poisoned").scroll_calls
    }

    /// Selectors that were interacted with, in call order (hits and misses).
    #[must_use]
    pub fn interactions(&self) -> Vec<String> {
        self.state
            .lock()
            .expect("fake page lock poisoned")
            .interactions
            .clone()
    }

    fn current_html(&self, state: &FakeState) -> Result<String, ScraperError> {
        if let Some(html) = &state.override_html {
            return Ok(html.clone());
        }
        let url = state
            .current_url
            .as_ref()
            .ok_or(ScraperError::NoCurrentPage { operation: "html" })?;
        let snapshots = self
            .pages
            .get(url)
            .ok_or_else(|| ScraperError::NotFound { url: url.clone() })?;
        Ok(snapshots[state.snapshot.min(snapshots.len() - 1)].clone())
    }
}

#[async_trait]
impl PageDriver for FakePage {
    async fn navigate(&self, url: &str) -> Result<(), ScraperError> {
        if !self.pages.contains_key(url) {
            return Err(ScraperError::NotFound {
                url: url.to_owned(),
            });
        }
        let mut state = self.state.lock().expect("fake page lock poisoned");
        state.current_url = Some(url.to_owned());
        state.snapshot = 0;
        state.override_html = None;
        Ok(())
    }

    async fn html(&self) -> Result<String, ScraperError> {
        let state = self.state.lock().expect("fake page lock poisoned");
        self.current_html(&state)
    }

    async fn try_interact(&self, selector: &str) -> bool {
        let mut state = self.state.lock().expect("fake page lock poisoned");
        state.interactions.push(selector.to_owned());
        let Some(url) = state.current_url.clone() else {
            return false;
        };
        match self.on_interact.get(&(url, selector.to_owned())) {
            Some(html) => {
                state.override_html = Some(html.clone());
                true
            }
            None => false,
        }
    }

    async fn scroll_to_bottom(&self) -> Result<(), ScraperError> {
        let mut state = self.state.lock().expect("fake page lock poisoned");
        state.scroll_calls += 1;
        let Some(url) = &state.current_url else {
            return Err(ScraperError::NoCurrentPage {
                operation: "scroll_to_bottom",
            });
        };
        let len = self.pages.get(url).map_or(1, Vec::len);
        state.snapshot = (state.snapshot + 1).min(len - 1);
        Ok(())
    }

    async fn scroll_height(&self) -> Result<u64, ScraperError> {
        let state = self.state.lock().expect("fake page lock poisoned");
        self.current_html(&state).map(|html| html.len() as u64)
    }
}
