use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::ScraperError;

/// Contract the crawl requires from a page-automation backend.
///
/// One driver instance models one shared page that is navigated from URL
/// to URL over the whole run; the crawl never holds two pages at once.
/// Extraction itself never goes through the driver — callers take an
/// [`html`](PageDriver::html) snapshot and run the pure extraction
/// functions in [`crate::extract`] over it.
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Navigate the page to `url` and wait until it has settled.
    async fn navigate(&self, url: &str) -> Result<(), ScraperError>;

    /// Snapshot of the currently rendered document.
    async fn html(&self) -> Result<String, ScraperError>;

    /// Best-effort UI action on the first element matching `selector`.
    ///
    /// Returns whether the interaction happened. Never errors: a missing
    /// element or a backend that cannot interact reports `false`.
    async fn try_interact(&self, selector: &str) -> bool;

    /// Scroll the page to the bottom of its current content.
    async fn scroll_to_bottom(&self) -> Result<(), ScraperError>;

    /// Current scrollable height of the document.
    async fn scroll_height(&self) -> Result<u64, ScraperError>;
}

/// Snapshot driver over plain HTTP.
///
/// Fetches each navigated URL once and serves the response body as the
/// rendered document. It runs no script: [`try_interact`](PageDriver::try_interact)
/// always reports `false`, scrolling is a no-op, and the scroll height is
/// the byte length of the last snapshot — so auto-scroll terminates after
/// one stable poll. Suitable for server-rendered listings; a browser-backed
/// [`PageDriver`] is the extension point for script-rendered ones.
pub struct HttpPage {
    client: Client,
    current: Mutex<Option<String>>,
}

impl HttpPage {
    /// Creates an `HttpPage` with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            current: Mutex::new(None),
        })
    }
}

#[async_trait]
impl PageDriver for HttpPage {
    /// Fetch `url` and keep the body as the current document.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::NotFound`] — HTTP 404.
    /// - [`ScraperError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`ScraperError::Http`] — network or TLS failure.
    async fn navigate(&self, url: &str) -> Result<(), ScraperError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status.as_u16() == 404 {
            return Err(ScraperError::NotFound {
                url: url.to_owned(),
            });
        }
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }
        let body = response.text().await?;
        *self.current.lock().expect("page snapshot lock poisoned") = Some(body);
        Ok(())
    }

    async fn html(&self) -> Result<String, ScraperError> {
        self.current
            .lock()
            .expect("page snapshot lock poisoned")
            .clone()
            .ok_or(ScraperError::NoCurrentPage { operation: "html" })
    }

    async fn try_interact(&self, _selector: &str) -> bool {
        false
    }

    async fn scroll_to_bottom(&self) -> Result<(), ScraperError> {
        Ok(())
    }

    async fn scroll_height(&self) -> Result<u64, ScraperError> {
        self.current
            .lock()
            .expect("page snapshot lock poisoned")
            .as_ref()
            .map(|body| body.len() as u64)
            .ok_or(ScraperError::NoCurrentPage {
                operation: "scroll_height",
            })
    }
}
