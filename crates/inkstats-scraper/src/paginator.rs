//! Lazy-load pagination by auto-scroll.
//!
//! Listing pages render additional items only as the viewport approaches
//! the bottom, so extraction must first scroll until nothing more loads.
//! Stability is detected by sampling the document's scrollable height:
//! when two consecutive polls see the same height, the listing is
//! complete.

use std::time::Duration;

use crate::driver::PageDriver;
use crate::error::ScraperError;

/// Scroll `page` to the bottom until its scroll height stops growing.
///
/// After each scroll the paginator sleeps `poll_interval` to give the
/// listing time to render before the next height sample. `max_rounds`
/// bounds the loop: a listing still growing after that many rounds is
/// treated as non-finite rather than scrolled forever. `url` is only used
/// for error context.
///
/// # Errors
///
/// - [`ScraperError::ScrollLimit`] — height was still growing after
///   `max_rounds` rounds.
/// - Any error the driver reports while scrolling or sampling.
pub async fn scroll_to_end(
    page: &dyn PageDriver,
    url: &str,
    poll_interval: Duration,
    max_rounds: usize,
) -> Result<(), ScraperError> {
    let mut last_height = page.scroll_height().await?;
    for _ in 0..max_rounds {
        page.scroll_to_bottom().await?;
        tokio::time::sleep(poll_interval).await;
        let height = page.scroll_height().await?;
        if height == last_height {
            return Ok(());
        }
        last_height = height;
    }
    Err(ScraperError::ScrollLimit {
        url: url.to_owned(),
        max_rounds,
    })
}
