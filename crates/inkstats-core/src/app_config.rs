use std::path::PathBuf;

/// Runtime configuration for a crawl run.
///
/// Every knob has a default, so an empty environment produces the reference
/// behavior: crawl the built-in account profile and write the three report
/// artifacts under `./reports`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Profile page of the account whose topic collections are crawled.
    pub profile_url: String,
    /// Exact heading text of the profile section that lists the account's
    /// own topic collections. Listings under any other heading are ignored.
    pub collections_heading: String,
    /// Selector for the optional "show more" affordance on the profile page.
    /// Clicking it is best-effort; a miss is not an error.
    pub show_more_selector: String,
    /// Directory the three JSON artifacts are written into.
    pub output_dir: PathBuf,
    pub log_level: String,
    /// Poll interval between scroll-height samples while auto-scrolling.
    pub scroll_poll_ms: u64,
    /// Wait after a successful "show more" click before re-reading the page.
    pub settle_delay_ms: u64,
    /// Upper bound on auto-scroll rounds per page. Exceeding it aborts the
    /// run instead of looping on a listing that never stops growing.
    pub scroll_max_rounds: usize,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}
