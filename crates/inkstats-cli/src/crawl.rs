//! Crawl command handler.
//!
//! Called from `main` after configuration and tracing are established.
//! The run either completes and writes all three artifacts, or fails and
//! writes none — there is no partial-success mode.

use std::fs;
use std::path::Path;

use inkstats_core::AppConfig;
use inkstats_scraper::{CrawlReports, HttpPage};

pub(crate) const ARTICLES_FILE: &str = "articles.json";
pub(crate) const TOPICS_FILE: &str = "topics.json";
pub(crate) const AUTHORS_FILE: &str = "authors.json";

/// Crawl the configured account and write the three report artifacts.
///
/// When `dry_run` is `true` the function prints what would be crawled and
/// returns without navigating or writing.
///
/// # Errors
///
/// Returns an error if the page driver cannot be constructed, the crawl
/// fails, or an artifact cannot be serialized or written.
pub(crate) async fn run_crawl(config: &AppConfig, dry_run: bool) -> anyhow::Result<()> {
    if dry_run {
        println!(
            "dry-run: would crawl {} and write {ARTICLES_FILE}, {TOPICS_FILE}, {AUTHORS_FILE} under {}",
            config.profile_url,
            config.output_dir.display()
        );
        return Ok(());
    }

    let page = HttpPage::new(config.request_timeout_secs, &config.user_agent)
        .map_err(|e| anyhow::anyhow!("failed to build page driver: {e}"))?;

    tracing::info!(profile_url = %config.profile_url, "starting crawl");
    let reports = inkstats_scraper::run(&page, config).await?;
    write_reports(&config.output_dir, &reports)?;

    tracing::info!(
        article_count = reports.articles.article_count,
        topic_count = reports.topics.topic_count,
        author_count = reports.authors.author_count,
        output_dir = %config.output_dir.display(),
        "crawl complete"
    );
    Ok(())
}

/// Serialize the three report views into `dir`, creating it if needed.
pub(crate) fn write_reports(dir: &Path, reports: &CrawlReports) -> anyhow::Result<()> {
    fs::create_dir_all(dir)
        .map_err(|e| anyhow::anyhow!("failed to create {}: {e}", dir.display()))?;
    write_artifact(&dir.join(ARTICLES_FILE), &reports.articles)?;
    write_artifact(&dir.join(TOPICS_FILE), &reports.topics)?;
    write_artifact(&dir.join(AUTHORS_FILE), &reports.authors)?;
    Ok(())
}

fn write_artifact<T: serde::Serialize>(path: &Path, view: &T) -> anyhow::Result<()> {
    let body = serde_json::to_vec(view)
        .map_err(|e| anyhow::anyhow!("failed to serialize {}: {e}", path.display()))?;
    fs::write(path, body)
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote report artifact");
    Ok(())
}
