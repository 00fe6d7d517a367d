//! Sequential crawl orchestration.
//!
//! One shared page is navigated through every stage in order: profile →
//! each topic listing → each author homepage. Every stage awaits the
//! previous navigation and extraction; there is no parallel fan-out, and
//! the only shared mutable state is the driver's page and the in-memory
//! entity graph built along the way.

use std::collections::HashMap;
use std::time::Duration;

use inkstats_core::AppConfig;
use scraper::Html;
use url::Url;

use crate::driver::PageDriver;
use crate::error::ScraperError;
use crate::report::CrawlReports;
use crate::types::{ArticleStub, TopicRef};
use crate::{aggregate, extract, paginator, reconcile};

/// Run one full crawl and build the three report views.
///
/// Expected-absence conditions along the way (no "show more" control, no
/// collections section, unmatched detail records) degrade to empty
/// results or default fields. Navigation and extraction failures
/// propagate and abort the run — there is no partial-success mode.
///
/// # Errors
///
/// Any [`ScraperError`] the driver or paginator reports.
pub async fn run(
    page: &dyn PageDriver,
    config: &AppConfig,
) -> Result<CrawlReports, ScraperError> {
    let topics = discover_topics(page, config).await?;
    tracing::info!(topic_count = topics.len(), "discovered topic collections");

    let mut listings: Vec<(TopicRef, Vec<ArticleStub>)> = Vec::with_capacity(topics.len());
    for topic in topics {
        let stubs = fetch_listing(
            page,
            config,
            &topic.topic_home_url,
            extract::extract_article_stubs,
        )
        .await?;
        tracing::info!(
            topic = %topic.topic_name,
            article_count = stubs.len(),
            "collected topic listing"
        );
        listings.push((topic, stubs));
    }

    let authors = reconcile::author_refs(&listings);
    let mut details_by_author = HashMap::with_capacity(authors.len());
    for author in authors {
        let details = fetch_listing(
            page,
            config,
            &author.author_home_url,
            extract::extract_article_details,
        )
        .await?;
        tracing::info!(
            author = %author.author_name,
            detail_count = details.len(),
            "collected author homepage"
        );
        details_by_author.insert(author.author_home_url, details);
    }

    let graph = reconcile::join(&listings, &details_by_author);
    Ok(aggregate::reports(&graph))
}

/// Discover the account's topic collections from its profile page.
///
/// The "show more" click is best-effort: when it lands, the page gets the
/// settle delay to render the revealed tail; when it misses, everything
/// is taken to be visible already.
async fn discover_topics(
    page: &dyn PageDriver,
    config: &AppConfig,
) -> Result<Vec<TopicRef>, ScraperError> {
    let base = parse_url(&config.profile_url)?;
    page.navigate(&config.profile_url).await?;
    if page.try_interact(&config.show_more_selector).await {
        tokio::time::sleep(Duration::from_millis(config.settle_delay_ms)).await;
    }
    let html = page.html().await?;
    let doc = Html::parse_document(&html);
    Ok(extract::extract_topics(
        &doc,
        &config.collections_heading,
        &base,
    ))
}

/// Navigate to a listing, scroll it to completion, and extract records
/// from the final snapshot.
async fn fetch_listing<T, F>(
    page: &dyn PageDriver,
    config: &AppConfig,
    url: &str,
    extract_fn: F,
) -> Result<Vec<T>, ScraperError>
where
    F: Fn(&Html, &Url) -> Vec<T>,
{
    let base = parse_url(url)?;
    page.navigate(url).await?;
    paginator::scroll_to_end(
        page,
        url,
        Duration::from_millis(config.scroll_poll_ms),
        config.scroll_max_rounds,
    )
    .await?;
    let html = page.html().await?;
    let doc = Html::parse_document(&html);
    Ok(extract_fn(&doc, &base))
}

fn parse_url(url: &str) -> Result<Url, ScraperError> {
    Url::parse(url).map_err(|e| ScraperError::InvalidUrl {
        url: url.to_owned(),
        reason: e.to_string(),
    })
}
