//! Entity types for the crawl-and-reconcile pipeline.
//!
//! ## Observed listing shapes on the platform
//!
//! ### Profile page
//! Topic collections sit in a profile section whose heading element
//! (`.title`) carries the exact label configured as the collections
//! heading. The list element follows the heading as its next element
//! sibling; each `li` holds a `.name` anchor with the topic's display
//! name and home link. Long profiles hide the tail of the list behind a
//! "show more" control.
//!
//! ### Topic listing / author homepage
//! Both render the same `.note-list > li` items. Engagement counters are
//! NOT structured fields: each counter is an icon element (`.ic-list-like`,
//! `.ic-list-comments`, `.ic-list-read`) whose **following text node**
//! holds the number, e.g. `<i class="ic-list-like"></i> 12`. A missing
//! icon or a missing adjacent text node means the counter was never
//! rendered; both read as 0.
//!
//! ### Publish time
//! Only the author homepage carries it, as a machine-readable RFC 3339
//! value in the `data-shared-at` attribute of the `.time` element. It is
//! formatted to minute granularity (`YYYY-MM-DD HH:mm`) at extraction
//! time; an absent or unparseable attribute leaves the field unset.

use serde::Serialize;

/// Identity of a topic collection, as discovered on the profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRef {
    pub topic_name: String,
    pub topic_home_url: String,
}

/// Identity of an author, as grouped from topic listings.
///
/// Grouping is keyed on `author_home_url`; `author_name` is the first
/// name observed for that home URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRef {
    pub author_name: String,
    pub author_home_url: String,
}

/// Lightweight article record extracted from a topic listing page.
///
/// Carries everything the listing shows; read count and publish time only
/// exist on the author's own homepage and are joined in later. Identity is
/// `url`, unique within one topic's listing. The same `url` may appear
/// under several topics and is kept once per topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleStub {
    pub title: String,
    pub url: String,
    pub author_name: String,
    pub author_home_url: String,
    pub star_count: u64,
    pub comment_count: u64,
}

/// Per-article detail record extracted from an author's homepage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDetail {
    pub url: String,
    pub read_count: u64,
    /// `YYYY-MM-DD HH:mm`, in the timestamp's own UTC offset.
    pub publish_time: Option<String>,
}

/// Fully merged article: owning-topic identity, listing fields, and the
/// author-homepage detail fields.
///
/// Built exactly once per stub via [`Article::from_parts`]; detail fields
/// default to zero/unset when no detail record matched the stub's `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub topic_name: String,
    pub topic_home_url: String,
    pub title: String,
    pub url: String,
    pub author_name: String,
    pub author_home_url: String,
    pub star_count: u64,
    pub comment_count: u64,
    pub read_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_time: Option<String>,
}

impl Article {
    /// Merge one stub with its owning topic's identity and the detail
    /// record matched by `url`, if any.
    #[must_use]
    pub fn from_parts(topic: &TopicRef, stub: ArticleStub, detail: Option<&ArticleDetail>) -> Self {
        Self {
            topic_name: topic.topic_name.clone(),
            topic_home_url: topic.topic_home_url.clone(),
            title: stub.title,
            url: stub.url,
            author_name: stub.author_name,
            author_home_url: stub.author_home_url,
            star_count: stub.star_count,
            comment_count: stub.comment_count,
            read_count: detail.map_or(0, |d| d.read_count),
            publish_time: detail.and_then(|d| d.publish_time.clone()),
        }
    }
}

/// A topic collection with its fully merged articles, in listing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub topic_name: String,
    pub topic_home_url: String,
    pub articles: Vec<Article>,
}

/// All articles sharing one author home URL, in first-seen order.
///
/// `author_name` is the first name observed for that home URL; listings
/// occasionally render stale nicknames, and first-seen wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub author_name: String,
    pub author_home_url: String,
    pub articles: Vec<Article>,
}
