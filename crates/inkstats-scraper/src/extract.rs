//! Pure extraction functions over a parsed document snapshot.
//!
//! Each function takes the already-parsed [`Html`] of a fully paginated
//! page plus the URL it was loaded from (for resolving relative links) and
//! returns records in document order. Malformed list items are skipped
//! silently: a listing with a broken entry still yields every well-formed
//! one, and a page without the expected structure yields an empty list.
//!
//! Selectors are named constants so extraction survives markup drift in
//! one place. See [`crate::types`] for the observed markup shapes.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::extract_helpers::{element_text, format_publish_time, icon_count, resolve_href};
use crate::types::{ArticleDetail, ArticleStub, TopicRef};

/// Section headings on the profile page.
const PROFILE_HEADING: &str = ".title";
/// Topic name anchor inside a collection list item.
const TOPIC_NAME: &str = ".name";
/// One article entry in a topic listing or author homepage.
const NOTE_ITEM: &str = ".note-list > li";
/// Article title anchor inside a note item.
const NOTE_TITLE: &str = ".title";
/// Author nickname anchor inside a note item.
const NOTE_NICKNAME: &str = ".nickname";
/// Star counter icon; the count is its adjacent text node.
const STAR_ICON: &str = ".ic-list-like";
/// Comment counter icon.
const COMMENT_ICON: &str = ".ic-list-comments";
/// Read counter icon (author homepage only).
const READ_ICON: &str = ".ic-list-read";
/// Publish timestamp element; the value is its `data-shared-at` attribute.
const NOTE_TIME: &str = ".time";
const SHARED_AT_ATTR: &str = "data-shared-at";

static PROFILE_HEADING_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(PROFILE_HEADING).expect("valid selector"));
static TOPIC_NAME_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(TOPIC_NAME).expect("valid selector"));
static LIST_ITEM_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li").expect("valid selector"));
static NOTE_ITEM_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(NOTE_ITEM).expect("valid selector"));
static NOTE_TITLE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(NOTE_TITLE).expect("valid selector"));
static NOTE_NICKNAME_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(NOTE_NICKNAME).expect("valid selector"));
static STAR_ICON_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(STAR_ICON).expect("valid selector"));
static COMMENT_ICON_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(COMMENT_ICON).expect("valid selector"));
static READ_ICON_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(READ_ICON).expect("valid selector"));
static NOTE_TIME_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(NOTE_TIME).expect("valid selector"));

/// Extract the topic collections listed on a profile page.
///
/// Locates the section whose heading text equals `heading_label` exactly
/// and walks the list that follows it. A profile without that section
/// (accounts that created no collections) yields an empty list, not an
/// error. Items lacking a name anchor, or whose anchor has no resolvable
/// `href`, are skipped.
#[must_use]
pub fn extract_topics(doc: &Html, heading_label: &str, base: &Url) -> Vec<TopicRef> {
    let Some(heading) = doc
        .select(&PROFILE_HEADING_SEL)
        .find(|h| element_text(*h) == heading_label)
    else {
        return Vec::new();
    };
    let Some(list) = heading.next_siblings().find_map(ElementRef::wrap) else {
        return Vec::new();
    };

    let mut topics = Vec::new();
    for item in list.select(&LIST_ITEM_SEL) {
        let Some(name) = item.select(&TOPIC_NAME_SEL).next() else {
            continue;
        };
        let Some(topic_home_url) = resolve_href(name, base) else {
            continue;
        };
        topics.push(TopicRef {
            topic_name: element_text(name),
            topic_home_url,
        });
    }
    topics
}

/// Extract article stubs from a fully paginated topic listing.
///
/// Items lacking a title or nickname element are malformed (ads, deleted
/// entries) and skipped rather than failing the whole extraction. Star and
/// comment counts default to 0 when their icon or its adjacent text node
/// is absent. Output order is document order, the site's default listing
/// order.
#[must_use]
pub fn extract_article_stubs(doc: &Html, base: &Url) -> Vec<ArticleStub> {
    let mut stubs = Vec::new();
    for item in doc.select(&NOTE_ITEM_SEL) {
        let Some(title) = item.select(&NOTE_TITLE_SEL).next() else {
            continue;
        };
        let Some(nickname) = item.select(&NOTE_NICKNAME_SEL).next() else {
            continue;
        };
        let (Some(url), Some(author_home_url)) =
            (resolve_href(title, base), resolve_href(nickname, base))
        else {
            continue;
        };

        // Counter icons sit next to the nickname in the item's meta row.
        let meta = nickname.parent().and_then(ElementRef::wrap).unwrap_or(item);
        stubs.push(ArticleStub {
            title: element_text(title),
            url,
            author_name: element_text(nickname),
            author_home_url,
            star_count: icon_count(meta, &STAR_ICON_SEL),
            comment_count: icon_count(meta, &COMMENT_ICON_SEL),
        });
    }
    stubs
}

/// Extract per-article detail records from a fully paginated author
/// homepage.
///
/// Items without a title link carry no identity and are dropped here so
/// callers only ever see joinable records. Read count defaults to 0 when
/// its icon is absent; the publish time is unset when the timestamp
/// attribute is missing or unparseable.
#[must_use]
pub fn extract_article_details(doc: &Html, base: &Url) -> Vec<ArticleDetail> {
    let mut details = Vec::new();
    for item in doc.select(&NOTE_ITEM_SEL) {
        let Some(url) = item
            .select(&NOTE_TITLE_SEL)
            .next()
            .and_then(|title| resolve_href(title, base))
        else {
            continue;
        };
        let publish_time = item
            .select(&NOTE_TIME_SEL)
            .next()
            .and_then(|time| time.value().attr(SHARED_AT_ATTR))
            .and_then(format_publish_time);
        details.push(ArticleDetail {
            url,
            read_count: icon_count(item, &READ_ICON_SEL),
            publish_time,
        });
    }
    details
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
