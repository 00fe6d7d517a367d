use scraper::Html;
use url::Url;

use super::*;

fn base() -> Url {
    Url::parse("https://www.jianshu.com/c/current").expect("valid base url")
}

// -----------------------------------------------------------------------
// extract_topics
// -----------------------------------------------------------------------

const PROFILE_PAGE: &str = r#"
<div class="main">
  <div class="title">Articles</div>
  <ul><li><a class="name" href="/c/unrelated">Not a collection</a></li></ul>
  <div class="title">Collections</div>
  <ul class="list">
    <li><a class="name" href="/c/topic-a">Topic A</a></li>
    <li><span class="placeholder">entry without a name anchor</span></li>
    <li><a class="name" href="https://other.example/c/topic-b">Topic B</a></li>
  </ul>
</div>
"#;

#[test]
fn topics_are_taken_from_the_matching_section_only() {
    let doc = Html::parse_document(PROFILE_PAGE);
    let topics = extract_topics(&doc, "Collections", &base());

    assert_eq!(topics.len(), 2);
    assert_eq!(topics[0].topic_name, "Topic A");
    assert_eq!(topics[0].topic_home_url, "https://www.jianshu.com/c/topic-a");
    assert_eq!(topics[1].topic_name, "Topic B");
    assert_eq!(topics[1].topic_home_url, "https://other.example/c/topic-b");
}

#[test]
fn topics_missing_heading_yields_empty() {
    let doc = Html::parse_document(PROFILE_PAGE);
    assert!(extract_topics(&doc, "Somebody else's label", &base()).is_empty());
}

#[test]
fn topics_heading_match_is_exact_not_substring() {
    let doc = Html::parse_document(PROFILE_PAGE);
    assert!(extract_topics(&doc, "Collection", &base()).is_empty());
}

#[test]
fn topics_item_without_name_anchor_is_skipped() {
    let doc = Html::parse_document(PROFILE_PAGE);
    let topics = extract_topics(&doc, "Collections", &base());
    assert!(topics.iter().all(|t| !t.topic_name.is_empty()));
}

#[test]
fn topics_heading_without_following_list_yields_empty() {
    let doc = Html::parse_document(r#"<div class="title">Collections</div>"#);
    assert!(extract_topics(&doc, "Collections", &base()).is_empty());
}

#[test]
fn topics_name_anchor_without_href_is_skipped() {
    let html = r#"
      <div class="title">Collections</div>
      <ul><li><span class="name">No link</span></li></ul>
    "#;
    let doc = Html::parse_document(html);
    assert!(extract_topics(&doc, "Collections", &base()).is_empty());
}

// -----------------------------------------------------------------------
// extract_article_stubs
// -----------------------------------------------------------------------

const TOPIC_LISTING: &str = r#"
<ul class="note-list">
  <li>
    <a class="title" href="/p/url1">First article</a>
    <div class="meta">
      <a class="nickname" href="/u/alice">Alice</a>
      <i class="ic-list-like"></i> 12
      <i class="ic-list-comments"></i> 3
    </div>
  </li>
  <li>
    <div class="ad-banner">sponsored entry without title or nickname</div>
  </li>
  <li>
    <a class="title" href="/p/url2">Second article</a>
    <div class="meta">
      <a class="nickname" href="/u/bob">Bob</a>
    </div>
  </li>
</ul>
"#;

#[test]
fn stubs_extracted_in_document_order() {
    let doc = Html::parse_document(TOPIC_LISTING);
    let stubs = extract_article_stubs(&doc, &base());

    assert_eq!(stubs.len(), 2);
    assert_eq!(stubs[0].title, "First article");
    assert_eq!(stubs[0].url, "https://www.jianshu.com/p/url1");
    assert_eq!(stubs[0].author_name, "Alice");
    assert_eq!(stubs[0].author_home_url, "https://www.jianshu.com/u/alice");
    assert_eq!(stubs[0].star_count, 12);
    assert_eq!(stubs[0].comment_count, 3);
    assert_eq!(stubs[1].url, "https://www.jianshu.com/p/url2");
}

#[test]
fn stubs_malformed_item_is_skipped_silently() {
    let doc = Html::parse_document(TOPIC_LISTING);
    let stubs = extract_article_stubs(&doc, &base());
    assert!(stubs.iter().all(|s| !s.title.is_empty()));
}

#[test]
fn stubs_missing_counter_icons_default_to_zero() {
    let doc = Html::parse_document(TOPIC_LISTING);
    let stubs = extract_article_stubs(&doc, &base());
    assert_eq!(stubs[1].star_count, 0);
    assert_eq!(stubs[1].comment_count, 0);
}

#[test]
fn stubs_icon_without_adjacent_text_defaults_to_zero() {
    let html = r#"
      <ul class="note-list">
        <li>
          <a class="title" href="/p/url3">Article</a>
          <div class="meta">
            <a class="nickname" href="/u/carol">Carol</a>
            <i class="ic-list-like"></i><i class="ic-list-comments"></i> 5
          </div>
        </li>
      </ul>
    "#;
    let doc = Html::parse_document(html);
    let stubs = extract_article_stubs(&doc, &base());
    assert_eq!(stubs[0].star_count, 0);
    assert_eq!(stubs[0].comment_count, 5);
}

#[test]
fn stubs_item_missing_nickname_is_skipped() {
    let html = r#"
      <ul class="note-list">
        <li><a class="title" href="/p/orphan">No author shown</a></li>
      </ul>
    "#;
    let doc = Html::parse_document(html);
    assert!(extract_article_stubs(&doc, &base()).is_empty());
}

#[test]
fn stubs_empty_listing_yields_empty() {
    let doc = Html::parse_document("<ul class=\"note-list\"></ul>");
    assert!(extract_article_stubs(&doc, &base()).is_empty());
}

// -----------------------------------------------------------------------
// extract_article_details
// -----------------------------------------------------------------------

const AUTHOR_HOME: &str = r#"
<ul class="note-list">
  <li>
    <a class="title" href="/p/url1">First article</a>
    <i class="ic-list-read"></i> 100
    <span class="time" data-shared-at="2019-05-01T12:30:45+08:00"></span>
  </li>
  <li>
    <div class="deleted">entry without a title link</div>
  </li>
  <li>
    <a class="title" href="/p/url2">Second article</a>
  </li>
</ul>
"#;

#[test]
fn details_extracted_with_read_count_and_publish_time() {
    let doc = Html::parse_document(AUTHOR_HOME);
    let details = extract_article_details(&doc, &base());

    assert_eq!(details.len(), 2);
    assert_eq!(details[0].url, "https://www.jianshu.com/p/url1");
    assert_eq!(details[0].read_count, 100);
    assert_eq!(details[0].publish_time.as_deref(), Some("2019-05-01 12:30"));
}

#[test]
fn details_item_without_title_link_is_dropped() {
    let doc = Html::parse_document(AUTHOR_HOME);
    let details = extract_article_details(&doc, &base());
    assert!(details.iter().all(|d| !d.url.is_empty()));
    assert_eq!(details.len(), 2);
}

#[test]
fn details_missing_read_icon_defaults_to_zero() {
    let doc = Html::parse_document(AUTHOR_HOME);
    let details = extract_article_details(&doc, &base());
    assert_eq!(details[1].read_count, 0);
}

#[test]
fn details_missing_time_attribute_leaves_publish_time_unset() {
    let doc = Html::parse_document(AUTHOR_HOME);
    let details = extract_article_details(&doc, &base());
    assert!(details[1].publish_time.is_none());
}

#[test]
fn details_unparseable_time_attribute_is_treated_as_absent() {
    let html = r#"
      <ul class="note-list">
        <li>
          <a class="title" href="/p/url4">Article</a>
          <span class="time" data-shared-at="three days ago"></span>
        </li>
      </ul>
    "#;
    let doc = Html::parse_document(html);
    let details = extract_article_details(&doc, &base());
    assert!(details[0].publish_time.is_none());
}
