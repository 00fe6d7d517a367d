//! Serialized report shapes.
//!
//! Key names and field order are a consumer contract: each report opens
//! with the grand totals (`articleCount`, `readCount`), then the group
//! count where applicable, then the entries. Group entries lead with
//! their own counts, then the group identity, then the sorted articles.
//! `publishTime` is omitted, not null, for articles whose detail record
//! never surfaced.

use serde::Serialize;

use crate::types::Article;

/// Flat view: every article of the run, ranked by read count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatReport {
    pub article_count: usize,
    pub read_count: u64,
    pub articles: Vec<Article>,
}

/// Per-topic statistics view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicReport {
    pub article_count: usize,
    pub read_count: u64,
    pub topic_count: usize,
    pub topics: Vec<TopicStats>,
}

/// One topic's entry in the topic view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicStats {
    pub article_count: usize,
    pub read_count: u64,
    pub topic_name: String,
    pub topic_home_url: String,
    pub articles: Vec<Article>,
}

/// Per-author statistics view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorReport {
    pub article_count: usize,
    pub read_count: u64,
    pub author_count: usize,
    pub authors: Vec<AuthorStats>,
}

/// One author's entry in the author view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorStats {
    pub article_count: usize,
    pub read_count: u64,
    pub author_name: String,
    pub author_home_url: String,
    pub articles: Vec<Article>,
}

/// The three report artifacts of one crawl run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlReports {
    pub articles: FlatReport,
    pub topics: TopicReport,
    pub authors: AuthorReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(url: &str, read_count: u64, publish_time: Option<&str>) -> Article {
        Article {
            topic_name: "t".to_owned(),
            topic_home_url: "https://x.test/c/t".to_owned(),
            title: "a title".to_owned(),
            url: url.to_owned(),
            author_name: "alice".to_owned(),
            author_home_url: "https://x.test/u/alice".to_owned(),
            star_count: 1,
            comment_count: 2,
            read_count,
            publish_time: publish_time.map(ToOwned::to_owned),
        }
    }

    #[test]
    fn flat_report_serializes_totals_before_articles() {
        let report = FlatReport {
            article_count: 1,
            read_count: 5,
            articles: vec![article("u1", 5, Some("2020-01-01 00:00"))],
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(
            json.starts_with(r#"{"articleCount":1,"readCount":5,"articles":["#),
            "unexpected key order: {json}"
        );
        assert!(json.contains(r#""publishTime":"2020-01-01 00:00""#));
    }

    #[test]
    fn article_omits_publish_time_when_unset() {
        let json = serde_json::to_string(&article("u1", 0, None)).unwrap();
        assert!(!json.contains("publishTime"), "expected omission: {json}");
        assert!(json.contains(r#""readCount":0"#));
    }

    #[test]
    fn article_keys_are_camel_case() {
        let json = serde_json::to_string(&article("u1", 3, None)).unwrap();
        for key in [
            "topicName",
            "topicHomeUrl",
            "authorName",
            "authorHomeUrl",
            "starCount",
            "commentCount",
            "readCount",
        ] {
            assert!(json.contains(&format!(r#""{key}""#)), "missing {key}: {json}");
        }
    }

    #[test]
    fn topic_report_carries_group_count_key() {
        let report = TopicReport {
            article_count: 0,
            read_count: 0,
            topic_count: 0,
            topics: Vec::new(),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"articleCount":0,"readCount":0,"topicCount":0,"topics":[]}"#
        );
    }

    #[test]
    fn author_report_carries_group_count_key() {
        let report = AuthorReport {
            article_count: 0,
            read_count: 0,
            author_count: 0,
            authors: Vec::new(),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"articleCount":0,"readCount":0,"authorCount":0,"authors":[]}"#
        );
    }
}
