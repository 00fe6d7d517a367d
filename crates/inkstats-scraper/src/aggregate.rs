//! Aggregation of the joined entity graph into the three report views.
//!
//! Pure functions of the graph: no I/O, no mutation of the input, and all
//! sorts are stable — aggregating the same graph twice yields identical
//! output, including tie order.

use crate::reconcile::JoinedGraph;
use crate::report::{AuthorReport, AuthorStats, CrawlReports, FlatReport, TopicReport, TopicStats};
use crate::types::Article;

/// Build the flat, per-topic, and per-author report views.
///
/// The flat view ranks every article descending by read count. Both
/// grouped views rank groups descending by article count and each group's
/// articles descending by read count. All three carry the same grand
/// totals, computed once over the flat article set. Ties keep their prior
/// order: author-group order (then document order) for the flat view,
/// discovery and listing order inside the grouped views.
#[must_use]
pub fn reports(graph: &JoinedGraph) -> CrawlReports {
    let mut flat: Vec<Article> = graph
        .authors
        .iter()
        .flat_map(|author| author.articles.iter().cloned())
        .collect();
    let article_count = flat.len();
    let read_count = read_sum(&flat);
    sort_by_read_desc(&mut flat);

    let mut topics: Vec<TopicStats> = graph
        .topics
        .iter()
        .map(|t| {
            let mut articles = t.articles.clone();
            sort_by_read_desc(&mut articles);
            TopicStats {
                article_count: articles.len(),
                read_count: read_sum(&articles),
                topic_name: t.topic_name.clone(),
                topic_home_url: t.topic_home_url.clone(),
                articles,
            }
        })
        .collect();
    topics.sort_by(|a, b| b.article_count.cmp(&a.article_count));

    let mut authors: Vec<AuthorStats> = graph
        .authors
        .iter()
        .map(|a| {
            let mut articles = a.articles.clone();
            sort_by_read_desc(&mut articles);
            AuthorStats {
                article_count: articles.len(),
                read_count: read_sum(&articles),
                author_name: a.author_name.clone(),
                author_home_url: a.author_home_url.clone(),
                articles,
            }
        })
        .collect();
    authors.sort_by(|a, b| b.article_count.cmp(&a.article_count));

    CrawlReports {
        articles: FlatReport {
            article_count,
            read_count,
            articles: flat,
        },
        topics: TopicReport {
            article_count,
            read_count,
            topic_count: topics.len(),
            topics,
        },
        authors: AuthorReport {
            article_count,
            read_count,
            author_count: authors.len(),
            authors,
        },
    }
}

fn read_sum(articles: &[Article]) -> u64 {
    articles.iter().map(|a| a.read_count).sum()
}

/// Stable descending sort, so equal read counts keep their prior order.
fn sort_by_read_desc(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.read_count.cmp(&a.read_count));
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
