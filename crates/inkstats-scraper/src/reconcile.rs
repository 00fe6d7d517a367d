//! Three-way reconciliation of topics, article stubs, and author details.
//!
//! Both merge passes are equi-joins on `url`, left-outer from the stub
//! side: every stub survives whether or not a matching detail record
//! exists, and a missing match is never an error — the detail fields
//! simply stay zero/unset.

use std::collections::HashMap;

use crate::types::{Article, ArticleDetail, ArticleStub, Author, AuthorRef, Topic, TopicRef};

/// The fully joined entity graph of one crawl run.
///
/// The topic-scoped and author-scoped views are projections over the same
/// constructed [`Article`] values, so they agree on every field by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedGraph {
    pub topics: Vec<Topic>,
    pub authors: Vec<Author>,
}

/// Distinct authors across all topic listings, in first-seen order.
///
/// One [`AuthorRef`] per distinct `author_home_url`; the first nickname
/// observed for a home URL wins.
#[must_use]
pub fn author_refs(listings: &[(TopicRef, Vec<ArticleStub>)]) -> Vec<AuthorRef> {
    let mut authors: Vec<AuthorRef> = Vec::new();
    for (_, stubs) in listings {
        for stub in stubs {
            if !authors
                .iter()
                .any(|a| a.author_home_url == stub.author_home_url)
            {
                authors.push(AuthorRef {
                    author_name: stub.author_name.clone(),
                    author_home_url: stub.author_home_url.clone(),
                });
            }
        }
    }
    authors
}

/// Join every stub with its author's detail records and group the merged
/// articles by topic and by author.
///
/// `details_by_author` maps an author home URL to the detail records
/// extracted from that author's homepage. For each stub the first detail
/// whose `url` equals the stub's `url` wins; stubs with no match keep
/// default detail fields. A stub whose author is missing from the map
/// entirely is joined against nothing.
///
/// Each article is constructed exactly once and then placed in its
/// owning topic's group and its author's group. Stubs sharing a `url`
/// across topics stay distinct articles, one per owning topic, all
/// grouped under the same author.
#[must_use]
pub fn join(
    listings: &[(TopicRef, Vec<ArticleStub>)],
    details_by_author: &HashMap<String, Vec<ArticleDetail>>,
) -> JoinedGraph {
    let mut topics = Vec::with_capacity(listings.len());
    let mut authors: Vec<Author> = Vec::new();

    for (topic, stubs) in listings {
        let mut topic_articles = Vec::with_capacity(stubs.len());
        for stub in stubs {
            let detail = details_by_author
                .get(&stub.author_home_url)
                .and_then(|details| details.iter().find(|d| d.url == stub.url));
            let article = Article::from_parts(topic, stub.clone(), detail);

            match authors
                .iter_mut()
                .find(|a| a.author_home_url == stub.author_home_url)
            {
                Some(author) => author.articles.push(article.clone()),
                None => authors.push(Author {
                    author_name: stub.author_name.clone(),
                    author_home_url: stub.author_home_url.clone(),
                    articles: vec![article.clone()],
                }),
            }
            topic_articles.push(article);
        }
        topics.push(Topic {
            topic_name: topic.topic_name.clone(),
            topic_home_url: topic.topic_home_url.clone(),
            articles: topic_articles,
        });
    }

    JoinedGraph { topics, authors }
}
