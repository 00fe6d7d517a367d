pub mod aggregate;
pub mod crawl;
pub mod driver;
pub mod error;
pub mod extract;
mod extract_helpers;
pub mod paginator;
pub mod reconcile;
pub mod report;
pub mod testing;
pub mod types;

pub use crawl::run;
pub use driver::{HttpPage, PageDriver};
pub use error::ScraperError;
pub use report::CrawlReports;
pub use types::{Article, ArticleDetail, ArticleStub, Author, AuthorRef, Topic, TopicRef};
