pub mod scraper;

pub use scraper::ClusterScraper;
