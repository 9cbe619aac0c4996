pub mod fetcher;
pub mod indexer;

pub use fetcher::ResilientFetcher;
pub use indexer::HttpIndexerClient;
pub use indexer::IndexerClient;
