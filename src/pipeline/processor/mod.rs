pub mod aggregator;
pub mod classifier;

pub use aggregator::AccountDataAggregator;
pub use aggregator::reduce_account_data;
pub use classifier::RiskClassifier;
