pub mod address;
pub mod indexer;
pub mod profile;
pub mod verdict;

pub use address::AddressKind;
pub use address::CheckableAddress;
pub use address::is_checkable_address;
pub use indexer::BalanceRecord;
pub use indexer::RawAccountData;
pub use indexer::TransactionPage;
pub use indexer::TransferPage;
pub use profile::BehavioralProfile;
pub use profile::TransferSummary;
pub use verdict::RiskFactor;
pub use verdict::RiskLevel;
pub use verdict::RiskVerdict;
pub use verdict::RiskWarning;
