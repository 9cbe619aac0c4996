use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::fetch::FetchError;

/// Indexer document an aggregation step depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Balances,
    Transactions,
    Transfers,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Balances => "balances",
            Endpoint::Transactions => "transactions",
            Endpoint::Transfers => "transfers",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum AssessmentError {
    /// Not a failure: the address is not worth checking.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// One of the concurrent fetches failed; the whole aggregation is dropped.
    #[error("Aggregation failed on {endpoint}: {source}")]
    PartialAggregationFailure {
        endpoint: Endpoint,
        #[source]
        source:   FetchError,
    },
}

impl AssessmentError {
    /// The assessment could not be completed and the verdict is unknown.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, AssessmentError::PartialAggregationFailure { .. })
    }
}
