use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use mockall::mock;

use crate::error::FetchError;
use crate::model::BalanceRecord;
use crate::model::RawAccountData;
use crate::model::TransactionPage;
use crate::model::TransferPage;
use crate::pipeline::datasource::IndexerClient;

// Mock for the indexer
mock! {
    pub IndexerClient {}

    #[async_trait]
    impl IndexerClient for IndexerClient {
        async fn fetch_balances(&self, address: &str) -> Result<BalanceRecord, FetchError>;
        async fn fetch_transactions(&self, address: &str) -> Result<TransactionPage, FetchError>;
        async fn fetch_transfers(&self, address: &str) -> Result<TransferPage, FetchError>;
    }
}

/// How the scripted indexer answers for one address.
#[derive(Debug, Clone)]
pub struct Script {
    pub delay: Duration,
    pub data:  Option<RawAccountData>, // None = every fetch is exhausted
}

/// Indexer that sleeps before answering, so tests can interleave requests.
/// Addresses without a script answer immediately with empty data.
#[derive(Debug, Default)]
pub struct ScriptedIndexerClient {
    scripts: HashMap<String, Script>,
}

impl ScriptedIndexerClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(
        mut self,
        address: &str,
        delay: Duration,
        data: RawAccountData,
    ) -> Self {
        self.scripts.insert(address.to_string(), Script { delay, data: Some(data) });
        self
    }

    pub fn fail(
        mut self,
        address: &str,
        delay: Duration,
    ) -> Self {
        self.scripts.insert(address.to_string(), Script { delay, data: None });
        self
    }

    async fn answer(
        &self,
        address: &str,
    ) -> Result<RawAccountData, FetchError> {
        let Some(script) = self.scripts.get(address) else {
            return Ok(RawAccountData::default());
        };
        tokio::time::sleep(script.delay).await;
        script
            .data
            .clone()
            .ok_or_else(|| FetchError::exhausted(address, 2, "scripted failure"))
    }
}

#[async_trait]
impl IndexerClient for ScriptedIndexerClient {
    async fn fetch_balances(
        &self,
        address: &str,
    ) -> Result<BalanceRecord, FetchError> {
        Ok(self.answer(address).await?.balances)
    }

    async fn fetch_transactions(
        &self,
        address: &str,
    ) -> Result<TransactionPage, FetchError> {
        Ok(self.answer(address).await?.transactions)
    }

    async fn fetch_transfers(
        &self,
        address: &str,
    ) -> Result<TransferPage, FetchError> {
        Ok(self.answer(address).await?.transfers)
    }
}
