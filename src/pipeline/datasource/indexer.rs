use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::fetcher::ResilientFetcher;
use crate::config::IndexerConfig;
use crate::error::ConfigError;
use crate::error::Endpoint;
use crate::error::FetchError;
use crate::model::BalanceRecord;
use crate::model::TransactionPage;
use crate::model::TransferPage;

/// Read-only access to per-address history on the indexer.
#[async_trait]
pub trait IndexerClient: Send + Sync {
    async fn fetch_balances(
        &self,
        address: &str,
    ) -> Result<BalanceRecord, FetchError>;

    /// Most recent first, capped at the configured page size.
    async fn fetch_transactions(
        &self,
        address: &str,
    ) -> Result<TransactionPage, FetchError>;

    /// Most recent first, capped at the configured page size.
    async fn fetch_transfers(
        &self,
        address: &str,
    ) -> Result<TransferPage, FetchError>;
}

/// Stacks API indexer over HTTP.
#[derive(Debug, Clone)]
pub struct HttpIndexerClient {
    fetcher: ResilientFetcher,
    config:  IndexerConfig,
}

impl HttpIndexerClient {
    pub fn new(config: IndexerConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ConfigError::ClientError(e.to_string()))?;

        Ok(Self::with_client(client, config))
    }

    pub fn with_client(
        client: Client,
        config: IndexerConfig,
    ) -> Self {
        Self {
            fetcher: ResilientFetcher::new(client, config.base_retry_delay_ms),
            config,
        }
    }

    pub fn endpoint_url(
        &self,
        address: &str,
        endpoint: Endpoint,
    ) -> Result<Url, FetchError> {
        let mut base = self.config.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base.join(&format!("extended/v1/address/{}/{}", address, endpoint))?)
    }

    fn page_query(&self) -> [(&'static str, String); 2] {
        [("limit", self.config.page_limit.to_string()), ("offset", "0".to_string())]
    }
}

#[async_trait]
impl IndexerClient for HttpIndexerClient {
    async fn fetch_balances(
        &self,
        address: &str,
    ) -> Result<BalanceRecord, FetchError> {
        let url = self.endpoint_url(address, Endpoint::Balances)?;
        debug!("fetching_balances::address::{}", address);
        self.fetcher.fetch(&url, &[], self.config.max_attempts).await
    }

    async fn fetch_transactions(
        &self,
        address: &str,
    ) -> Result<TransactionPage, FetchError> {
        let url = self.endpoint_url(address, Endpoint::Transactions)?;
        debug!("fetching_transactions::address::{}::limit::{}", address, self.config.page_limit);
        self.fetcher.fetch(&url, &self.page_query(), self.config.max_attempts).await
    }

    async fn fetch_transfers(
        &self,
        address: &str,
    ) -> Result<TransferPage, FetchError> {
        let url = self.endpoint_url(address, Endpoint::Transfers)?;
        debug!("fetching_transfers::address::{}::limit::{}", address, self.config.page_limit);
        self.fetcher.fetch(&url, &self.page_query(), self.config.max_attempts).await
    }
}
