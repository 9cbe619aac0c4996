use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use reqwest::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_json::json;
use tokio_retry::Retry;
use tracing::debug;
use tracing::error;
use tracing::warn;
use url::Url;

use crate::error::FetchError;
use crate::utils::LinearBackoff;

/// Shape the indexer would return for an address it has never seen.
pub fn empty_shape() -> Value {
    json!({
        "results": [],
        "stx": { "balance": "0", "total_sent": "0", "total_received": "0" },
        "fungible_tokens": {},
        "non_fungible_tokens": {},
    })
}

/// GET with linear-backoff retries. A 404 is an empty document, not an error.
#[derive(Debug, Clone)]
pub struct ResilientFetcher {
    client:              Client,
    base_retry_delay_ms: u64,
}

impl ResilientFetcher {
    pub fn new(
        client: Client,
        base_retry_delay_ms: u64,
    ) -> Self {
        Self {
            client,
            base_retry_delay_ms,
        }
    }

    /// Make up to `max_attempts` requests (at least one), sleeping
    /// `n * base_retry_delay` after the n-th failure.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        url: &Url,
        query: &[(&str, String)],
        max_attempts: usize,
    ) -> Result<T, FetchError> {
        let max_attempts = max_attempts.max(1);
        let attempts = AtomicUsize::new(0);
        let strategy = LinearBackoff::from_millis(self.base_retry_delay_ms).take(max_attempts - 1);

        let attempts_ref = &attempts;
        let outcome = Retry::spawn(strategy, move || async move {
            let attempt = attempts_ref.fetch_add(1, Ordering::Relaxed) + 1;
            self.try_once::<T>(url, query, attempt, max_attempts).await
        })
        .await;

        match outcome {
            Ok(Some(document)) => Ok(document),
            Ok(None) => Ok(serde_json::from_value(empty_shape())?),
            Err(e) => {
                let attempts = attempts.load(Ordering::Relaxed);
                error!("fetch_exhausted::attempts::{}::url::{}::error::{}", attempts, url, e);
                Err(FetchError::exhausted(url.as_str(), attempts, e))
            },
        }
    }

    // Ok(None) on 404
    async fn try_once<T: DeserializeOwned>(
        &self,
        url: &Url,
        query: &[(&str, String)],
        attempt: usize,
        max_attempts: usize,
    ) -> Result<Option<T>, reqwest::Error> {
        debug!("fetch::attempt::{}/{}::url::{}", attempt, max_attempts, url);

        let result: Result<Option<T>, reqwest::Error> = async {
            let response = self.client.get(url.clone()).query(query).send().await?;
            if response.status() == StatusCode::NOT_FOUND {
                debug!("resource_not_found::normalized_to_empty::url::{}", url);
                return Ok(None);
            }
            let document = response.error_for_status()?.json::<T>().await?;
            Ok(Some(document))
        }
        .await;

        if let Err(e) = &result {
            warn!("fetch_failed::attempt::{}/{}::url::{}::error::{}", attempt, max_attempts, url, e);
        }
        result
    }
}
