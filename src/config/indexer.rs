use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;
use url::Url;

use crate::constants::DEFAULT_BASE_RETRY_DELAY_MS;
use crate::constants::DEFAULT_MAX_ATTEMPTS;
use crate::constants::DEFAULT_PAGE_LIMIT;
use crate::constants::DEFAULT_REQUEST_TIMEOUT_MS;
use crate::constants::STACKS_MAINNET_API;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexerConfig {
    pub base_url:            Url,
    pub page_limit:          usize, // most-recent N transactions / transfers
    pub max_attempts:        usize, // total attempts per request, not retries
    pub base_retry_delay_ms: u64,
    pub request_timeout_ms:  u64,
}

impl IndexerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            base_url:            Url::parse(STACKS_MAINNET_API).expect("static indexer url"),
            page_limit:          DEFAULT_PAGE_LIMIT,
            max_attempts:        DEFAULT_MAX_ATTEMPTS,
            base_retry_delay_ms: DEFAULT_BASE_RETRY_DELAY_MS,
            request_timeout_ms:  DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}
