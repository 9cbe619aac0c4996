//! Raw documents returned by the Stacks API indexer.
//!
//! Every field defaults so a 404 normalized to the empty shape, or an entry
//! with missing keys, still deserializes.

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StxBalance {
    pub balance:        String,
    pub total_sent:     String,
    pub total_received: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FungibleTokenHolding {
    pub balance:        String,
    pub total_sent:     String,
    pub total_received: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NonFungibleTokenHolding {
    pub count:          String,
    pub total_sent:     String,
    pub total_received: String,
}

/// `/extended/v1/address/{address}/balances`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceRecord {
    pub stx:                 StxBalance,
    pub fungible_tokens:     HashMap<String, FungibleTokenHolding>,
    pub non_fungible_tokens: HashMap<String, NonFungibleTokenHolding>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxStatus {
    Success,
    Pending,
    Failed,
    AbortByResponse,
    AbortByPostCondition,
    #[default]
    #[serde(other)]
    Other,
}

impl TxStatus {
    /// Broader than a `failed`-only count: both `abort_by_*` statuses also
    /// feed the failed-transaction warning.
    pub fn is_failed(&self) -> bool {
        matches!(self, TxStatus::Failed | TxStatus::AbortByResponse | TxStatus::AbortByPostCondition)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxType {
    ContractCall,
    TokenTransfer,
    SmartContract,
    Coinbase,
    PoisonMicroblock,
    TenureChange,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionEntry {
    pub tx_id:               String,
    pub tx_status:           TxStatus,
    pub tx_type:             TxType,
    pub burn_block_time_iso: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferEntry {
    pub sender_address:    String,
    pub recipient_address: String,
    pub amount:            String,
    pub asset_identifier:  Option<String>,
}

/// Paginated list envelope, most recent first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page<T> {
    pub limit:   usize,
    pub offset:  usize,
    pub total:   usize,
    pub results: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            limit:   0,
            offset:  0,
            total:   0,
            results: Vec::new(),
        }
    }
}

pub type TransactionPage = Page<TransactionEntry>;
pub type TransferPage = Page<TransferEntry>;

/// The three documents fetched for one address in one round.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawAccountData {
    pub balances:     BalanceRecord,
    pub transactions: TransactionPage,
    pub transfers:    TransferPage,
}
