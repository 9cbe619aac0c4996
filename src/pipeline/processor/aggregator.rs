use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

use chrono::DateTime;
use chrono::Utc;
use tracing::debug;
use tracing::warn;

use crate::error::AssessmentError;
use crate::error::Endpoint;
use crate::error::FetchError;
use crate::model::BehavioralProfile;
use crate::model::RawAccountData;
use crate::model::TransferSummary;
use crate::model::indexer::TransactionEntry;
use crate::model::indexer::TxType;
use crate::pipeline::datasource::IndexerClient;
use crate::utils::parse_micro_amount;

/// Fetches the three account documents concurrently and reduces them into a
/// [`BehavioralProfile`].
pub struct AccountDataAggregator<C: ?Sized> {
    client: Arc<C>,
}

impl<C: ?Sized> Clone for AccountDataAggregator<C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
        }
    }
}

impl<C: IndexerClient + ?Sized> AccountDataAggregator<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// All three documents or nothing: one failed fetch fails the round.
    pub async fn fetch(
        &self,
        address: &str,
    ) -> Result<RawAccountData, AssessmentError> {
        let (balances, transactions, transfers) = tokio::try_join!(
            tag(Endpoint::Balances, self.client.fetch_balances(address)),
            tag(Endpoint::Transactions, self.client.fetch_transactions(address)),
            tag(Endpoint::Transfers, self.client.fetch_transfers(address)),
        )?;

        Ok(RawAccountData {
            balances,
            transactions,
            transfers,
        })
    }

    pub async fn aggregate(
        &self,
        address: &str,
    ) -> Result<BehavioralProfile, AssessmentError> {
        let raw = self.fetch(address).await?;
        let profile = reduce_account_data(&raw);
        debug!(
            "aggregated::address::{}::transactions::{}::transfers::{}::interactions::{}",
            address,
            profile.total_transactions,
            profile.transfers.len(),
            profile.unique_interactions
        );
        Ok(profile)
    }
}

async fn tag<T>(
    endpoint: Endpoint,
    fetch: impl Future<Output = Result<T, FetchError>>,
) -> Result<T, AssessmentError> {
    fetch.await.map_err(|source| {
        warn!("aggregation_failed::endpoint::{}::error::{}", endpoint, source);
        AssessmentError::PartialAggregationFailure { endpoint, source }
    })
}

fn burn_time(entry: Option<&TransactionEntry>) -> Option<DateTime<Utc>> {
    let raw = entry?.burn_block_time_iso.as_deref()?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(time) => Some(time.with_timezone(&Utc)),
        Err(e) => {
            warn!("unparseable_burn_block_time::{}::error::{}", raw, e);
            None
        },
    }
}

/// Reduce one fetch round. Lists are most recent first.
pub fn reduce_account_data(raw: &RawAccountData) -> BehavioralProfile {
    let transactions = &raw.transactions.results;
    let transfers = &raw.transfers.results;
    let stx = &raw.balances.stx;

    let unique_interactions = transfers
        .iter()
        .flat_map(|transfer| [transfer.sender_address.as_str(), transfer.recipient_address.as_str()])
        .collect::<HashSet<_>>()
        .len();

    // exactly one base unit, the closest thing to an NFT marker the list has
    let nft_transactions = transfers
        .iter()
        .filter(|transfer| transfer.amount.trim() == "1")
        .count();
    let nft_count = raw.balances.non_fungible_tokens.len();

    let contract_interactions = transactions
        .iter()
        .filter(|tx| tx.tx_type == TxType::ContractCall)
        .count();
    let failed_transactions = transactions.iter().filter(|tx| tx.tx_status.is_failed()).count();

    let transfers = transfers
        .iter()
        .map(|transfer| TransferSummary {
            sender:    transfer.sender_address.clone(),
            recipient: transfer.recipient_address.clone(),
            amount:    parse_micro_amount(&transfer.amount),
        })
        .collect();

    BehavioralProfile {
        stx_balance: parse_micro_amount(&stx.balance),
        total_transactions: transactions.len(),
        first_tx_at: burn_time(transactions.last()),
        recent_tx_at: burn_time(transactions.first()),
        unique_interactions,
        nft_count,
        nft_transactions,
        contract_interactions,
        failed_transactions,
        total_sent: parse_micro_amount(&stx.total_sent),
        total_received: parse_micro_amount(&stx.total_received),
        has_nft_activity: nft_count > 0 || nft_transactions > 0,
        transfers,
    }
}
