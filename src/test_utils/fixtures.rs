use chrono::DateTime;
use chrono::Duration;
use chrono::TimeZone;
use chrono::Utc;

use crate::model::BehavioralProfile;
use crate::model::RawAccountData;
use crate::model::TransferSummary;
use crate::model::indexer::NonFungibleTokenHolding;
use crate::model::indexer::StxBalance;
use crate::model::indexer::TransactionEntry;
use crate::model::indexer::TransferEntry;
use crate::model::indexer::TxStatus;
use crate::model::indexer::TxType;

/// Test fixtures for creating consistent test data
pub struct TestFixtures;

impl TestFixtures {
    pub const ADDRESS: &'static str = "SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7";
    pub const OTHER_ADDRESS: &'static str = "SM2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKQVX8X0G";
    pub const PEER_A: &'static str = "SP3FBR2AGK5H9QBDH3EEN6DF8EK8JY7RX8QJ5SVTE";
    pub const PEER_B: &'static str = "SP1P72Z3704VMT3DMHPP2CB8TGQWGDBHD3RPR9GZS";

    /// Fixed clock so age rules are reproducible
    pub fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap()
    }

    pub fn transaction(
        status: TxStatus,
        tx_type: TxType,
        burn_block_time_iso: Option<&str>,
    ) -> TransactionEntry {
        TransactionEntry {
            tx_id: format!("0x{:064x}", tx_id_seed(burn_block_time_iso)),
            tx_status: status,
            tx_type,
            burn_block_time_iso: burn_block_time_iso.map(str::to_string),
        }
    }

    pub fn transfer(
        sender: &str,
        recipient: &str,
        amount: &str,
    ) -> TransferEntry {
        TransferEntry {
            sender_address: sender.to_string(),
            recipient_address: recipient.to_string(),
            amount: amount.to_string(),
            asset_identifier: None,
        }
    }

    /// Small account: 3 transactions (1 failed, 1 contract call), 2 transfers, 1 NFT.
    pub fn raw_account_data(address: &str) -> RawAccountData {
        let mut data = RawAccountData::default();

        data.balances.stx = StxBalance {
            balance:        "1500000".to_string(),
            total_sent:     "250000".to_string(),
            total_received: "1750000".to_string(),
        };
        data.balances.non_fungible_tokens.insert(
            "SP2X0TZ59D5SZ8ACQ6YMCHHNR2ZN51Z32E2CJ173.the-explorer-guild::The-Explorer-Guild".to_string(),
            NonFungibleTokenHolding {
                count:          "1".to_string(),
                total_sent:     "0".to_string(),
                total_received: "1".to_string(),
            },
        );

        data.transactions.results = vec![
            Self::transaction(TxStatus::Success, TxType::ContractCall, Some("2024-06-01T12:00:00.000Z")),
            Self::transaction(TxStatus::Failed, TxType::TokenTransfer, Some("2023-09-10T00:00:00.000Z")),
            Self::transaction(TxStatus::Success, TxType::TokenTransfer, Some("2023-01-15T08:30:00.000Z")),
        ];
        data.transactions.limit = 50;
        data.transactions.total = 3;

        data.transfers.results = vec![
            Self::transfer(Self::PEER_A, address, "2000000"),
            Self::transfer(address, Self::PEER_B, "1"),
        ];
        data.transfers.limit = 50;
        data.transfers.total = 2;

        data
    }

    /// Old, busy account with no risk factors relative to `now`.
    pub fn established_profile(now: DateTime<Utc>) -> BehavioralProfile {
        let peers = [
            "SP1P72Z3704VMT3DMHPP2CB8TGQWGDBHD3RPR9GZS",
            "SP3FBR2AGK5H9QBDH3EEN6DF8EK8JY7RX8QJ5SVTE",
            "SP2C2YFP12AJZB4MABJBAJ55XECVS7E4PMMZ89YZR",
            "SP1H1733V5MZ3SZ9XRW9FKYGEZT0JDGEB8Y634C7R",
            "SP3K8BC0PPEVCV7NZ6QSRWPQ2JE9E5B6N3PA0KBR9",
            "SP2PABAF9FTAJYNFZH93XENAJ8FVY99RRM50D2JG9",
            "SPQZF23W7SEYBFG5JQ496NMY0G7379SRYEDREMSV",
            "SP4SZE494VC2YC5JYG7AYFQ44F5Q4PYV7DVMDPBG",
            "SP1Y5YSTAHZ88XYK1VPDH24GY0HPX5J4JECTMY4A1",
        ];

        let transfers = (0..12)
            .map(|i| {
                let peer = peers[i % peers.len()].to_string();
                if i % 2 == 0 {
                    TransferSummary {
                        sender:    peer,
                        recipient: Self::ADDRESS.to_string(),
                        amount:    100.0,
                    }
                } else {
                    TransferSummary {
                        sender:    Self::ADDRESS.to_string(),
                        recipient: peer,
                        amount:    50.0,
                    }
                }
            })
            .collect();

        BehavioralProfile {
            stx_balance: 600.0,
            total_transactions: 40,
            first_tx_at: Some(now - Duration::days(120)),
            recent_tx_at: Some(now - Duration::days(1)),
            unique_interactions: 10,
            nft_count: 0,
            nft_transactions: 0,
            contract_interactions: 5,
            failed_transactions: 0,
            total_sent: 600.0,
            total_received: 1_200.0,
            has_nft_activity: false,
            transfers,
        }
    }
}

fn tx_id_seed(seed: Option<&str>) -> u64 {
    seed.map(|s| s.bytes().fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64)))
        .unwrap_or_default()
}
