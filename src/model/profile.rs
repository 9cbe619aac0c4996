use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

/// One transfer from the sampled list, amounts in STX.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferSummary {
    pub sender:    String,
    pub recipient: String,
    pub amount:    f64,
}

/// Behavioral summary of an address, built from the most recent page of its
/// history. Counts describe the sample, not the full history.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BehavioralProfile {
    pub stx_balance:           f64,
    pub total_transactions:    usize,
    pub first_tx_at:           Option<DateTime<Utc>>,
    pub recent_tx_at:          Option<DateTime<Utc>>,
    pub unique_interactions:   usize,
    pub nft_count:             usize,
    pub nft_transactions:      usize,
    pub contract_interactions: usize,
    pub failed_transactions:   usize,
    pub total_sent:            f64,
    pub total_received:        f64,
    pub has_nft_activity:      bool,
    /// Most recent first.
    pub transfers:             Vec<TransferSummary>,
}

impl BehavioralProfile {
    /// Whole days between the first sampled transaction and `now`.
    pub fn account_age_days(
        &self,
        now: DateTime<Utc>,
    ) -> Option<i64> {
        self.first_tx_at.map(|first| (now - first).num_days())
    }

    /// received / sent, if anything was ever sent.
    pub fn inflow_ratio(&self) -> Option<f64> {
        (self.total_sent > 0.0).then(|| self.total_received / self.total_sent)
    }
}
