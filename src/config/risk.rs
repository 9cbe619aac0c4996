use serde::Deserialize;
use serde::Serialize;

/// Thresholds for the risk classifier.
///
/// Tier assignment itself (0 factors Low, 1-2 Medium, 3+ High) is not
/// configurable; only the conditions that trigger each factor are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskPolicyConfig {
    pub min_account_age_days:    i64,
    pub min_transactions:        usize,
    pub min_counterparties:      usize,
    pub large_outflow_threshold: f64, // STX
    pub recent_transfer_window:  usize,
    pub outflow_ratio_threshold: f64,
    pub max_failed_transactions: usize,
}

impl Default for RiskPolicyConfig {
    fn default() -> Self {
        Self {
            min_account_age_days:    30,
            min_transactions:        5,
            min_counterparties:      3,
            large_outflow_threshold: 10_000.0,
            recent_transfer_window:  10,
            outflow_ratio_threshold: 0.1,
            max_failed_transactions: 5,
        }
    }
}
