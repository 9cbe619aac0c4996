use std::fmt;

use serde::Serialize;

use super::profile::BehavioralProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// 0 factors Low, 1-2 Medium, 3+ High.
    pub fn from_factor_count(count: usize) -> Self {
        match count {
            0 => RiskLevel::Low,
            1 | 2 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            RiskLevel::Low => "✅",
            RiskLevel::Medium | RiskLevel::High => "⚠️",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// A triggered heuristic that raises the risk level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RiskFactor {
    NoHistory,
    RecentlyCreated { min_age_days: i64 },
    FewTransactions,
    LimitedInteractions,
    RecentLargeOutflow,
}

impl fmt::Display for RiskFactor {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            RiskFactor::NoHistory => write!(f, "No transaction history found"),
            RiskFactor::RecentlyCreated { min_age_days } => {
                write!(f, "Address is less than {} days old", min_age_days)
            },
            RiskFactor::FewTransactions => write!(f, "Very few transactions"),
            RiskFactor::LimitedInteractions => write!(f, "Limited interaction with other addresses"),
            RiskFactor::RecentLargeOutflow => write!(f, "Contains recent large outgoing transfers"),
        }
    }
}

/// Advisory only, never changes the risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskWarning {
    OutflowHeavy,
    HighFailureRate,
}

impl fmt::Display for RiskWarning {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            RiskWarning::OutflowHeavy => write!(f, "High ratio of outgoing to incoming transactions"),
            RiskWarning::HighFailureRate => write!(f, "High number of failed transactions"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskVerdict {
    pub address:      String,
    pub analysis:     BehavioralProfile,
    pub risk_factors: Vec<RiskFactor>,
    pub warnings:     Vec<RiskWarning>,
    pub risk_level:   RiskLevel,
}

impl RiskVerdict {
    pub fn blocks_continue(&self) -> bool {
        self.risk_level == RiskLevel::High
    }
}

impl fmt::Display for RiskVerdict {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let analysis = &self.analysis;

        writeln!(f, "Address: {}", self.address)?;
        writeln!(
            f,
            "Risk Level: {} {}    ({} transactions)",
            self.risk_level,
            self.risk_level.marker(),
            analysis.total_transactions
        )?;

        let account_age = analysis
            .first_tx_at
            .map(|first| first.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "New Account".to_string());
        writeln!(f, "  Account Age:    {}", account_age)?;
        writeln!(f, "  Interactions:   {}", analysis.unique_interactions)?;
        writeln!(f, "  Contract Calls: {}", analysis.contract_interactions)?;
        writeln!(f, "  NFT Activity:   {}", if analysis.has_nft_activity { "Yes" } else { "No" })?;

        if !self.risk_factors.is_empty() {
            writeln!(f, "Risk Factors:")?;
            for factor in &self.risk_factors {
                writeln!(f, "  • {}", factor)?;
            }
        }

        if !self.warnings.is_empty() {
            writeln!(f, "Warnings:")?;
            for warning in &self.warnings {
                writeln!(f, "  • {}", warning)?;
            }
        }

        Ok(())
    }
}
