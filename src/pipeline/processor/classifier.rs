use chrono::DateTime;
use chrono::Utc;

use crate::config::RiskPolicyConfig;
use crate::model::BehavioralProfile;
use crate::model::RiskFactor;
use crate::model::RiskLevel;
use crate::model::RiskVerdict;
use crate::model::RiskWarning;

/// Maps a profile to a verdict. Stateless apart from its thresholds.
#[derive(Debug, Clone, Default)]
pub struct RiskClassifier {
    policy: RiskPolicyConfig,
}

impl RiskClassifier {
    pub fn new(policy: RiskPolicyConfig) -> Self {
        Self { policy }
    }

    pub fn classify(
        &self,
        profile: BehavioralProfile,
        address: &str,
    ) -> RiskVerdict {
        self.classify_at(profile, address, Utc::now())
    }

    /// Same as [`classify`](Self::classify) with an explicit clock for the age rule.
    pub fn classify_at(
        &self,
        profile: BehavioralProfile,
        address: &str,
        now: DateTime<Utc>,
    ) -> RiskVerdict {
        let risk_factors = self.risk_factors(&profile, address, now);
        let warnings = self.warnings(&profile);
        let risk_level = RiskLevel::from_factor_count(risk_factors.len());

        RiskVerdict {
            address: address.to_string(),
            analysis: profile,
            risk_factors,
            warnings,
            risk_level,
        }
    }

    fn risk_factors(
        &self,
        profile: &BehavioralProfile,
        address: &str,
        now: DateTime<Utc>,
    ) -> Vec<RiskFactor> {
        let policy = &self.policy;
        let mut factors = Vec::new();

        match profile.account_age_days(now) {
            None => factors.push(RiskFactor::NoHistory),
            Some(age) if age < policy.min_account_age_days => factors.push(RiskFactor::RecentlyCreated {
                min_age_days: policy.min_account_age_days,
            }),
            Some(_) => {},
        }

        if profile.total_transactions < policy.min_transactions {
            factors.push(RiskFactor::FewTransactions);
        }

        if profile.unique_interactions < policy.min_counterparties {
            factors.push(RiskFactor::LimitedInteractions);
        }

        let has_large_outflow = profile
            .transfers
            .iter()
            .take(policy.recent_transfer_window)
            .any(|transfer| transfer.sender == address && transfer.amount > policy.large_outflow_threshold);
        if has_large_outflow {
            factors.push(RiskFactor::RecentLargeOutflow);
        }

        factors
    }

    fn warnings(
        &self,
        profile: &BehavioralProfile,
    ) -> Vec<RiskWarning> {
        let mut warnings = Vec::new();

        if profile
            .inflow_ratio()
            .is_some_and(|ratio| ratio < self.policy.outflow_ratio_threshold)
        {
            warnings.push(RiskWarning::OutflowHeavy);
        }

        if profile.failed_transactions > self.policy.max_failed_transactions {
            warnings.push(RiskWarning::HighFailureRate);
        }

        warnings
    }
}
