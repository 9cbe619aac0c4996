use std::sync::Arc;

use tracing::debug;
use tracing::info;

use crate::error::AssessmentError;
use crate::model::CheckableAddress;
use crate::model::RiskVerdict;
use crate::pipeline::datasource::IndexerClient;
use crate::pipeline::processor::AccountDataAggregator;
use crate::pipeline::processor::RiskClassifier;

/// validate -> aggregate -> classify, for one address.
pub struct Assessor<C: ?Sized> {
    aggregator: AccountDataAggregator<C>,
    classifier: RiskClassifier,
}

impl<C: ?Sized> Clone for Assessor<C> {
    fn clone(&self) -> Self {
        Self {
            aggregator: self.aggregator.clone(),
            classifier: self.classifier.clone(),
        }
    }
}

impl<C: IndexerClient + ?Sized> Assessor<C> {
    pub fn new(
        client: Arc<C>,
        classifier: RiskClassifier,
    ) -> Self {
        Self {
            aggregator: AccountDataAggregator::new(client),
            classifier,
        }
    }

    pub async fn assess(
        &self,
        address: &str,
    ) -> Result<RiskVerdict, AssessmentError> {
        let address =
            CheckableAddress::parse(address).ok_or_else(|| AssessmentError::InvalidAddress(address.to_string()))?;

        debug!("assessment_started::address::{}::kind::{:?}", address, address.kind());
        let profile = self.aggregator.aggregate(address.as_str()).await?;
        let verdict = self.classifier.classify(profile, address.as_str());

        info!(
            "assessment_completed::address::{}::risk_level::{}::factors::{}::warnings::{}",
            address,
            verdict.risk_level,
            verdict.risk_factors.len(),
            verdict.warnings.len()
        );
        Ok(verdict)
    }
}
