use std::sync::Arc;
use std::sync::Mutex;

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing::warn;

use super::assessor::Assessor;
use crate::error::AssessmentError;
use crate::model::RiskLevel;
use crate::model::RiskVerdict;
use crate::model::is_checkable_address;
use crate::pipeline::datasource::IndexerClient;

pub const LABEL_CHECKING: &str = "Checking Address Safety...";
pub const LABEL_HIGH_RISK: &str = "High Risk - Sending Not Recommended";
pub const LABEL_CONTINUE: &str = "Continue";

/// What the presentation layer renders: the latest request, whether it is
/// still running, and its verdict if it completed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssessmentState {
    pub generation: u64,
    pub address:    Option<String>,
    pub checking:   bool,
    pub verdict:    Option<RiskVerdict>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContinueAction {
    pub enabled: bool,
    pub label:   &'static str,
}

impl AssessmentState {
    pub fn risk_level(&self) -> Option<RiskLevel> {
        self.verdict.as_ref().map(|verdict| verdict.risk_level)
    }

    /// Busy and High block the send flow; everything else, including a
    /// failed assessment, leaves it open.
    pub fn continue_action(&self) -> ContinueAction {
        if self.checking {
            ContinueAction {
                enabled: false,
                label:   LABEL_CHECKING,
            }
        } else if self.risk_level() == Some(RiskLevel::High) {
            ContinueAction {
                enabled: false,
                label:   LABEL_HIGH_RISK,
            }
        } else {
            ContinueAction {
                enabled: true,
                label:   LABEL_CONTINUE,
            }
        }
    }
}

/// Owns the current verdict. Each address change starts a new generation;
/// results from older generations are dropped instead of published.
pub struct AssessmentOrchestrator<C: ?Sized> {
    assessor:  Assessor<C>,
    state:     watch::Sender<AssessmentState>,
    in_flight: Mutex<CancellationToken>,
}

impl<C: IndexerClient + ?Sized + 'static> AssessmentOrchestrator<C> {
    pub fn new(assessor: Assessor<C>) -> Self {
        let (state, _) = watch::channel(AssessmentState::default());
        Self {
            assessor,
            state,
            in_flight: Mutex::new(CancellationToken::new()),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<AssessmentState> {
        self.state.subscribe()
    }

    pub fn current(&self) -> AssessmentState {
        self.state.borrow().clone()
    }

    /// Fire-and-forget. Returns the handle of the spawned assessment, or
    /// `None` when the address is not checkable and the verdict was cleared.
    pub fn on_address_changed(
        self: &Arc<Self>,
        address: &str,
    ) -> Option<JoinHandle<()>> {
        let checkable = is_checkable_address(address);
        let (cancel, generation) = self.supersede(|state| {
            state.address = checkable.then(|| address.to_string());
            state.checking = checkable;
            state.verdict = None;
        });

        if !checkable {
            debug!("address_not_checkable::generation::{}::verdict_cleared", generation);
            return None;
        }

        let orchestrator = Arc::clone(self);
        let address = address.to_string();
        Some(tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("assessment_cancelled::generation::{}::address::{}", generation, address);
                }
                outcome = orchestrator.assessor.assess(&address) => {
                    orchestrator.complete(generation, outcome);
                }
            }
        }))
    }

    // Cancel whatever is running, open the next generation and hand out its
    // token. Token swap and generation bump happen under the same lock.
    fn supersede(
        &self,
        reset: impl FnOnce(&mut AssessmentState),
    ) -> (CancellationToken, u64) {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        in_flight.cancel();
        *in_flight = CancellationToken::new();

        let mut generation = 0;
        self.state.send_modify(|state| {
            state.generation += 1;
            generation = state.generation;
            reset(state);
        });

        (in_flight.clone(), generation)
    }

    /// Publish `outcome` if `generation` is still the latest request.
    fn complete(
        &self,
        generation: u64,
        outcome: Result<RiskVerdict, AssessmentError>,
    ) -> bool {
        let (verdict, failure) = match outcome {
            Ok(verdict) => (Some(verdict), None),
            Err(e) => (None, Some(e)),
        };

        let published = self.state.send_if_modified(|state| {
            if state.generation != generation {
                return false;
            }
            state.checking = false;
            state.verdict = verdict;
            true
        });

        match (published, failure) {
            (false, _) => debug!("stale_result_discarded::generation::{}", generation),
            (true, Some(e)) => warn!("assessment_unavailable::generation::{}::error::{}", generation, e),
            (true, None) => debug!("verdict_published::generation::{}", generation),
        }
        published
    }
}
