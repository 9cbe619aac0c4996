use crate::engine::orchestrator::AssessmentState;

/// Custom assertions for domain-specific testing
pub struct TestAssertions;

impl TestAssertions {
    /// A published state never mixes a verdict with another address or with a
    /// pending check.
    pub fn assert_state_consistent(state: &AssessmentState) {
        if state.checking {
            assert!(state.verdict.is_none(), "state is checking but still shows a verdict: {:?}", state);
            assert!(state.address.is_some(), "state is checking without an address: {:?}", state);
        }

        if let Some(verdict) = &state.verdict {
            assert_eq!(
                Some(verdict.address.as_str()),
                state.address.as_deref(),
                "verdict for {} surfaced against {:?}",
                verdict.address,
                state.address
            );
        }
    }

    /// The surfaced verdict belongs to `address`.
    pub fn assert_verdict_for(
        state: &AssessmentState,
        address: &str,
    ) {
        Self::assert_state_consistent(state);
        let verdict = state
            .verdict
            .as_ref()
            .unwrap_or_else(|| panic!("expected a verdict for {}, state: {:?}", address, state));
        assert_eq!(verdict.address, address);
    }
}
