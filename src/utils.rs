use std::time::Duration;

use crate::constants::MICRO_UNITS_PER_STX;

/// Convert micro-STX to STX
pub fn micro_to_stx(micro: u128) -> f64 {
    micro as f64 / MICRO_UNITS_PER_STX as f64
}

/// Parse an indexer amount string (integer micro-units) into STX.
/// Anything that is not a plain unsigned integer counts as zero.
pub fn parse_micro_amount(raw: &str) -> f64 {
    micro_to_stx(raw.trim().parse::<u128>().unwrap_or_default())
}

/// Linear backoff: delay = attempt * base
pub fn linear_backoff(
    attempt: u32,
    base_delay_ms: u64,
) -> Duration {
    Duration::from_millis(base_delay_ms.saturating_mul(attempt as u64))
}

/// Delays between attempts, starting at attempt 1.
///
/// Unbounded; callers `take(max_attempts - 1)` to get a retry budget.
#[derive(Debug, Clone)]
pub struct LinearBackoff {
    base_delay_ms: u64,
    attempt: u32,
}

impl LinearBackoff {
    pub fn from_millis(base_delay_ms: u64) -> Self {
        Self {
            base_delay_ms,
            attempt: 0,
        }
    }
}

impl Iterator for LinearBackoff {
    type Item = Duration;

    fn next(&mut self) -> Option<Self::Item> {
        self.attempt = self.attempt.saturating_add(1);
        Some(linear_backoff(self.attempt, self.base_delay_ms))
    }
}
