use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Countdown for the warming-up retry chain.
///
/// `pending_delay_seconds > 0` means a retry is scheduled. The ceiling is
/// restored once the budget runs out so the next manual attempt starts fresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryState {
    pub pending_delay_seconds: f64,
    pub remaining_attempts: u32,
    pub ceiling: u32,
}

impl RetryState {
    pub fn new(ceiling: u32) -> Self {
        Self {
            pending_delay_seconds: 0.0,
            remaining_attempts: ceiling,
            ceiling,
        }
    }

    pub fn is_scheduled(&self) -> bool {
        self.pending_delay_seconds > 0.0
    }

    pub fn pending_delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.pending_delay_seconds).unwrap_or_default()
    }

    pub fn schedule(&mut self, delay: Duration) {
        self.pending_delay_seconds = delay.as_secs_f64();
    }

    /// Uses one unit of the retry budget and clears the pending delay.
    pub fn consume(&mut self) {
        self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
        self.pending_delay_seconds = 0.0;
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining_attempts == 0
    }

    pub fn clear_delay(&mut self) {
        self.pending_delay_seconds = 0.0;
    }

    pub fn reset(&mut self) {
        self.remaining_attempts = self.ceiling;
        self.pending_delay_seconds = 0.0;
    }
}
