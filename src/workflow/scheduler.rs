use super::{
    orchestrator::{short_id, InFlightGuard, Origin, SubmitOutcome},
    GenerationWorkflow,
};
use crate::{
    error::{GenerationError, Result},
    models::GenerationResult,
};

impl GenerationWorkflow {
    /// Generate from the prompt currently in the form, retrying while the
    /// model warms up.
    pub async fn generate(&self) -> Result<GenerationResult> {
        let prompt = self.prompt();
        self.generate_prompt(&prompt).await
    }

    /// Submit `prompt` and drive the retry chain to a terminal outcome.
    pub async fn generate_prompt(&self, prompt: &str) -> Result<GenerationResult> {
        let mut outcome = self.submit(prompt).await?;

        loop {
            outcome = match outcome {
                SubmitOutcome::Generated(result) => return Ok(result),
                SubmitOutcome::Rejected => return Err(GenerationError::Busy),
                SubmitOutcome::WarmingUp { .. } => self
                    .run_scheduled_retry()
                    .await?
                    .ok_or(GenerationError::Cancelled)?,
            };
        }
    }

    /// Wait out the pending delay, then either resubmit the last prompt or
    /// end the chain once the retry budget is spent.
    ///
    /// Returns `Ok(None)` when nothing is scheduled. Dropping the future
    /// during the wait has the same effect as [`GenerationWorkflow::cancel_retry`].
    pub async fn run_scheduled_retry(&self) -> Result<Option<SubmitOutcome>> {
        let (chain_id, delay) = {
            let state = self.lock();
            match state.chain_id {
                Some(chain_id) if state.in_flight && state.retry.is_scheduled() => {
                    (chain_id, state.retry.pending_delay())
                }
                _ => return Ok(None),
            }
        };

        log::info!(
            "Trying again in {:.1} seconds [chain {}]",
            delay.as_secs_f64(),
            short_id(&chain_id)
        );

        let guard = InFlightGuard::arm(self, chain_id);
        let cancelled = self.cancel.notified();
        tokio::pin!(cancelled);
        tokio::select! {
            _ = tokio::time::sleep(delay) => {}
            _ = &mut cancelled => {}
        }
        guard.disarm();

        let prompt = {
            let mut state = self.lock();
            if !state.in_flight
                || !state.retry.is_scheduled()
                || state.chain_id != Some(chain_id)
            {
                return Err(GenerationError::Cancelled);
            }

            if state.retry.is_exhausted() {
                let err = GenerationError::AttemptsExhausted {
                    retries: state.chain_attempts.saturating_sub(1),
                };
                log::warn!("{}", err);
                state.retry.reset();
                state.in_flight = false;
                state.last_error = Some(err.to_string());
                return Err(err);
            }

            state.request.prompt.clone()
        };

        self.attempt(&prompt, Origin::Retry(chain_id)).await.map(Some)
    }

    /// Abandon a scheduled retry. Returns whether one was pending.
    ///
    /// A request that is already on the wire is not interrupted.
    pub fn cancel_retry(&self) -> bool {
        let cancelled = {
            let mut state = self.lock();
            if state.in_flight && state.retry.is_scheduled() {
                state.retry.clear_delay();
                state.in_flight = false;
                state.last_error = Some(GenerationError::Cancelled.to_string());
                true
            } else {
                false
            }
        };

        if cancelled {
            log::info!("Scheduled retry cancelled");
            self.cancel.notify_waiters();
        }
        cancelled
    }
}
