use super::GenerationWorkflow;
use crate::{
    error::{GenerationError, Result},
    logger,
    models::{GenerationRequest, GenerationResult},
    service::ServiceResponse,
};
use chrono::Utc;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The service answered with an image.
    Generated(GenerationResult),
    /// The model is loading; a retry is scheduled after `delay`.
    WarmingUp { delay: Duration },
    /// Another generation already owns the workflow. Nothing was sent.
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Origin {
    Manual,
    Retry(Uuid),
}

/// Releases the workflow if the owning future is dropped mid-await, either
/// while a request is on the wire or while a retry is waiting.
pub(crate) struct InFlightGuard<'a> {
    workflow: &'a GenerationWorkflow,
    chain_id: Uuid,
    armed: bool,
}

impl<'a> InFlightGuard<'a> {
    pub(crate) fn arm(workflow: &'a GenerationWorkflow, chain_id: Uuid) -> Self {
        Self {
            workflow,
            chain_id,
            armed: true,
        }
    }

    pub(crate) fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = self.workflow.lock();
        if state.in_flight && state.chain_id == Some(self.chain_id) {
            log::warn!(
                "Generation chain {} abandoned before completion",
                short_id(&self.chain_id)
            );
            state.in_flight = false;
            state.retry.clear_delay();
            state.last_error = Some(GenerationError::Cancelled.to_string());
        }
    }
}

impl GenerationWorkflow {
    /// Send `prompt` once.
    ///
    /// Rejected without a network call while another generation is in
    /// flight. A warming-up answer leaves the workflow in flight with a retry
    /// scheduled; drive it with [`GenerationWorkflow::run_scheduled_retry`].
    pub async fn submit(&self, prompt: &str) -> Result<SubmitOutcome> {
        self.attempt(prompt, Origin::Manual).await
    }

    pub(crate) async fn attempt(&self, prompt: &str, origin: Origin) -> Result<SubmitOutcome> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(GenerationError::EmptyPrompt);
        }

        let chain_id = {
            let mut state = self.lock();

            let chain_id = match origin {
                Origin::Manual => {
                    if state.in_flight {
                        log::warn!("Generation already in flight, ignoring submit");
                        return Ok(SubmitOutcome::Rejected);
                    }
                    let chain_id = Uuid::new_v4();
                    state.chain_id = Some(chain_id);
                    state.chain_attempts = 0;
                    chain_id
                }
                Origin::Retry(chain_id) => {
                    if !state.in_flight
                        || !state.retry.is_scheduled()
                        || state.chain_id != Some(chain_id)
                    {
                        log::debug!("No retry pending for this chain, ignoring");
                        return Ok(SubmitOutcome::Rejected);
                    }
                    state.retry.consume();
                    chain_id
                }
            };

            state.in_flight = true;
            state.chain_attempts += 1;
            state.request = GenerationRequest::new(prompt);
            state.last_error = None;

            log::info!(
                "Submitting prompt [chain {}] attempt {} ({} retries left)",
                short_id(&chain_id),
                state.chain_attempts,
                state.retry.remaining_attempts
            );
            chain_id
        };

        let guard = InFlightGuard::arm(self, chain_id);
        let response = {
            let _timer = logger::timer("image generation request");
            self.service.generate(prompt).await
        };
        guard.disarm();

        self.classify(prompt, response)
    }

    fn classify(&self, prompt: &str, response: Result<ServiceResponse>) -> Result<SubmitOutcome> {
        let mut state = self.lock();

        match response {
            Ok(ServiceResponse::Image(image)) => {
                let result = GenerationResult {
                    image_url: image,
                    prompt_used: prompt.to_string(),
                    generated_at: Utc::now(),
                    attempts: state.chain_attempts,
                };

                state.result = Some(result.clone());
                state.request.clear();
                state.form.clear_prompt();
                state.in_flight = false;
                state.retry.clear_delay();

                log::info!("Image generated after {} attempt(s)", result.attempts);
                Ok(SubmitOutcome::Generated(result))
            }
            Ok(ServiceResponse::WarmingUp { estimated_time }) => {
                let delay = self.retry_delay(estimated_time);
                state.retry.schedule(delay);

                log::info!(
                    "Model is still loading, estimated wait {:.1}s",
                    delay.as_secs_f64()
                );
                Ok(SubmitOutcome::WarmingUp { delay })
            }
            Ok(ServiceResponse::Failed { status, message }) => {
                let err = GenerationError::RequestFailed { status, message };
                Self::fail(&mut state, &err);
                Err(err)
            }
            Err(err) => {
                Self::fail(&mut state, &err);
                Err(err)
            }
        }
    }

    fn fail(state: &mut super::WorkflowState, err: &GenerationError) {
        log::error!("Error: {}", err);
        state.in_flight = false;
        state.retry.clear_delay();
        state.last_error = Some(err.to_string());
    }

    fn retry_delay(&self, estimated_time: Option<f64>) -> Duration {
        match estimated_time {
            Some(seconds) if seconds > 0.0 => Duration::try_from_secs_f64(seconds)
                .unwrap_or(self.config.min_retry_delay),
            _ => self.config.min_retry_delay,
        }
    }
}

pub(crate) fn short_id(id: &Uuid) -> String {
    id.simple().to_string()[..8].to_string()
}
