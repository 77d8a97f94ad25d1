pub mod orchestrator;
pub mod scheduler;

use crate::{
    config::WorkflowConfig,
    error::Result,
    models::{GenerationRequest, GenerationResult, PromptField, PromptParameters, RetryState},
    prompt::PromptForm,
    service::{HttpImageService, ImageService},
};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::Notify;
use uuid::Uuid;

pub use orchestrator::SubmitOutcome;

/// Everything the workflow mutates. Only touched under the lock in
/// `GenerationWorkflow`, and the lock is never held across an await.
#[derive(Debug)]
pub(crate) struct WorkflowState {
    pub(crate) form: PromptForm,
    pub(crate) request: GenerationRequest,
    pub(crate) in_flight: bool,
    pub(crate) retry: RetryState,
    pub(crate) result: Option<GenerationResult>,
    pub(crate) last_error: Option<String>,
    /// Identifies the chain that currently owns `in_flight`.
    pub(crate) chain_id: Option<Uuid>,
    pub(crate) chain_attempts: u32,
}

impl WorkflowState {
    fn new(config: &WorkflowConfig) -> Self {
        Self {
            form: PromptForm::from_config(config),
            request: GenerationRequest::default(),
            in_flight: false,
            retry: RetryState::new(config.max_retries),
            result: None,
            last_error: None,
            chain_id: None,
            chain_attempts: 0,
        }
    }
}

/// Read-only view for whatever renders the form.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowSnapshot {
    pub params: PromptParameters,
    pub prompt: String,
    pub manually_edited: bool,
    pub request: GenerationRequest,
    pub in_flight: bool,
    pub retry: RetryState,
    pub result: Option<GenerationResult>,
    pub last_error: Option<String>,
}

/// Handle to one avatar generation session.
///
/// Clones share the same state, so a UI event handler and a running retry
/// chain can both hold one.
#[derive(Clone)]
pub struct GenerationWorkflow {
    config: Arc<WorkflowConfig>,
    service: Arc<dyn ImageService>,
    state: Arc<Mutex<WorkflowState>>,
    cancel: Arc<Notify>,
}

impl GenerationWorkflow {
    pub fn new(config: WorkflowConfig, service: Arc<dyn ImageService>) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            state: Arc::new(Mutex::new(WorkflowState::new(&config))),
            config: Arc::new(config),
            service,
            cancel: Arc::new(Notify::new()),
        })
    }

    pub fn with_http(config: WorkflowConfig) -> Result<Self> {
        let service = HttpImageService::new(&config)?;
        Self::new(config, Arc::new(service))
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, WorkflowState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> WorkflowSnapshot {
        let state = self.lock();
        WorkflowSnapshot {
            params: state.form.params().clone(),
            prompt: state.form.prompt().to_string(),
            manually_edited: state.form.is_manually_edited(),
            request: state.request.clone(),
            in_flight: state.in_flight,
            retry: state.retry.clone(),
            result: state.result.clone(),
            last_error: state.last_error.clone(),
        }
    }

    pub fn prompt(&self) -> String {
        self.lock().form.prompt().to_string()
    }

    pub fn params(&self) -> PromptParameters {
        self.lock().form.params().clone()
    }

    pub fn is_in_flight(&self) -> bool {
        self.lock().in_flight
    }

    pub fn retry_state(&self) -> RetryState {
        self.lock().retry.clone()
    }

    pub fn result(&self) -> Option<GenerationResult> {
        self.lock().result.clone()
    }

    pub fn last_error(&self) -> Option<String> {
        self.lock().last_error.clone()
    }

    pub fn set_style(&self, style: impl Into<String>) {
        self.set_field(PromptField::Style, style);
    }

    pub fn set_artist(&self, artist: impl Into<String>) {
        self.set_field(PromptField::Artist, artist);
    }

    pub fn set_finishing_touches(&self, finishing_touches: impl Into<String>) {
        self.set_field(PromptField::FinishingTouches, finishing_touches);
    }

    pub fn set_field(&self, field: PromptField, value: impl Into<String>) {
        self.lock().form.set_field(field, value);
    }

    pub fn edit_prompt(&self, text: impl Into<String>) {
        self.lock().form.edit_prompt(text);
    }

    pub fn reset_prompt(&self) {
        self.lock().form.reset_prompt();
    }
}

impl std::fmt::Debug for GenerationWorkflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationWorkflow")
            .field("endpoint", &self.config.endpoint)
            .field("state", &*self.lock())
            .finish()
    }
}
