//! Avatar prompt builder and image generation workflow.
//!
//! A [`GenerationWorkflow`] owns the prompt form, submits prompts to an
//! [`ImageService`], and retries while the service reports that its model is
//! still loading.

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod prompt;
pub mod service;
pub mod workflow;

pub use config::{PromptDefaults, WorkflowConfig};
pub use error::{GenerationError, Result};
pub use models::{
    GenerationRequest, GenerationResult, ImageReference, PromptField, PromptParameters,
    RetryState,
};
pub use prompt::{assemble, PromptForm};
pub use service::{HttpImageService, ImageService, ServiceResponse};
pub use workflow::{GenerationWorkflow, SubmitOutcome, WorkflowSnapshot};
