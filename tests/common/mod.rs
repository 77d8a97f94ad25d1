#![allow(dead_code)]

use async_trait::async_trait;
use avatargen::{GenerationError, ImageReference, ImageService, Result, ServiceResponse};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Step {
    Respond(ServiceResponse),
    Unreachable(String),
}

pub fn image(url: &str) -> Step {
    Step::Respond(ServiceResponse::Image(ImageReference::new(url)))
}

pub fn warming_up(estimated_time: Option<f64>) -> Step {
    Step::Respond(ServiceResponse::WarmingUp { estimated_time })
}

pub fn failed(status: u16, message: &str) -> Step {
    Step::Respond(ServiceResponse::Failed {
        status,
        message: message.to_string(),
    })
}

/// Answers from a script, then repeats `fallback` once the script runs dry.
pub struct ScriptedService {
    script: Mutex<VecDeque<Step>>,
    fallback: Step,
    latency: Option<Duration>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedService {
    pub fn new(script: Vec<Step>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback: failed(500, "script exhausted"),
            latency: None,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn always(step: Step) -> Self {
        Self {
            fallback: step,
            ..Self::new(Vec::new())
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageService for ScriptedService {
    async fn generate(&self, prompt: &str) -> Result<ServiceResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let step = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());

        match step {
            Step::Respond(response) => Ok(response),
            Step::Unreachable(message) => Err(GenerationError::RequestError(message)),
        }
    }
}
