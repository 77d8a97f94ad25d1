use crate::{
    config::WorkflowConfig,
    error::{GenerationError, Result},
    models::GeneratePayload,
    service::traits::{ImageService, ServiceResponse},
};
use async_trait::async_trait;
use reqwest::Client;

/// Talks to the `/api/generate` style endpoint over HTTP.
#[derive(Clone)]
pub struct HttpImageService {
    client: Client,
    endpoint: String,
}

impl HttpImageService {
    pub fn new(config: &WorkflowConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| GenerationError::ConfigError(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ImageService for HttpImageService {
    async fn generate(&self, prompt: &str) -> Result<ServiceResponse> {
        let payload = GeneratePayload {
            input: prompt.to_string(),
        };

        log::debug!("POST {} ({} chars)", self.endpoint, prompt.len());

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| GenerationError::RequestError(format!("Generation request failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::ResponseError(e.to_string()))?;

        ServiceResponse::classify(status, &body)
    }
}
