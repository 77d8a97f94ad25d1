use crate::error::{GenerationError, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The prompt text currently sitting in the request box.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prompt.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.prompt.clear();
    }
}

/// Image returned by the service: either a plain URL or a base64 `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageReference(String);

impl ImageReference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_data_url(&self) -> bool {
        self.0.starts_with("data:")
    }

    pub fn media_type(&self) -> Option<&str> {
        let header = self.0.strip_prefix("data:")?.split(',').next()?;
        let media = header.split(';').next()?;
        (!media.is_empty()).then_some(media)
    }

    /// Raw image bytes for a base64 data URL. Plain URLs have nothing to decode.
    pub fn decode(&self) -> Result<Option<Vec<u8>>> {
        if !self.is_data_url() {
            return Ok(None);
        }

        let (header, payload) = self
            .0
            .split_once(',')
            .ok_or_else(|| GenerationError::ResponseError("Malformed data URL".into()))?;

        if !header.ends_with(";base64") {
            return Err(GenerationError::ResponseError(
                "Only base64 data URLs are supported".into(),
            ));
        }

        BASE64
            .decode(payload.trim())
            .map(Some)
            .map_err(|e| GenerationError::ResponseError(format!("Invalid image data: {}", e)))
    }
}

impl std::fmt::Display for ImageReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub image_url: ImageReference,
    pub prompt_used: String,
    pub generated_at: DateTime<Utc>,
    /// Number of service calls the chain needed, the first one included.
    pub attempts: u32,
}

/// Body posted to the generation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePayload {
    pub input: String,
}

/// Union of the fields the endpoint may answer with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceBody {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub estimated_time: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}
