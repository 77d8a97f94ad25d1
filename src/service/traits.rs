use crate::{
    error::{GenerationError, Result},
    models::{ImageReference, ServiceBody},
};
use async_trait::async_trait;

/// Status the endpoint answers with while the backing model is loading.
pub const WARMING_UP_STATUS: u16 = 503;

#[async_trait]
pub trait ImageService: Send + Sync {
    /// Send one generation request. Transport problems are errors; any
    /// answer from the service, good or bad, is a `ServiceResponse`.
    async fn generate(&self, prompt: &str) -> Result<ServiceResponse>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum ServiceResponse {
    Image(ImageReference),
    WarmingUp { estimated_time: Option<f64> },
    Failed { status: u16, message: String },
}

impl ServiceResponse {
    /// Classify a raw HTTP status and body.
    pub fn classify(status: u16, body: &str) -> Result<ServiceResponse> {
        let parsed: Option<ServiceBody> = serde_json::from_str(body).ok();

        if status == WARMING_UP_STATUS {
            return Ok(ServiceResponse::WarmingUp {
                estimated_time: parsed.and_then(|b| b.estimated_time),
            });
        }

        if !(200..300).contains(&status) {
            let message = parsed
                .and_then(|b| b.error)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| {
                    if body.trim().is_empty() {
                        format!("HTTP {}", status)
                    } else {
                        body.trim().to_string()
                    }
                });
            return Ok(ServiceResponse::Failed { status, message });
        }

        let parsed = parsed.ok_or_else(|| {
            GenerationError::ResponseError("Success response was not valid JSON".into())
        })?;

        match parsed.image {
            Some(image) if !image.is_empty() => Ok(ServiceResponse::Image(ImageReference::new(image))),
            _ => Err(GenerationError::ResponseError(
                "Success response carried no image".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_success() {
        let response = ServiceResponse::classify(200, r#"{"image":"http://img/1.png"}"#).unwrap();
        assert_eq!(
            response,
            ServiceResponse::Image(ImageReference::new("http://img/1.png"))
        );
    }

    #[test]
    fn test_classify_warming_up() {
        let response =
            ServiceResponse::classify(503, r#"{"error":"loading","estimated_time":5.0}"#).unwrap();
        assert_eq!(
            response,
            ServiceResponse::WarmingUp {
                estimated_time: Some(5.0)
            }
        );

        let bare = ServiceResponse::classify(503, "Service Unavailable").unwrap();
        assert_eq!(bare, ServiceResponse::WarmingUp { estimated_time: None });
    }

    #[test]
    fn test_classify_failure_prefers_error_field() {
        let response = ServiceResponse::classify(400, r#"{"error":"bad input"}"#).unwrap();
        assert_eq!(
            response,
            ServiceResponse::Failed {
                status: 400,
                message: "bad input".into()
            }
        );

        let raw = ServiceResponse::classify(502, "upstream down").unwrap();
        assert_eq!(
            raw,
            ServiceResponse::Failed {
                status: 502,
                message: "upstream down".into()
            }
        );

        let empty = ServiceResponse::classify(500, "").unwrap();
        assert_eq!(
            empty,
            ServiceResponse::Failed {
                status: 500,
                message: "HTTP 500".into()
            }
        );
    }

    #[test]
    fn test_success_without_image_is_an_error() {
        assert!(ServiceResponse::classify(200, "{}").is_err());
        assert!(ServiceResponse::classify(200, "not json").is_err());
    }
}
