use crate::{config::AppConfig, entities::style, errors::ServiceError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Client for the external AI image-generation service.
///
/// This collaborator is optional and best-effort: when it is unconfigured or
/// unreachable the affected style is simply left without an image. No state
/// transition depends on it.
#[derive(Clone)]
pub struct ImagingService {
    client: reqwest::Client,
    api_url: Option<String>,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct GenerateImageRequest {
    prompt: String,
    reference: String,
}

#[derive(Debug, Deserialize)]
struct GenerateImageResponse {
    url: String,
}

impl ImagingService {
    pub fn new(cfg: &AppConfig) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.image_api_timeout_secs))
            .build()
            .map_err(|e| ServiceError::InternalError(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            client,
            api_url: cfg.image_api_url.clone(),
            api_key: cfg.image_api_key.clone(),
        })
    }

    /// Whether an image endpoint is configured at all
    pub fn is_configured(&self) -> bool {
        self.api_url.is_some()
    }

    /// Request a product image for a style. Returns the hosted image URL.
    #[instrument(skip(self, style), fields(style_id = %style.id))]
    pub async fn generate_style_image(&self, style: &style::Model) -> Result<String, ServiceError> {
        let api_url = self.api_url.as_deref().ok_or_else(|| {
            ServiceError::InvalidOperation("Image generation is not configured".to_string())
        })?;

        let prompt = build_prompt(style);
        let payload = GenerateImageRequest {
            prompt,
            reference: style.id.to_string(),
        };

        let mut request = self.client.post(api_url).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            warn!("Image generation request failed: {}", e);
            ServiceError::ExternalServiceError(format!("Image service unreachable: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(ServiceError::ExternalServiceError(format!(
                "Image service returned {}",
                status
            )));
        }

        let body: GenerateImageResponse = response.json().await.map_err(|e| {
            ServiceError::ExternalServiceError(format!("Image service response malformed: {}", e))
        })?;

        info!("Generated image for style {}", style.id);
        Ok(body.url)
    }
}

fn build_prompt(style: &style::Model) -> String {
    let materials = style.material_names().join(", ");
    format!(
        "Product photo of {}, a {} garment made of {}",
        style.name, style.category, materials
    )
}
