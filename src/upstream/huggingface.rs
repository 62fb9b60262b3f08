use crate::{
    config::ImageServiceConfig,
    error::{GenerationError, Result},
    models::{GeneratedImage, ImageGenerationRequest, InferenceErrorBody},
    upstream::{truncate_body, ImageService},
};
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};

const DEFAULT_CONTENT_TYPE: &str = "image/png";

/// Hugging Face hosted inference for text-to-image models.
pub struct HuggingFaceImageService {
    client: Client,
    api_key: String,
    model_url: String,
}

impl HuggingFaceImageService {
    pub fn new(client: Client, config: &ImageServiceConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(GenerationError::MissingCredential("HUGGINGFACE_API_KEY"))?;

        Ok(Self {
            client,
            api_key,
            model_url: config.model_url.clone(),
        })
    }
}

#[async_trait]
impl ImageService for HuggingFaceImageService {
    fn name(&self) -> &str {
        "huggingface"
    }

    async fn synthesize(&self, prompt: &str) -> Result<GeneratedImage> {
        let request = ImageGenerationRequest::new(prompt);

        log::debug!("Requesting image from {}", self.model_url);

        let response = self
            .client
            .post(&self.model_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::SERVICE_UNAVAILABLE {
            let body = response.text().await.unwrap_or_default();
            let estimated_secs = serde_json::from_str::<InferenceErrorBody>(&body)
                .ok()
                .and_then(|parsed| parsed.estimated_time);
            return Err(GenerationError::ModelLoading { estimated_secs });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<InferenceErrorBody>(&body)
                .ok()
                .and_then(|parsed| parsed.error)
                .unwrap_or(body);
            return Err(GenerationError::UpstreamStatus {
                status: status.as_u16(),
                body: truncate_body(&message),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.split(';').next().unwrap_or(value).trim().to_string());

        let content_type = match content_type {
            Some(ct) if ct.starts_with("image/") => ct,
            Some(ct) if ct == "application/json" => {
                return Err(GenerationError::ResponseError(
                    "Expected image bytes, got JSON".into(),
                ))
            }
            _ => DEFAULT_CONTENT_TYPE.to_string(),
        };

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(GenerationError::ResponseError("Empty image payload".into()));
        }

        Ok(GeneratedImage {
            bytes: bytes.to_vec(),
            content_type,
        })
    }
}
