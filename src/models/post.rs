use crate::{
    error::ApiError,
    models::{Platform, Tone},
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationRequest {
    #[serde(default, alias = "prompt")]
    pub topic: Option<String>,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub instructions: Option<String>,
}

impl GenerationRequest {
    pub fn validate(self) -> Result<PostContext, ApiError> {
        let topic = self
            .topic
            .as_deref()
            .map(str::trim)
            .filter(|topic| !topic.is_empty())
            .ok_or_else(|| ApiError::Validation("Topic is required".to_string()))?
            .to_string();

        let instructions = self
            .instructions
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());

        Ok(PostContext {
            request_id: Uuid::new_v4().to_string(),
            topic,
            platform: self.platform,
            tone: self.tone,
            instructions,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PostContext {
    pub request_id: String,
    pub topic: String,
    pub platform: Platform,
    pub tone: Tone,
    pub instructions: Option<String>,
}

/// Which halves of a response came from fallback content.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DegradedFlags {
    pub image: bool,
    pub caption: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub success: bool,
    pub image_url: String,
    pub caption: String,
    pub platform: Platform,
    pub tone: Tone,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degraded: Option<DegradedFlags>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub success: bool,
    pub image_url: String,
    pub platform: Platform,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degraded: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionResponse {
    pub success: bool,
    pub caption: String,
    pub platform: Platform,
    pub tone: Tone,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degraded: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
