use serde::{Deserialize, Serialize};

pub const IMAGE_SIZE: u32 = 1024;
pub const INFERENCE_STEPS: u32 = 30;

#[derive(Debug, Clone, Serialize)]
pub struct ImageGenerationRequest {
    pub inputs: String,
    pub parameters: ImageGenerationParameters,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageGenerationParameters {
    pub width: u32,
    pub height: u32,
    pub num_inference_steps: u32,
}

impl ImageGenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            inputs: prompt.into(),
            parameters: ImageGenerationParameters {
                width: IMAGE_SIZE,
                height: IMAGE_SIZE,
                num_inference_steps: INFERENCE_STEPS,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

#[derive(Debug, Deserialize)]
pub struct InferenceErrorBody {
    pub error: Option<String>,
    pub estimated_time: Option<f32>,
}
