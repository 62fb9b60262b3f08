use crate::{
    error::GenerationError,
    generation::{fallback::fallback_image, prompts::image_prompt, Generation},
    models::{GeneratedImage, Platform},
    upstream::ImageService,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct ImageClient {
    service: Option<Arc<dyn ImageService>>,
}

impl ImageClient {
    pub fn new(service: Option<Arc<dyn ImageService>>) -> Self {
        Self { service }
    }

    pub fn backend_name(&self) -> Option<&str> {
        self.service.as_deref().map(|service| service.name())
    }

    pub async fn generate(&self, topic: &str, platform: &Platform) -> Generation<String> {
        let service = match &self.service {
            Some(service) => service,
            None => {
                return Generation::degraded(
                    fallback_image(platform),
                    GenerationError::MissingCredential("HUGGINGFACE_API_KEY"),
                )
            }
        };

        let prompt = image_prompt(topic, platform);
        log::info!("🎨 Generating {} image with {}", platform, service.name());

        match service.synthesize(&prompt).await {
            Ok(image) => Generation::Success(to_data_uri(&image)),
            Err(e) => Generation::degraded(fallback_image(platform), e),
        }
    }
}

pub fn to_data_uri(image: &GeneratedImage) -> String {
    format!(
        "data:{};base64,{}",
        image.content_type,
        STANDARD.encode(&image.bytes)
    )
}
