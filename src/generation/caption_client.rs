use crate::{
    error::GenerationError,
    generation::{
        cleanup::clean_caption, fallback::fallback_caption, prompts::caption_prompt, Generation,
    },
    models::{Platform, Tone},
    upstream::TextService,
};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct CaptionClient {
    service: Option<Arc<dyn TextService>>,
}

impl CaptionClient {
    pub fn new(service: Option<Arc<dyn TextService>>) -> Self {
        Self { service }
    }

    pub fn backend_name(&self) -> Option<&str> {
        self.service.as_deref().map(|service| service.name())
    }

    pub async fn generate(
        &self,
        topic: &str,
        platform: &Platform,
        tone: &Tone,
        instructions: Option<&str>,
    ) -> Generation<String> {
        let fallback = || fallback_caption(topic, platform, tone);

        let service = match &self.service {
            Some(service) => service,
            None => {
                return Generation::degraded(
                    fallback(),
                    GenerationError::MissingCredential("OPENROUTER_API_KEY"),
                )
            }
        };

        let prompt = caption_prompt(topic, platform, tone, instructions);
        log::info!(
            "✍️  Generating {} {} caption with {}",
            tone,
            platform,
            service.name()
        );

        match service.complete(&prompt).await {
            Ok(raw) => {
                let caption = clean_caption(&raw);
                if caption.is_empty() {
                    Generation::degraded(
                        fallback(),
                        GenerationError::ResponseError("Caption was empty after cleanup".into()),
                    )
                } else {
                    Generation::Success(caption)
                }
            }
            Err(e) => Generation::degraded(fallback(), e),
        }
    }
}
