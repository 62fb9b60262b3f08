pub mod caption_client;
pub mod cleanup;
pub mod fallback;
pub mod image_client;
pub mod prompts;

use crate::{
    error::GenerationError,
    logger,
    models::{DegradedFlags, PostContext},
    upstream::UpstreamServices,
};
use futures::FutureExt;
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

pub use caption_client::CaptionClient;
pub use image_client::ImageClient;

/// `Degraded` carries fallback content; only `Failure` is a server error.
#[derive(Debug, Clone, PartialEq)]
pub enum Generation<T> {
    Success(T),
    Degraded { content: T, reason: String },
    Failure(String),
}

impl<T> Generation<T> {
    pub fn degraded(content: T, reason: GenerationError) -> Self {
        Generation::Degraded {
            content,
            reason: reason.to_string(),
        }
    }

    pub fn content(&self) -> Option<&T> {
        match self {
            Generation::Success(content) | Generation::Degraded { content, .. } => Some(content),
            Generation::Failure(_) => None,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Generation::Degraded { .. })
    }

    pub fn into_content(self) -> Result<T, String> {
        match self {
            Generation::Success(content) | Generation::Degraded { content, .. } => Ok(content),
            Generation::Failure(reason) => Err(reason),
        }
    }

    fn log_degradation(&self, what: &str, request_id: &str) {
        if let Generation::Degraded { reason, .. } = self {
            log::warn!("[req:{}] {} served from fallback: {}", request_id, what, reason);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPost {
    pub image_url: String,
    pub caption: String,
    pub degraded: DegradedFlags,
}

#[derive(Clone, Default)]
pub struct GenerationClient {
    image_client: ImageClient,
    caption_client: CaptionClient,
}

impl GenerationClient {
    pub fn new(services: UpstreamServices) -> Self {
        Self {
            image_client: ImageClient::new(services.image),
            caption_client: CaptionClient::new(services.text),
        }
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }

    pub fn caption(&self) -> &CaptionClient {
        &self.caption_client
    }

    pub async fn generate_image(&self, context: &PostContext) -> Generation<String> {
        let result = guarded(self.image_client.generate(&context.topic, &context.platform)).await;
        result.log_degradation("image", &context.request_id);
        result
    }

    pub async fn generate_caption(&self, context: &PostContext) -> Generation<String> {
        let result = guarded(self.caption_client.generate(
            &context.topic,
            &context.platform,
            &context.tone,
            context.instructions.as_deref(),
        ))
        .await;
        result.log_degradation("caption", &context.request_id);
        result
    }

    pub async fn generate_post(&self, context: &PostContext) -> Result<GeneratedPost, String> {
        let _timer = logger::timer(format!("[req:{}] post generation", context.request_id));

        let (image, caption) =
            tokio::join!(self.generate_image(context), self.generate_caption(context));

        let degraded = DegradedFlags {
            image: image.is_degraded(),
            caption: caption.is_degraded(),
        };

        Ok(GeneratedPost {
            image_url: image.into_content()?,
            caption: caption.into_content()?,
            degraded,
        })
    }
}

async fn guarded<F>(future: F) -> Generation<String>
where
    F: Future<Output = Generation<String>>,
{
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => Generation::Failure(panic_message(payload.as_ref())),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "generator panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GenerationRequest, Platform};

    fn context(topic: &str) -> PostContext {
        GenerationRequest {
            topic: Some(topic.to_string()),
            ..Default::default()
        }
        .validate()
        .unwrap()
    }

    #[tokio::test]
    async fn test_post_without_services_is_fully_degraded() {
        let client = GenerationClient::default();
        let post = client.generate_post(&context("coffee")).await.unwrap();

        assert_eq!(post.image_url, fallback::fallback_image(&Platform::Instagram));
        assert!(post.caption.contains("#coffee"));
        assert_eq!(
            post.degraded,
            DegradedFlags {
                image: true,
                caption: true
            }
        );
    }

    async fn explode() -> Generation<String> {
        panic!("kaboom")
    }

    #[tokio::test]
    async fn test_guarded_catches_panics() {
        let result = guarded(explode()).await;
        assert_eq!(result, Generation::Failure("kaboom".to_string()));

        let result = guarded(async { Generation::Success("ok".to_string()) }).await;
        assert_eq!(result.into_content(), Ok("ok".to_string()));
    }

    #[test]
    fn test_generation_accessors() {
        let degraded = Generation::degraded("x", GenerationError::Timeout);
        assert!(degraded.is_degraded());
        assert_eq!(degraded.content(), Some(&"x"));

        let failure: Generation<&str> = Generation::Failure("bad".into());
        assert_eq!(failure.content(), None);
        assert_eq!(failure.into_content(), Err("bad".to_string()));
    }
}
