pub mod huggingface;
pub mod openrouter;
pub mod traits;

use crate::{config::Config, error::Result};
use reqwest::Client;
use std::sync::Arc;

pub use huggingface::HuggingFaceImageService;
pub use openrouter::OpenRouterTextService;
pub use traits::{ImageService, TextService};

const MAX_ERROR_BODY: usize = 300;

/// Backends with credentials configured. `None` means fallback only.
#[derive(Clone, Default)]
pub struct UpstreamServices {
    pub image: Option<Arc<dyn ImageService>>,
    pub text: Option<Arc<dyn TextService>>,
}

impl UpstreamServices {
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;

        let image: Option<Arc<dyn ImageService>> = match config.image.api_key {
            Some(_) => Some(Arc::new(HuggingFaceImageService::new(
                client.clone(),
                &config.image,
            )?)),
            None => {
                log::warn!("HUGGINGFACE_API_KEY not set, images will use fallback content");
                None
            }
        };

        let text: Option<Arc<dyn TextService>> = match config.caption.api_key {
            Some(_) => Some(Arc::new(OpenRouterTextService::new(client, &config.caption)?)),
            None => {
                log::warn!("OPENROUTER_API_KEY not set, captions will use fallback content");
                None
            }
        };

        Ok(Self { image, text })
    }

    pub fn with_image(mut self, service: Arc<dyn ImageService>) -> Self {
        self.image = Some(service);
        self
    }

    pub fn with_text(mut self, service: Arc<dyn TextService>) -> Self {
        self.text = Some(service);
        self
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => format!("{}…", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CaptionServiceConfig, ImageServiceConfig};

    #[test]
    fn test_no_credentials_no_backends() {
        let services = UpstreamServices::from_config(&Config::new()).unwrap();
        assert!(services.image.is_none());
        assert!(services.text.is_none());
    }

    #[test]
    fn test_credentials_build_backends() {
        let config = Config::new()
            .with_image(ImageServiceConfig::new().with_credentials("hf"))
            .with_caption(CaptionServiceConfig::new().with_credentials("or"));
        let services = UpstreamServices::from_config(&config).unwrap();
        assert_eq!(services.image.unwrap().name(), "huggingface");
        assert_eq!(services.text.unwrap().name(), "openrouter");
    }

    #[test]
    fn test_truncate_body() {
        assert_eq!(truncate_body("  short  "), "short");
        let long = "x".repeat(MAX_ERROR_BODY + 10);
        let clipped = truncate_body(&long);
        assert_eq!(clipped.chars().count(), MAX_ERROR_BODY + 1);
    }
}
