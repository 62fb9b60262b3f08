use crate::{error::Result, models::GeneratedImage};
use async_trait::async_trait;

#[async_trait]
pub trait ImageService: Send + Sync {
    /// Short backend name used in logs and the health report.
    fn name(&self) -> &str;

    async fn synthesize(&self, prompt: &str) -> Result<GeneratedImage>;
}

#[async_trait]
pub trait TextService: Send + Sync {
    fn name(&self) -> &str;

    async fn complete(&self, prompt: &str) -> Result<String>;
}
