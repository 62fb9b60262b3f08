use crate::{
    config::CaptionServiceConfig,
    error::{GenerationError, Result},
    models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage},
    upstream::{truncate_body, TextService},
};
use async_trait::async_trait;
use reqwest::Client;

/// OpenAI-compatible chat completions endpoint (OpenRouter by default).
pub struct OpenRouterTextService {
    client: Client,
    api_key: String,
    config: CaptionServiceConfig,
}

impl OpenRouterTextService {
    pub fn new(client: Client, config: &CaptionServiceConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(GenerationError::MissingCredential("OPENROUTER_API_KEY"))?;

        Ok(Self {
            client,
            api_key,
            config: config.clone(),
        })
    }

    fn build_request(&self, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        }
    }
}

#[async_trait]
impl TextService for OpenRouterTextService {
    fn name(&self) -> &str {
        "openrouter"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = self.build_request(prompt);

        log::debug!("Invoking text model: {}", request.model);

        let mut builder = self
            .client
            .post(&self.config.url)
            .bearer_auth(&self.api_key)
            .json(&request);
        if let Some(referer) = &self.config.referer {
            builder = builder.header("HTTP-Referer", referer);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::UpstreamStatus {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        if let Some(reason) = completion
            .choices
            .first()
            .and_then(|choice| choice.finish_reason.as_deref())
        {
            log::debug!("Text model finish reason: {}", reason);
        }

        completion
            .first_text()
            .map(str::to_string)
            .ok_or_else(|| GenerationError::ResponseError("No caption text in response".into()))
    }
}
