use crate::logger::LogLevel;
use std::env;
use std::time::Duration;

pub const DEFAULT_IMAGE_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/stabilityai/stable-diffusion-xl-base-1.0";
pub const DEFAULT_CAPTION_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_CAPTION_MODEL: &str = "mistralai/mistral-7b-instruct:free";

#[derive(Debug, Clone)]
pub struct ImageServiceConfig {
    pub api_key: Option<String>,
    pub model_url: String,
}

#[derive(Debug, Clone)]
pub struct CaptionServiceConfig {
    pub api_key: Option<String>,
    pub url: String,
    pub model: String,
    pub referer: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub upstream_timeout: Duration,
    pub report_degraded: bool,
    pub log_level: LogLevel,
    pub log_json: bool,
    pub image: ImageServiceConfig,
    pub caption: CaptionServiceConfig,
}

fn non_blank(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn flag(key: &str) -> bool {
    non_blank(key).map_or(false, |val| val.eq_ignore_ascii_case("true") || val == "1")
}

impl Default for ImageServiceConfig {
    fn default() -> Self {
        ImageServiceConfig {
            api_key: None,
            model_url: DEFAULT_IMAGE_MODEL_URL.to_string(),
        }
    }
}

impl ImageServiceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let mut config = Self::new();
        config.api_key = non_blank("HUGGINGFACE_API_KEY");
        match non_blank("HUGGINGFACE_MODEL_URL") {
            Some(url) => config.with_model_url(url),
            None => config,
        }
    }

    pub fn with_credentials(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model_url(mut self, model_url: impl Into<String>) -> Self {
        self.model_url = model_url.into();
        self
    }
}

impl Default for CaptionServiceConfig {
    fn default() -> Self {
        CaptionServiceConfig {
            api_key: None,
            url: DEFAULT_CAPTION_URL.to_string(),
            model: DEFAULT_CAPTION_MODEL.to_string(),
            referer: None,
            max_tokens: 300,
            temperature: 0.8,
        }
    }
}

impl CaptionServiceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();
        let url = non_blank("OPENROUTER_URL").unwrap_or_else(|| defaults.url.clone());
        let model = non_blank("OPENROUTER_MODEL").unwrap_or_else(|| defaults.model.clone());
        CaptionServiceConfig {
            api_key: non_blank("OPENROUTER_API_KEY"),
            referer: non_blank("OPENROUTER_REFERER"),
            max_tokens: non_blank("CAPTION_MAX_TOKENS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_tokens),
            temperature: non_blank("CAPTION_TEMPERATURE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.temperature),
            ..defaults
        }
        .with_endpoint(url, model)
    }

    pub fn with_credentials(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_endpoint(mut self, url: impl Into<String>, model: impl Into<String>) -> Self {
        self.url = url.into();
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 3000,
            upstream_timeout: Duration::from_secs(30),
            report_degraded: false,
            log_level: LogLevel::Info,
            log_json: false,
            image: ImageServiceConfig::default(),
            caption: CaptionServiceConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = non_blank("HOST").unwrap_or(defaults.host);
        let port = non_blank("PORT")
            .and_then(|port| port.parse().ok())
            .unwrap_or(defaults.port);
        let upstream_timeout = non_blank("UPSTREAM_TIMEOUT_SECS")
            .and_then(|secs| secs.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.upstream_timeout);
        let log_level = non_blank("LOG_LEVEL")
            .and_then(|level| LogLevel::parse(&level))
            .unwrap_or(defaults.log_level);

        Config {
            host,
            port,
            upstream_timeout,
            report_degraded: flag("REPORT_DEGRADED"),
            log_level,
            log_json: flag("LOG_JSON"),
            image: ImageServiceConfig::from_env(),
            caption: CaptionServiceConfig::from_env(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.upstream_timeout = timeout;
        self
    }

    pub fn with_degraded_reporting(mut self, enabled: bool) -> Self {
        self.report_degraded = enabled;
        self
    }

    pub fn with_image(mut self, config: ImageServiceConfig) -> Self {
        self.image = config;
        self
    }

    pub fn with_caption(mut self, config: CaptionServiceConfig) -> Self {
        self.caption = config;
        self
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
