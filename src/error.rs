use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    #[error("Model is loading{}", loading_eta(.estimated_secs))]
    ModelLoading { estimated_secs: Option<f32> },

    #[error("Upstream returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Upstream request timed out")]
    Timeout,

    #[error("Request error: {0}")]
    RequestError(String),

    #[error("Response error: {0}")]
    ResponseError(String),
}

fn loading_eta(estimated_secs: &Option<f32>) -> String {
    match estimated_secs {
        Some(secs) => format!(" (ready in ~{:.0}s)", secs),
        None => String::new(),
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GenerationError::Timeout
        } else if err.is_decode() {
            GenerationError::ResponseError(err.to_string())
        } else {
            GenerationError::RequestError(err.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Failed to generate post: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, GenerationError>;
