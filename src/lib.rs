pub mod config;
pub mod error;
pub mod generation;
pub mod logger;
pub mod models;
pub mod server;
pub mod upstream;

pub use config::{CaptionServiceConfig, Config, ImageServiceConfig};
pub use error::{ApiError, GenerationError, Result};
pub use generation::{GeneratedPost, Generation, GenerationClient};
pub use models::*;
pub use upstream::{ImageService, TextService, UpstreamServices};
