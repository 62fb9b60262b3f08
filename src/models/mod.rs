pub mod common;
pub mod image;
pub mod post;
pub mod text;

pub use common::*;
pub use image::*;
pub use post::*;
pub use text::*;
