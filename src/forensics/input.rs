//! Image input module
//!
//! This module resolves image files into a raw byte stream plus a decoded
//! RGB pixel grid, and discovers candidate images on disk.

mod reader;
mod standard_reader;
mod discovery;
pub mod types;

pub use reader::ImageReader;
pub use standard_reader::StandardImageReader;
pub use discovery::{SUPPORTED_EXTENSIONS, is_supported_image, list_images};
pub use types::{ImageSample, LoadedImage, Rgb};
