//! Image reader backed by the `image` crate.
//!
//! Handles every raster format enabled on the `image` dependency (PNG, JPEG,
//! BMP, GIF). Decoded pixels are converted to 8-bit RGB; alpha is dropped
//! and only the first frame of an animated GIF is kept.

use tracing::debug;
use crate::forensics::common::error::{Result, ForensicsError};
use crate::forensics::input::reader::ImageReader;
use crate::forensics::input::types::ImageSample;

pub struct StandardImageReader;

impl ImageReader for StandardImageReader {
    /// Decodes an in-memory image file into an RGB sample.
    ///
    /// # Returns
    ///
    /// * `Ok(ImageSample)` - Decoded pixels, row-major
    /// * `Err(ForensicsError::UnsupportedFormat)` - The bytes match no enabled format
    /// * `Err(ForensicsError::DecodeError)` - The format was recognised but decoding failed
    fn read_image(&self, data: &[u8]) -> Result<ImageSample> {
        debug!("Decoding image, {} bytes", data.len());

        let format = image::guess_format(data)
            .map_err(|e| ForensicsError::UnsupportedFormat(e.to_string()))?;

        let decoded = image::load_from_memory_with_format(data, format)
            .map_err(|e| ForensicsError::DecodeError(e.to_string()))?;

        debug!(
            "Decoded {:?} image: {}x{} ({:?})",
            format,
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        Ok(ImageSample::from_rgb_image(&decoded.to_rgb8()))
    }
}
