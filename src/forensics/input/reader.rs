use crate::forensics::common::error::Result;
use crate::forensics::input::types::ImageSample;

pub trait ImageReader {
    fn read_image(&self, data: &[u8]) -> Result<ImageSample>;
}
