use crate::forensics::common::error::Result;
use crate::forensics::input::types::ImageSample;

pub trait ReportWriter {
    fn write_text(&self, file_name: &str, contents: &str) -> Result<()>;
    fn write_image(&self, file_name: &str, image: &ImageSample) -> Result<()>;
}
