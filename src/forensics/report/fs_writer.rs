use std::io::Write;
use std::path::{Path, PathBuf};

use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};
use tracing::debug;

use crate::forensics::common::error::{ForensicsError, Result};
use crate::forensics::input::types::ImageSample;
use crate::forensics::report::writer::ReportWriter;

pub const DEFAULT_RESULTS_DIR: &str = "results";

/// Encodes a sample as an 8-bit RGB PNG.
pub fn encode_png(image: &ImageSample, output: &mut dyn Write) -> Result<()> {
    debug!("Encoding PNG image: {}x{}", image.width, image.height);

    let width = u32::try_from(image.width)
        .map_err(|_| ForensicsError::InvalidDimensions(image.width, image.height))?;
    let height = u32::try_from(image.height)
        .map_err(|_| ForensicsError::InvalidDimensions(image.width, image.height))?;

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(&image.to_interleaved(), width, height, ExtendedColorType::Rgb8)
        .map_err(|e| ForensicsError::EncodeError(e.to_string()))?;

    output.write_all(&buffer)?;

    debug!("PNG encoding complete, {} bytes", buffer.len());
    Ok(())
}

/// Writes artifacts as files inside a results directory, creating it on
/// first use.
pub struct FsReportWriter {
    results_dir: PathBuf,
}

impl Default for FsReportWriter {
    fn default() -> Self {
        Self::new(DEFAULT_RESULTS_DIR)
    }
}

impl FsReportWriter {
    pub fn new<P: AsRef<Path>>(results_dir: P) -> Self {
        Self {
            results_dir: results_dir.as_ref().to_path_buf(),
        }
    }

    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    pub fn artifact_path(&self, file_name: &str) -> PathBuf {
        self.results_dir.join(file_name)
    }

    fn create_output_file(&self, file_name: &str) -> Result<(PathBuf, std::fs::File)> {
        std::fs::create_dir_all(&self.results_dir).map_err(|e| {
            ForensicsError::OutputWriteError(format!("{}: {}", self.results_dir.display(), e))
        })?;

        let path = self.artifact_path(file_name);
        let file = std::fs::File::create(&path).map_err(|e| {
            ForensicsError::OutputWriteError(format!("{}: {}", path.display(), e))
        })?;
        Ok((path, file))
    }
}

impl ReportWriter for FsReportWriter {
    fn write_text(&self, file_name: &str, contents: &str) -> Result<()> {
        let (path, mut file) = self.create_output_file(file_name)?;
        file.write_all(contents.as_bytes()).map_err(|e| {
            ForensicsError::OutputWriteError(format!("{}: {}", path.display(), e))
        })?;
        debug!("Wrote {} ({} bytes)", path.display(), contents.len());
        Ok(())
    }

    fn write_image(&self, file_name: &str, image: &ImageSample) -> Result<()> {
        let (path, mut file) = self.create_output_file(file_name)?;
        encode_png(image, &mut file)?;
        debug!("Wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forensics::input::types::Rgb;

    #[test]
    fn test_creates_missing_results_dir() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FsReportWriter::new(dir.path().join("nested").join("results"));

        writer.write_text("x_lsb.txt", "LSB Analysis (Red channel):\nhi").unwrap();

        let written = std::fs::read_to_string(writer.artifact_path("x_lsb.txt")).unwrap();
        assert_eq!(written, "LSB Analysis (Red channel):\nhi");
    }

    #[test]
    fn test_png_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FsReportWriter::new(dir.path());
        let sample = ImageSample::new(
            2,
            2,
            vec![Rgb::new(255, 1, 2), Rgb::new(0, 3, 4), Rgb::new(255, 5, 6), Rgb::new(0, 7, 8)],
        )
        .unwrap();

        writer.write_image("x_recolored.png", &sample).unwrap();

        let decoded = image::open(writer.artifact_path("x_recolored.png")).unwrap().to_rgb8();
        assert_eq!(ImageSample::from_rgb_image(&decoded), sample);
    }
}
