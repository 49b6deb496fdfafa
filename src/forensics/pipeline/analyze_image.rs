use tracing::{debug, info, instrument, warn};
use std::path::Path;

use crate::forensics::{
    analysis::{
        AnalysisConfig, AnalysisReport, encode_pixel_window, estimate_anomaly,
        extract_lsb_message, render_bit_plane, scan_words,
    },
    common::error::{ForensicsError, Result},
    input::{ImageReader, ImageSample, LoadedImage, StandardImageReader},
    pipeline::timing::PipelineTimings,
    report::{
        ArtifactKind, FsReportWriter, ReportWriter, render_anomaly, render_lsb,
        render_pixels, render_words,
    },
};

pub struct ImageAnalysisPipeline<R: ImageReader, W: ReportWriter> {
    reader: R,
    writer: W,
    config: AnalysisConfig,
}

impl ImageAnalysisPipeline<StandardImageReader, FsReportWriter> {
    pub fn new<P: AsRef<Path>>(config: AnalysisConfig, results_dir: P) -> Self {
        Self {
            reader: StandardImageReader,
            writer: FsReportWriter::new(results_dir),
            config,
        }
    }
}

impl<R: ImageReader, W: ReportWriter> ImageAnalysisPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: AnalysisConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ForensicsError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!(
                    "Image dimensions {}x{} exceed maximum {}",
                    width, height, max
                );
                return Err(ForensicsError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Decodes `data` and runs every analysis on it.
    ///
    /// `data` doubles as the raw byte stream for the word scan, so the
    /// decoded pixels and the scanned bytes always come from the same file.
    pub fn analyze(&self, data: &[u8]) -> Result<AnalysisReport> {
        self.analyze_with_timings(data).map(|(report, _)| report)
    }

    #[instrument(skip(self, data), fields(input_size = data.len()))]
    pub fn analyze_with_timings(&self, data: &[u8]) -> Result<(AnalysisReport, PipelineTimings)> {
        let mut timings = PipelineTimings::new();
        info!("Starting image analysis");

        let sample = timings.time("decode_image", || self.reader.read_image(data))?;
        let report = self.run_analyses(&sample, data, &mut timings)?;
        Ok((report, timings))
    }

    /// Runs every analysis on an image that has already been resolved.
    pub fn analyze_loaded(&self, image: &LoadedImage) -> Result<AnalysisReport> {
        let mut timings = PipelineTimings::new();
        self.run_analyses(&image.sample, &image.bytes, &mut timings)
    }

    fn run_analyses(
        &self,
        sample: &ImageSample,
        data: &[u8],
        timings: &mut PipelineTimings,
    ) -> Result<AnalysisReport> {
        timings.time("validate_dimensions", || {
            self.validate_dimensions(sample.width, sample.height)
        })?;

        let config = &self.config;
        let pixels = timings.time("pixel_codec", || {
            encode_pixel_window(sample, config.sample_window)
        });
        let words = timings.time("byte_scanner", || {
            scan_words(data, config.min_word_length)
        })?;
        let lsb = timings.time("lsb_extractor", || {
            extract_lsb_message(sample, config.lsb_pixel_limit)
        });
        let anomaly = timings.time("anomaly_estimator", || {
            estimate_anomaly(sample, config.anomaly_threshold)
        });
        let bit_plane = timings.time("bit_plane", || render_bit_plane(sample));

        info!(
            width = sample.width,
            height = sample.height,
            words = words.len(),
            lsb_decoded = lsb.text().is_some(),
            anomalous = anomaly.is_anomalous(),
            "Analysis complete in {:.3}ms",
            timings.total_duration().as_secs_f64() * 1000.0
        );

        Ok(AnalysisReport {
            pixels,
            words,
            lsb,
            anomaly,
            bit_plane,
        })
    }

    /// Writes one artifact per analysis, named after `stem`.
    #[instrument(skip(self, report))]
    pub fn persist(&self, stem: &str, report: &AnalysisReport) -> Result<()> {
        for kind in ArtifactKind::ALL {
            let file_name = kind.file_name(stem);
            match kind {
                ArtifactKind::Pixels => self.writer.write_text(&file_name, &render_pixels(&report.pixels))?,
                ArtifactKind::Words => self.writer.write_text(&file_name, &render_words(&report.words))?,
                ArtifactKind::Lsb => self.writer.write_text(&file_name, &render_lsb(&report.lsb))?,
                ArtifactKind::Anomaly => self.writer.write_text(&file_name, &render_anomaly(&report.anomaly))?,
                ArtifactKind::Recolored => self.writer.write_image(&file_name, &report.bit_plane)?,
            }
            debug!("Persisted {}", file_name);
        }
        Ok(())
    }

    pub fn analyze_and_persist(&self, stem: &str, data: &[u8]) -> Result<AnalysisReport> {
        let report = self.analyze(data)?;
        self.persist(stem, &report)?;
        Ok(report)
    }

    /// Reads an image file and decodes it without running any analysis.
    pub fn load<P: AsRef<Path>>(&self, input_path: P) -> Result<LoadedImage> {
        let input_path = input_path.as_ref();

        let stem = input_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ForensicsError::InputReadError(format!("{}: no file name", input_path.display()))
            })?;

        let bytes = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ForensicsError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let sample = self.reader.read_image(&bytes)?;
        Ok(LoadedImage { stem, bytes, sample })
    }

    #[instrument(skip(self, input_path))]
    pub fn analyze_file<P: AsRef<Path>>(&self, input_path: P) -> Result<AnalysisReport> {
        self.analyze_file_with_timings(input_path).map(|(report, _)| report)
    }

    pub fn analyze_file_with_timings<P: AsRef<Path>>(
        &self,
        input_path: P,
    ) -> Result<(AnalysisReport, PipelineTimings)> {
        let input_path = input_path.as_ref();
        info!(input = %input_path.display(), "Processing image");

        let mut timings = PipelineTimings::new();
        let loaded = timings.time("load_image", || self.load(input_path))?;

        let report = self.run_analyses(&loaded.sample, &loaded.bytes, &mut timings)?;

        timings.time("persist", || self.persist(&loaded.stem, &report))?;
        Ok((report, timings))
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: AnalysisConfig) {
        self.config = config;
    }
}
