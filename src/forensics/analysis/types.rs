//! Analysis configuration and result types

use std::collections::BTreeSet;
use std::fmt;

use crate::forensics::input::types::ImageSample;

/// Side length of the top-left window dumped by the pixel codec.
pub const DEFAULT_SAMPLE_WINDOW: usize = 10;
/// Number of leading pixels whose red LSB is read.
pub const DEFAULT_LSB_PIXEL_LIMIT: usize = 1000;
/// Mean vertical difference above which an image is flagged.
pub const DEFAULT_ANOMALY_THRESHOLD: f64 = 50.0;
/// Shortest alphanumeric run reported as a word.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;

/// Configuration for a single image analysis
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Rows and columns of the pixel dump window
    pub sample_window: usize,
    /// Pixels read by the LSB extractor, in row-major order
    pub lsb_pixel_limit: usize,
    /// Anomaly threshold on the mean absolute vertical difference
    pub anomaly_threshold: f64,
    /// Minimum word length for the byte scanner
    pub min_word_length: usize,
    /// Whether to reject zero-sized images before analysis
    pub validate_dimensions: bool,
    /// Optional upper bound on width and height
    pub max_dimension: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sample_window: DEFAULT_SAMPLE_WINDOW,
            lsb_pixel_limit: DEFAULT_LSB_PIXEL_LIMIT,
            anomaly_threshold: DEFAULT_ANOMALY_THRESHOLD,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            validate_dimensions: true,
            max_dimension: None,
        }
    }
}

impl AnalysisConfig {
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }
}

/// Builder for AnalysisConfig
#[derive(Default)]
pub struct AnalysisConfigBuilder {
    sample_window: Option<usize>,
    lsb_pixel_limit: Option<usize>,
    anomaly_threshold: Option<f64>,
    min_word_length: Option<usize>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
}

impl AnalysisConfigBuilder {
    pub fn sample_window(mut self, window: usize) -> Self {
        self.sample_window = Some(window);
        self
    }

    pub fn lsb_pixel_limit(mut self, limit: usize) -> Self {
        self.lsb_pixel_limit = Some(limit);
        self
    }

    pub fn anomaly_threshold(mut self, threshold: f64) -> Self {
        self.anomaly_threshold = Some(threshold);
        self
    }

    pub fn min_word_length(mut self, length: usize) -> Self {
        self.min_word_length = Some(length);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> AnalysisConfig {
        let default = AnalysisConfig::default();
        AnalysisConfig {
            sample_window: self.sample_window.unwrap_or(default.sample_window),
            lsb_pixel_limit: self.lsb_pixel_limit.unwrap_or(default.lsb_pixel_limit),
            anomaly_threshold: self.anomaly_threshold.unwrap_or(default.anomaly_threshold),
            min_word_length: self.min_word_length.unwrap_or(default.min_word_length),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}

/// Hex and binary renderings of the sample window, row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelDump {
    pub hex: Vec<String>,
    pub binary: Vec<String>,
}

impl PixelDump {
    pub fn len(&self) -> usize {
        self.hex.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hex.is_empty()
    }
}

/// Distinct alphanumeric words found in the raw bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordScan {
    pub words: BTreeSet<String>,
}

impl WordScan {
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Outcome of LSB reassembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LsbMessage {
    /// Printable text recovered from the red-channel LSBs
    Decoded(String),
    /// Nothing readable: too few bits, a decode failure, or only
    /// non-printable / whitespace characters
    Unreadable,
}

impl LsbMessage {
    pub const UNREADABLE_TEXT: &'static str = "No readable LSB message found.";

    pub fn text(&self) -> Option<&str> {
        match self {
            LsbMessage::Decoded(text) => Some(text),
            LsbMessage::Unreadable => None,
        }
    }
}

impl fmt::Display for LsbMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text().unwrap_or(Self::UNREADABLE_TEXT))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnomalyClass {
    PossibleHiddenImage,
    NoObviousPattern,
}

impl AnomalyClass {
    pub fn label(self) -> &'static str {
        match self {
            AnomalyClass::PossibleHiddenImage => "Possible hidden image",
            AnomalyClass::NoObviousPattern => "No obvious hidden image patterns.",
        }
    }
}

/// Mean vertical difference and its classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalyVerdict {
    pub mean_difference: f64,
    pub threshold: f64,
    pub class: AnomalyClass,
}

impl AnomalyVerdict {
    pub fn is_anomalous(&self) -> bool {
        self.class == AnomalyClass::PossibleHiddenImage
    }

    pub fn rationale(&self) -> String {
        let relation = if self.is_anomalous() { "above" } else { "at or below" };
        format!(
            "Mean absolute vertical pixel difference {:.3} is {} threshold {}",
            self.mean_difference, relation, self.threshold
        )
    }
}

impl fmt::Display for AnomalyVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class.label())
    }
}

/// Every analysis result for one image.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub pixels: PixelDump,
    pub words: WordScan,
    pub lsb: LsbMessage,
    pub anomaly: AnomalyVerdict,
    /// Red bit-plane rendering, same dimensions as the source
    pub bit_plane: ImageSample,
}
