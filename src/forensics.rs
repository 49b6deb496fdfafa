//! Image forensics module
//!
//! Decodes a single raster image, runs the fixed analysis recipe over its
//! pixels and raw bytes, and persists one artifact per analysis.

pub mod input;
pub mod analysis;
pub mod report;
pub mod pipeline;
pub mod common;

pub use common::{
    ForensicsError,
    Result,
};

pub use input::{
    ImageSample,
    LoadedImage,
    Rgb,
    ImageReader,
    StandardImageReader,
    SUPPORTED_EXTENSIONS,
    is_supported_image,
    list_images,
};

pub use analysis::{
    AnalysisConfig,
    AnalysisConfigBuilder,
    AnalysisReport,
    AnomalyClass,
    AnomalyVerdict,
    LsbDecodeError,
    LsbMessage,
    PixelDump,
    WordScan,
};

pub use report::{
    ArtifactKind,
    ReportWriter,
    FsReportWriter,
};

pub use pipeline::{
    ImageAnalysisPipeline,
    PipelineTimings,
    StepTiming,
    Timer,
};
