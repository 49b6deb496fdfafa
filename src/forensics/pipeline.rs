//! Pipeline orchestration module
//!
//! Wires an image reader, the analyses and a report writer together for
//! one image at a time.

mod analyze_image;
mod timing;


pub use analyze_image::ImageAnalysisPipeline;
pub use timing::{PipelineTimings, StepTiming, Timer};
