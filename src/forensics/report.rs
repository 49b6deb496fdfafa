//! Report writing module
//!
//! Renders analysis results into the text and PNG artifacts expected by
//! downstream tooling and persists them through a [`ReportWriter`].

mod writer;
mod fs_writer;
mod render;
pub mod types;

pub use writer::ReportWriter;
pub use fs_writer::{FsReportWriter, DEFAULT_RESULTS_DIR, encode_png};
pub use render::{render_anomaly, render_lsb, render_pixels, render_words};
pub use types::ArtifactKind;
