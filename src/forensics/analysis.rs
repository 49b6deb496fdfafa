//! Analysis module
//!
//! Pure analyses over a decoded image and its raw bytes. Each one reads the
//! shared sample and returns its own result; none depends on another.

mod pixel_codec;
mod byte_scanner;
mod lsb;
mod anomaly;
mod bit_plane;
pub mod types;

pub use pixel_codec::encode_pixel_window;
pub use byte_scanner::scan_words;
pub use lsb::{
    LsbDecodeError,
    decode_bit_string,
    extract_lsb_message,
    is_printable,
    lsb_bit_string,
    printable_only,
};
pub use anomaly::{estimate_anomaly, mean_vertical_difference};
pub use bit_plane::render_bit_plane;
pub use types::{
    AnalysisConfig,
    AnalysisConfigBuilder,
    AnalysisReport,
    AnomalyClass,
    AnomalyVerdict,
    LsbMessage,
    PixelDump,
    WordScan,
    DEFAULT_ANOMALY_THRESHOLD,
    DEFAULT_LSB_PIXEL_LIMIT,
    DEFAULT_MIN_WORD_LENGTH,
    DEFAULT_SAMPLE_WINDOW,
};
