use tracing::debug;

use crate::forensics::analysis::types::PixelDump;
use crate::forensics::input::types::ImageSample;

/// Dumps the top-left `window x window` pixels (clamped to the image) as
/// hex and binary strings, row-major.
pub fn encode_pixel_window(sample: &ImageSample, window: usize) -> PixelDump {
    let rows = window.min(sample.height);
    let cols = window.min(sample.width);
    debug!("Encoding {}x{} pixel window", cols, rows);

    let (hex, binary) = sample
        .rows()
        .take(rows)
        .flat_map(|row| row.iter().take(cols))
        .map(|&pixel| (pixel.to_hex(), pixel.to_binary()))
        .unzip();

    PixelDump { hex, binary }
}
