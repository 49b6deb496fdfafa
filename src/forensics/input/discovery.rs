use std::path::{Path, PathBuf};

use tracing::debug;
use crate::forensics::common::error::Result;

/// File extensions accepted as analysis candidates, lowercase.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "bmp", "gif"];

/// True when the path has one of the supported extensions (case-insensitive).
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Lists supported images directly inside `dir`, sorted by path.
pub fn list_images<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut images = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }

    images.sort();
    debug!("Found {} candidate images in {}", images.len(), dir.display());
    Ok(images)
}
