use std::path::Path;

use pixel_forensics_rs::forensics::report::encode_png;
use pixel_forensics_rs::forensics::{
    AnalysisConfig, ArtifactKind, ForensicsError, ImageAnalysisPipeline, ImageSample, LsbMessage,
    Rgb, list_images,
};

/// 40x30 noise-free image whose red LSBs spell `message`, MSB first.
fn stego_sample(message: &[u8]) -> ImageSample {
    let (width, height) = (40, 30);
    let bits: Vec<u8> = message
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1))
        .collect();

    let pixels = (0..width * height)
        .map(|i| {
            let bit = bits.get(i).copied().unwrap_or(0);
            Rgb::new(120 | bit, (i % 200) as u8, 64)
        })
        .collect();
    ImageSample::new(width, height, pixels).unwrap()
}

fn write_png(path: &Path, sample: &ImageSample, trailer: &[u8]) {
    let mut bytes = Vec::new();
    encode_png(sample, &mut bytes).unwrap();
    bytes.extend_from_slice(trailer);
    std::fs::write(path, bytes).unwrap();
}

#[test]
fn test_analyze_file_writes_all_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("holiday.png");
    let results = dir.path().join("results");
    write_png(&input, &stego_sample(b"meet at dawn"), b"\x00IMGHIDDEN2024\x00");

    let pipeline = ImageAnalysisPipeline::new(AnalysisConfig::default(), &results);
    let report = pipeline.analyze_file(&input).unwrap();

    assert_eq!(report.lsb, LsbMessage::Decoded("meet at dawn".to_string()));
    assert!(report.words.contains("IMGHIDDEN2024"));
    assert!(report.words.contains("IHDR"));
    assert!(!report.anomaly.is_anomalous());

    for kind in ArtifactKind::ALL {
        assert!(results.join(kind.file_name("holiday")).is_file(), "{:?} missing", kind);
    }

    let lsb = std::fs::read_to_string(results.join("holiday_lsb.txt")).unwrap();
    assert_eq!(lsb, "LSB Analysis (Red channel):\nmeet at dawn");

    let pixels = std::fs::read_to_string(results.join("holiday_pixels.txt")).unwrap();
    assert!(pixels.starts_with("Hex Pixels:\n78"));
    assert_eq!(pixels.lines().filter(|l| l.len() == 6).count(), 100);
    assert_eq!(pixels.lines().filter(|l| l.len() == 24).count(), 100);

    let words = std::fs::read_to_string(results.join("holiday_words.txt")).unwrap();
    assert!(words.starts_with("Found Words:\n"));
    assert!(words.lines().any(|l| l == "IMGHIDDEN2024"));

    let anomaly = std::fs::read_to_string(results.join("holiday_anomaly.txt")).unwrap();
    assert!(anomaly.starts_with("Pixel Difference Analysis:\nNo obvious hidden image patterns."));

    let recolored = image::open(results.join("holiday_recolored.png")).unwrap().to_rgb8();
    assert_eq!(recolored.dimensions(), (40, 30));
    assert!(recolored.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    assert!(recolored.pixels().all(|p| p.0[2] == 64));
}

#[test]
fn test_missing_file_is_input_error() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = ImageAnalysisPipeline::new(AnalysisConfig::default(), dir.path());

    let result = pipeline.analyze_file(dir.path().join("absent.png"));

    assert!(matches!(result.unwrap_err(), ForensicsError::InputReadError(_)));
}

#[test]
fn test_non_image_bytes_are_unsupported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("fake.jpg");
    std::fs::write(&input, b"definitely not an image").unwrap();
    let pipeline = ImageAnalysisPipeline::new(AnalysisConfig::default(), dir.path().join("out"));

    let result = pipeline.analyze_file(&input);

    assert!(matches!(result.unwrap_err(), ForensicsError::UnsupportedFormat(_)));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_load_keeps_raw_bytes_and_stem() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scan.final.png");
    let sample = stego_sample(b"x");
    write_png(&input, &sample, b"");

    let pipeline = ImageAnalysisPipeline::new(AnalysisConfig::default(), dir.path());
    let loaded = pipeline.load(&input).unwrap();

    assert_eq!(loaded.stem, "scan.final");
    assert_eq!(loaded.bytes, std::fs::read(&input).unwrap());
    assert_eq!(loaded.sample, sample);

    let report = pipeline.analyze_loaded(&loaded).unwrap();
    assert_eq!(report.bit_plane.width, 40);
}

#[test]
fn test_listing_finds_written_images() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join("one.png"), &stego_sample(b""), b"");
    std::fs::write(dir.path().join("notes.txt"), b"hello").unwrap();

    let images = list_images(dir.path()).unwrap();

    assert_eq!(images, vec![dir.path().join("one.png")]);
}
