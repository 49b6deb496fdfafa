use crate::forensics::analysis::types::{AnomalyVerdict, LsbMessage, PixelDump, WordScan};

pub fn render_pixels(dump: &PixelDump) -> String {
    format!(
        "Hex Pixels:\n{}\n\nBinary Pixels:\n{}",
        dump.hex.join("\n"),
        dump.binary.join("\n")
    )
}

pub fn render_words(scan: &WordScan) -> String {
    if scan.is_empty() {
        return "No meaningful words found.".to_string();
    }
    let words: Vec<&str> = scan.words.iter().map(String::as_str).collect();
    format!("Found Words:\n{}", words.join("\n"))
}

pub fn render_lsb(message: &LsbMessage) -> String {
    format!("LSB Analysis (Red channel):\n{}", message)
}

pub fn render_anomaly(verdict: &AnomalyVerdict) -> String {
    format!("Pixel Difference Analysis:\n{}\n{}", verdict, verdict.rationale())
}
