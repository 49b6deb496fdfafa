//! Artifact naming

/// One persisted artifact per analysis, named `<stem><suffix>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Pixels,
    Words,
    Lsb,
    Anomaly,
    Recolored,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::Pixels,
        ArtifactKind::Words,
        ArtifactKind::Lsb,
        ArtifactKind::Anomaly,
        ArtifactKind::Recolored,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            ArtifactKind::Pixels => "_pixels.txt",
            ArtifactKind::Words => "_words.txt",
            ArtifactKind::Lsb => "_lsb.txt",
            ArtifactKind::Anomaly => "_anomaly.txt",
            ArtifactKind::Recolored => "_recolored.png",
        }
    }

    pub fn file_name(self, stem: &str) -> String {
        format!("{}{}", stem, self.suffix())
    }

    pub fn is_image(self) -> bool {
        matches!(self, ArtifactKind::Recolored)
    }
}
