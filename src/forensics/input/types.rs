//! Decoded image data types

/// One 8-bit RGB pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Six lowercase hex digits, channel order R, G, B.
    pub fn to_hex(self) -> String {
        hex::encode([self.r, self.g, self.b])
    }

    /// 24 binary digits, channel order R, G, B, no separators.
    pub fn to_binary(self) -> String {
        format!("{:08b}{:08b}{:08b}", self.r, self.g, self.b)
    }

    /// Parses a six digit hex entry back into a pixel.
    pub fn from_hex(s: &str) -> Option<Self> {
        let bytes = hex::decode(s).ok()?;
        match bytes.as_slice() {
            [r, g, b] => Some(Self::new(*r, *g, *b)),
            _ => None,
        }
    }

    /// Parses a 24 digit binary entry back into a pixel.
    pub fn from_binary(s: &str) -> Option<Self> {
        if s.len() != 24 {
            return None;
        }
        let value = u32::from_str_radix(s, 2).ok()?;
        let [_, r, g, b] = value.to_be_bytes();
        Some(Self::new(r, g, b))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// A decoded image as a row-major grid of RGB pixels.
///
/// Components only read a sample; transforms return a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSample {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Pixels, row-major, `width * height` entries
    pub pixels: Vec<Rgb>,
}

impl ImageSample {
    /// Builds a sample, returning `None` when the pixel count does not match.
    pub fn new(width: usize, height: usize, pixels: Vec<Rgb>) -> Option<Self> {
        if width.checked_mul(height)? != pixels.len() {
            return None;
        }
        Some(Self { width, height, pixels })
    }

    /// A sample where every pixel has the same colour.
    pub fn filled(width: usize, height: usize, pixel: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![pixel; width * height],
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        // chunks panics on zero, and a zero-width image has no rows anyway
        self.pixels.chunks(self.width.max(1))
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn from_rgb_image(image: &image::RgbImage) -> Self {
        Self {
            width: image.width() as usize,
            height: image.height() as usize,
            pixels: image.pixels().map(|p| Rgb::from(p.0)).collect(),
        }
    }

    /// Interleaved `[R, G, B, R, G, B, ...]` buffer.
    pub fn to_interleaved(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| [p.r, p.g, p.b]).collect()
    }
}

/// An image resolved from disk: its stem, raw bytes and decoded pixels.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// File name without extension, used to name result artifacts
    pub stem: String,
    /// The unmodified file contents
    pub bytes: Vec<u8>,
    pub sample: ImageSample,
}
