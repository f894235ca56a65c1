//! The 256-entry color palette and resolved color types.

/// One opaque palette entry, three 8-bit channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A resolved renderable color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// The fully transparent color that index 0 resolves to.
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };
}

/// An ordered table of exactly 256 colors.
///
/// Produced by an external palette-file parser; the codec treats it as an
/// opaque ordered sequence. Immutable value data: 768 bytes, cheap to copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: [Rgb; 256],
}

impl Palette {
    /// Number of entries in every palette.
    pub const LEN: usize = 256;

    /// Wraps a full entry table.
    pub fn new(entries: [Rgb; 256]) -> Self {
        Self { entries }
    }

    /// Builds a palette from 768 packed `r, g, b` bytes.
    pub fn from_rgb_bytes(bytes: &[u8; 768]) -> Self {
        let mut entries = [Rgb::default(); 256];
        for (entry, rgb) in entries.iter_mut().zip(bytes.chunks_exact(3)) {
            *entry = Rgb {
                r: rgb[0],
                g: rgb[1],
                b: rgb[2],
            };
        }
        Self { entries }
    }

    /// The color stored for the given palette index.
    pub fn get(&self, index: u8) -> Rgb {
        self.entries[index as usize]
    }

    /// The full entry table.
    pub fn entries(&self) -> &[Rgb; 256] {
        &self.entries
    }
}
