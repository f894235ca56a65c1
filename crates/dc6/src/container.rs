//! The top-level DC6 container.

use crate::decoder;
use crate::encoder;
use crate::error::{EncodeError, FormatError, IndexError, NoPaletteError};
use crate::frame::Frame;
use crate::grid::FrameGrid;
use crate::header::Header;
use crate::palette::{Palette, Rgba};

/// A fully decoded DC6 sprite: header, frame grid, and an optional palette.
///
/// Constructed empty with [`Dc6::new`] or populated in one shot by
/// [`Dc6::from_bytes`]. Cloning produces a fully independent deep copy
/// (every frame buffer is owned; the palette is copied by value), and
/// equality is structural, so a clone compares equal to its original.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dc6 {
    header: Header,
    frames: FrameGrid,
    palette: Option<Palette>,
}

impl Dc6 {
    /// Creates an empty container with default header fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a DC6 byte stream into a populated container.
    ///
    /// A single synchronous pass over the buffer; any malformed or truncated
    /// structure aborts the whole decode with a [`FormatError`].
    pub fn from_bytes(data: &[u8]) -> Result<Self, FormatError> {
        decoder::decode(data)
    }

    /// Serializes the container back into a DC6 byte stream.
    ///
    /// Frames are packed contiguously in pointer-table order immediately
    /// after the table; each frame's stored compressed payload is written
    /// verbatim, so a decoded container re-encodes byte-exactly when its
    /// source was packed the same way.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        encoder::encode(self)
    }

    /// Builds a container around an existing frame grid, deriving the header
    /// counts from the grid shape.
    pub fn from_grid(frames: FrameGrid) -> Self {
        let header = Header {
            directions: frames.directions(),
            frames_per_direction: frames.frames_per_direction(),
            ..Header::default()
        };
        Self {
            header,
            frames,
            palette: None,
        }
    }

    /// The fixed header as stored on disk.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Number of directions in the sprite.
    pub fn directions(&self) -> u32 {
        self.frames.directions()
    }

    /// Number of frames in each direction.
    pub fn frames_per_direction(&self) -> u32 {
        self.frames.frames_per_direction()
    }

    /// The frame grid.
    pub fn frames(&self) -> &FrameGrid {
        &self.frames
    }

    /// Range-checked access to the frame at `(direction, frame)`.
    pub fn frame(&self, direction: u32, frame: u32) -> Result<&Frame, IndexError> {
        self.frames.frame(direction, frame)
    }

    /// A read-only view over one frame together with the attached palette,
    /// for consumers that resolve colors (image emission, viewers).
    pub fn frame_view(&self, direction: u32, frame: u32) -> Result<FrameView<'_>, IndexError> {
        Ok(FrameView {
            frame: self.frames.frame(direction, frame)?,
            palette: self.palette.as_ref(),
        })
    }

    /// Attaches a palette, replacing any prior attachment.
    ///
    /// Decoded index buffers are never touched; the palette only changes how
    /// later color-resolution queries interpret them.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = Some(palette);
    }

    /// The attached palette, if any.
    pub fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }

    pub(crate) fn from_parts(header: Header, frames: FrameGrid) -> Self {
        Self {
            header,
            frames,
            palette: None,
        }
    }
}

/// Read-only capability over one frame: dimensions, raw indices, and color
/// resolution through the container's palette.
///
/// Both the image-conversion path and the viewer path consume frames through
/// this one view instead of duplicating per-consumer accessors.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    frame: &'a Frame,
    palette: Option<&'a Palette>,
}

impl FrameView<'_> {
    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.frame.width()
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.frame.height()
    }

    /// The underlying frame.
    pub fn frame(&self) -> &Frame {
        self.frame
    }

    /// The decoded palette-index buffer, row-major, top row first.
    pub fn indices(&self) -> &[u8] {
        self.frame.indices()
    }

    /// Resolves the pixel at `(x, y)` through the attached palette.
    ///
    /// Index 0 resolves to [`Rgba::TRANSPARENT`]; every other index resolves
    /// to its palette entry with full alpha. Fails with [`NoPaletteError`]
    /// when the container has no palette attached — callers that only need
    /// raw indices should read [`FrameView::indices`] instead.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`, matching
    /// [`Frame::index_at`].
    pub fn color_at(&self, x: u32, y: u32) -> Result<Rgba, NoPaletteError> {
        let palette = self.palette.ok_or(NoPaletteError)?;
        let index = self.frame.index_at(x, y);
        if index == 0 {
            return Ok(Rgba::TRANSPARENT);
        }
        let rgb = palette.get(index);
        Ok(Rgba {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
            a: 255,
        })
    }
}
