//! A single directional animation frame.

use dc6_buffers::{Reader, Writer};

use crate::constants::{FRAME_HEADER_SIZE, MAX_DIMENSION, TERMINATOR_SIZE};
use crate::error::{EncodeError, FormatError};
use crate::rle;

/// Conventional frame terminator sentinel used when building frames.
const DEFAULT_TERMINATOR: [u8; 3] = [0x02, 0x08, 0x05];

/// One still image of a direction's animation sequence.
///
/// Stores both the compressed payload as it appeared on disk and the decoded
/// flat buffer of palette indices. The placement offsets are hints for the
/// renderer and play no part in decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    flipped: u32,
    width: u32,
    height: u32,
    offset_x: i32,
    offset_y: i32,
    unknown: u32,
    next_block: u32,
    data: Vec<u8>,
    terminator: [u8; 3],
    indices: Vec<u8>,
}

impl Frame {
    /// Builds a frame from a raw pixel-index buffer, compressing it with the
    /// canonical run-length policy.
    ///
    /// Fails with [`EncodeError::PixelCountMismatch`] when `indices.len()`
    /// does not equal `width * height`.
    pub fn from_indices(
        width: u32,
        height: u32,
        offset_x: i32,
        offset_y: i32,
        indices: Vec<u8>,
    ) -> Result<Self, EncodeError> {
        let data = rle::compress(&indices, width, height)?;
        let next_block = (FRAME_HEADER_SIZE + data.len() + TERMINATOR_SIZE) as u32;
        Ok(Self {
            flipped: 0,
            width,
            height,
            offset_x,
            offset_y,
            unknown: 0,
            next_block,
            data,
            terminator: DEFAULT_TERMINATOR,
            indices,
        })
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Flip flag as stored on disk.
    pub fn flipped(&self) -> u32 {
        self.flipped
    }

    /// Horizontal placement hint.
    pub fn offset_x(&self) -> i32 {
        self.offset_x
    }

    /// Vertical placement hint.
    pub fn offset_y(&self) -> i32 {
        self.offset_y
    }

    /// Next-block offset as stored on disk. Redundant with the payload
    /// length; kept for fidelity with the on-disk stream.
    pub fn next_block(&self) -> u32 {
        self.next_block
    }

    /// The compressed payload as it appeared on disk.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The 3-byte trailing terminator as it appeared on disk.
    pub fn terminator(&self) -> [u8; 3] {
        self.terminator
    }

    /// The decoded palette-index buffer, row-major, top row first. Always
    /// exactly `width * height` bytes; index 0 is the transparent default.
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// The palette index stored at pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`; coordinate validity is the
    /// caller's contract when iterating a frame it already holds.
    pub fn index_at(&self, x: u32, y: u32) -> u8 {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} frame",
            self.width,
            self.height
        );
        self.indices[(y * self.width + x) as usize]
    }

    /// Parses one frame block at the reader's current position.
    ///
    /// `direction` and `frame` tag any failure with the grid coordinates of
    /// the offending frame.
    pub(crate) fn parse(
        reader: &mut Reader<'_>,
        direction: u32,
        frame: u32,
    ) -> Result<Self, FormatError> {
        if reader.remaining() < FRAME_HEADER_SIZE {
            return Err(FormatError::FrameHeaderTruncated { direction, frame });
        }

        let flipped = reader.u32()?;
        let width = reader.u32()?;
        let height = reader.u32()?;
        let offset_x = reader.i32()?;
        let offset_y = reader.i32()?;
        let unknown = reader.u32()?;
        let next_block = reader.u32()?;
        let length = reader.u32()? as usize;

        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(FormatError::BadDimensions {
                direction,
                frame,
                width,
                height,
            });
        }
        if reader.remaining() < length + TERMINATOR_SIZE {
            return Err(FormatError::PayloadTruncated {
                direction,
                frame,
                declared: length,
            });
        }

        let data = reader.buf(length)?.to_vec();
        let t = reader.buf(TERMINATOR_SIZE)?;
        let terminator = [t[0], t[1], t[2]];

        let indices = rle::decompress(&data, width, height)
            .map_err(|source| FormatError::Rle {
                direction,
                frame,
                source,
            })?;

        Ok(Self {
            flipped,
            width,
            height,
            offset_x,
            offset_y,
            unknown,
            next_block,
            data,
            terminator,
            indices,
        })
    }

    /// Serialized size of this frame block in bytes.
    pub(crate) fn block_len(&self) -> usize {
        FRAME_HEADER_SIZE + self.data.len() + TERMINATOR_SIZE
    }

    pub(crate) fn write(&self, writer: &mut Writer) {
        writer.u32(self.flipped);
        writer.u32(self.width);
        writer.u32(self.height);
        writer.i32(self.offset_x);
        writer.i32(self.offset_y);
        writer.u32(self.unknown);
        writer.u32(self.next_block);
        writer.u32(self.data.len() as u32);
        writer.buf(&self.data);
        writer.buf(&self.terminator);
    }

    /// Checks that the frame's buffers agree with its declared dimensions.
    pub(crate) fn validate(&self) -> Result<(), EncodeError> {
        let expected = self.width as usize * self.height as usize;
        if self.indices.len() != expected {
            return Err(EncodeError::PixelCountMismatch {
                width: self.width,
                height: self.height,
                actual: self.indices.len(),
            });
        }
        Ok(())
    }
}
