//! Error types for the DC6 codec.

use dc6_buffers::BufferError;
use thiserror::Error;

use crate::rle::RleError;

/// Malformed or truncated DC6 input.
///
/// Always fatal to the whole decode: a corrupt header, pointer table or frame
/// indicates buffer misalignment that would corrupt every subsequent frame,
/// so nothing is partially recovered. Frame-level variants carry the failing
/// frame's grid coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("buffer too short: need {needed} bytes, have {available}")]
    Truncated { needed: usize, available: usize },
    #[error("unexpected end of input")]
    UnexpectedEof(#[from] BufferError),
    #[error("direction count is zero")]
    ZeroDirections,
    #[error("frames-per-direction count is zero")]
    ZeroFramesPerDirection,
    #[error("direction count {0} exceeds sanity limit")]
    TooManyDirections(u32),
    #[error("frames-per-direction count {0} exceeds sanity limit")]
    TooManyFramesPerDirection(u32),
    #[error("frame ({direction}, {frame}): offset {offset} lies outside the buffer")]
    OffsetOutOfBounds {
        direction: u32,
        frame: u32,
        offset: u32,
    },
    #[error("frame ({direction}, {frame}): offset {offset} precedes previous offset {previous}")]
    OffsetNotMonotonic {
        direction: u32,
        frame: u32,
        offset: u32,
        previous: u32,
    },
    #[error("frame ({direction}, {frame}): header truncated")]
    FrameHeaderTruncated { direction: u32, frame: u32 },
    #[error("frame ({direction}, {frame}): invalid dimensions {width}x{height}")]
    BadDimensions {
        direction: u32,
        frame: u32,
        width: u32,
        height: u32,
    },
    #[error("frame ({direction}, {frame}): payload of {declared} bytes truncated")]
    PayloadTruncated {
        direction: u32,
        frame: u32,
        declared: usize,
    },
    #[error("frame ({direction}, {frame}): {source}")]
    Rle {
        direction: u32,
        frame: u32,
        source: RleError,
    },
}

/// Out-of-range frame grid access.
///
/// A programming error at the call site, not a data error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "frame index ({direction}, {frame}) out of bounds for \
     {directions}x{frames_per_direction} grid"
)]
pub struct IndexError {
    pub direction: u32,
    pub frame: u32,
    pub directions: u32,
    pub frames_per_direction: u32,
}

/// Color resolution was attempted with no palette attached.
///
/// Recoverable: attach a palette with [`Dc6::set_palette`] or read raw
/// indices via [`Frame::indices`] instead.
///
/// [`Dc6::set_palette`]: crate::Dc6::set_palette
/// [`Frame::indices`]: crate::Frame::indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no palette attached to container")]
pub struct NoPaletteError;

/// The given pixel buffer cannot be serialized.
///
/// Never produced for containers built by this codec's own decoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("pixel buffer of {actual} bytes does not match a {width}x{height} frame")]
    PixelCountMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },
}
