//! DC6 format constants and sanity limits.

/// Size of the fixed DC6 header in bytes.
pub const HEADER_SIZE: usize = 24;

/// Size of a per-frame header in bytes.
pub const FRAME_HEADER_SIZE: usize = 32;

/// Size of the per-frame trailing terminator in bytes.
pub const TERMINATOR_SIZE: usize = 3;

/// Canonical termination marker found in real assets.
pub const TERMINATION: [u8; 4] = [0xEE, 0xEE, 0xEE, 0xEE];

/// Version stored by real assets. Stored, not validated.
pub const DEFAULT_VERSION: u32 = 6;

/// End-of-scanline control byte.
pub const END_OF_SCANLINE: u8 = 0x80;

/// Bit distinguishing transparency-skip runs from opaque literal runs.
pub const TRANSPARENT_RUN_BIT: u8 = 0x80;

/// Maximum run length encodable in a single control byte.
pub const MAX_RUN_LENGTH: usize = 0x7F;

/// Upper bound on the direction count accepted by the decoder.
///
/// Real assets carry small counts; anything larger is treated as corrupt
/// input rather than an allocation request.
pub const MAX_DIRECTIONS: u32 = 1024;

/// Upper bound on the frames-per-direction count accepted by the decoder.
pub const MAX_FRAMES_PER_DIRECTION: u32 = 1024;

/// Upper bound on a single frame dimension accepted by the decoder.
pub const MAX_DIMENSION: u32 = 4096;
