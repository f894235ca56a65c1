//! Fixed DC6 header and frame pointer table.

use dc6_buffers::{Reader, Writer};

use crate::constants::{
    DEFAULT_VERSION, HEADER_SIZE, MAX_DIRECTIONS, MAX_FRAMES_PER_DIRECTION, TERMINATION,
};
use crate::error::FormatError;

/// The 24-byte fixed header at the start of every DC6 stream.
///
/// The version, flags, encoding and termination fields are stored verbatim;
/// their semantics are opaque to the codec. The two counts are load-bearing:
/// they size the pointer table and the frame grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub version: u32,
    pub flags: u32,
    pub encoding: u32,
    pub termination: [u8; 4],
    pub directions: u32,
    pub frames_per_direction: u32,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION,
            flags: 0,
            encoding: 0,
            termination: TERMINATION,
            directions: 0,
            frames_per_direction: 0,
        }
    }
}

impl Header {
    /// Total number of frames declared by the header.
    pub fn frame_count(&self) -> u32 {
        self.directions * self.frames_per_direction
    }

    /// Parses the fixed header.
    ///
    /// Rejects buffers shorter than the header, zero counts, and counts
    /// beyond the sanity limits. No lenient parsing: any failure aborts the
    /// whole decode.
    pub(crate) fn parse(reader: &mut Reader<'_>) -> Result<Self, FormatError> {
        if reader.remaining() < HEADER_SIZE {
            return Err(FormatError::Truncated {
                needed: HEADER_SIZE,
                available: reader.remaining(),
            });
        }

        let version = reader.u32()?;
        let flags = reader.u32()?;
        let encoding = reader.u32()?;
        let t = reader.buf(4)?;
        let termination = [t[0], t[1], t[2], t[3]];
        let directions = reader.u32()?;
        let frames_per_direction = reader.u32()?;

        if directions == 0 {
            return Err(FormatError::ZeroDirections);
        }
        if frames_per_direction == 0 {
            return Err(FormatError::ZeroFramesPerDirection);
        }
        if directions > MAX_DIRECTIONS {
            return Err(FormatError::TooManyDirections(directions));
        }
        if frames_per_direction > MAX_FRAMES_PER_DIRECTION {
            return Err(FormatError::TooManyFramesPerDirection(frames_per_direction));
        }

        Ok(Self {
            version,
            flags,
            encoding,
            termination,
            directions,
            frames_per_direction,
        })
    }

    pub(crate) fn write(&self, writer: &mut Writer) {
        writer.u32(self.version);
        writer.u32(self.flags);
        writer.u32(self.encoding);
        writer.buf(&self.termination);
        writer.u32(self.directions);
        writer.u32(self.frames_per_direction);
    }
}

/// Parses the frame pointer table that immediately follows the fixed header.
///
/// One `u32` offset per (direction, frame) pair, direction-major. Offsets
/// must be monotonically non-decreasing and lie within the buffer.
pub(crate) fn parse_pointer_table(
    reader: &mut Reader<'_>,
    header: &Header,
    buffer_len: usize,
) -> Result<Vec<u32>, FormatError> {
    // Counts are capped at 1024 each, so the product cannot overflow.
    let count = header.frame_count() as usize;
    if reader.remaining() < count * 4 {
        return Err(FormatError::Truncated {
            needed: HEADER_SIZE + count * 4,
            available: buffer_len,
        });
    }

    let mut offsets = Vec::with_capacity(count);
    let mut previous = 0u32;
    for i in 0..count as u32 {
        let direction = i / header.frames_per_direction;
        let frame = i % header.frames_per_direction;
        let offset = reader.u32()?;
        if offset as usize >= buffer_len {
            return Err(FormatError::OffsetOutOfBounds {
                direction,
                frame,
                offset,
            });
        }
        if offset < previous {
            return Err(FormatError::OffsetNotMonotonic {
                direction,
                frame,
                offset,
                previous,
            });
        }
        previous = offset;
        offsets.push(offset);
    }

    Ok(offsets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_bytes(directions: u32, frames_per_direction: u32) -> Vec<u8> {
        let mut w = Writer::new();
        Header {
            directions,
            frames_per_direction,
            ..Header::default()
        }
        .write(&mut w);
        w.flush()
    }

    #[test]
    fn parse_roundtrips_written_header() {
        let data = header_bytes(4, 8);
        let header = Header::parse(&mut Reader::new(&data)).unwrap();
        assert_eq!(header.version, DEFAULT_VERSION);
        assert_eq!(header.termination, TERMINATION);
        assert_eq!(header.directions, 4);
        assert_eq!(header.frames_per_direction, 8);
        assert_eq!(header.frame_count(), 32);
    }

    #[test]
    fn short_buffer_is_truncated() {
        let data = header_bytes(1, 1);
        let err = Header::parse(&mut Reader::new(&data[..HEADER_SIZE - 1])).unwrap_err();
        assert_eq!(
            err,
            FormatError::Truncated {
                needed: HEADER_SIZE,
                available: HEADER_SIZE - 1
            }
        );
    }

    #[test]
    fn zero_counts_are_rejected() {
        let data = header_bytes(0, 1);
        assert_eq!(
            Header::parse(&mut Reader::new(&data)),
            Err(FormatError::ZeroDirections)
        );
        let data = header_bytes(1, 0);
        assert_eq!(
            Header::parse(&mut Reader::new(&data)),
            Err(FormatError::ZeroFramesPerDirection)
        );
    }

    #[test]
    fn absurd_counts_are_rejected() {
        let data = header_bytes(MAX_DIRECTIONS + 1, 1);
        assert_eq!(
            Header::parse(&mut Reader::new(&data)),
            Err(FormatError::TooManyDirections(MAX_DIRECTIONS + 1))
        );
    }

    #[test]
    fn pointer_table_counts_and_order() {
        let mut w = Writer::new();
        let header = Header {
            directions: 2,
            frames_per_direction: 2,
            ..Header::default()
        };
        header.write(&mut w);
        for offset in [40u32, 50, 50, 60] {
            w.u32(offset);
        }
        let data = w.flush();
        let mut reader = Reader::new(&data);
        let parsed = Header::parse(&mut reader).unwrap();
        let offsets = parse_pointer_table(&mut reader, &parsed, 100).unwrap();
        assert_eq!(offsets, vec![40, 50, 50, 60]);
    }

    #[test]
    fn pointer_out_of_bounds_is_tagged_with_coordinates() {
        let mut w = Writer::new();
        let header = Header {
            directions: 1,
            frames_per_direction: 2,
            ..Header::default()
        };
        header.write(&mut w);
        w.u32(40);
        w.u32(9999);
        let data = w.flush();
        let mut reader = Reader::new(&data);
        let parsed = Header::parse(&mut reader).unwrap();
        let err = parse_pointer_table(&mut reader, &parsed, 100).unwrap_err();
        assert_eq!(
            err,
            FormatError::OffsetOutOfBounds {
                direction: 0,
                frame: 1,
                offset: 9999
            }
        );
    }

    #[test]
    fn decreasing_pointer_is_rejected() {
        let mut w = Writer::new();
        let header = Header {
            directions: 1,
            frames_per_direction: 2,
            ..Header::default()
        };
        header.write(&mut w);
        w.u32(50);
        w.u32(40);
        let data = w.flush();
        let mut reader = Reader::new(&data);
        let parsed = Header::parse(&mut reader).unwrap();
        let err = parse_pointer_table(&mut reader, &parsed, 100).unwrap_err();
        assert_eq!(
            err,
            FormatError::OffsetNotMonotonic {
                direction: 0,
                frame: 1,
                offset: 40,
                previous: 50
            }
        );
    }

    #[test]
    fn truncated_pointer_table_is_rejected() {
        let mut w = Writer::new();
        let header = Header {
            directions: 2,
            frames_per_direction: 2,
            ..Header::default()
        };
        header.write(&mut w);
        w.u32(40);
        let data = w.flush();
        let mut reader = Reader::new(&data);
        let parsed = Header::parse(&mut reader).unwrap();
        assert!(matches!(
            parse_pointer_table(&mut reader, &parsed, data.len()),
            Err(FormatError::Truncated { .. })
        ));
    }
}
