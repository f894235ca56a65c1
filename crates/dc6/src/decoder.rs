//! DC6 stream decoder.

use dc6_buffers::Reader;

use crate::container::Dc6;
use crate::error::FormatError;
use crate::frame::Frame;
use crate::grid::FrameGrid;
use crate::header::{parse_pointer_table, Header};

/// Decodes a full DC6 stream: fixed header, pointer table, then one frame
/// block per table entry, in table order.
pub(crate) fn decode(data: &[u8]) -> Result<Dc6, FormatError> {
    let mut reader = Reader::new(data);
    let header = Header::parse(&mut reader)?;
    let offsets = parse_pointer_table(&mut reader, &header, data.len())?;

    let mut frames = Vec::with_capacity(offsets.len());
    for (i, &offset) in offsets.iter().enumerate() {
        let direction = i as u32 / header.frames_per_direction;
        let frame = i as u32 % header.frames_per_direction;
        // Offsets were bounds-checked with the pointer table.
        reader.seek(offset as usize)?;
        frames.push(Frame::parse(&mut reader, direction, frame)?);
    }

    let grid = FrameGrid::from_frames(header.directions, header.frames_per_direction, frames);
    Ok(Dc6::from_parts(header, grid))
}
