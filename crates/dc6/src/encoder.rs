//! DC6 stream encoder.

use dc6_buffers::Writer;

use crate::constants::HEADER_SIZE;
use crate::container::Dc6;
use crate::error::EncodeError;

/// Serializes a container: fixed header, recomputed pointer table, then the
/// frame blocks packed contiguously in table order.
///
/// Each frame's stored compressed payload is written verbatim; canonical
/// recompression happens when a frame is built from raw pixels
/// ([`Frame::from_indices`](crate::Frame::from_indices)).
pub(crate) fn encode(dc6: &Dc6) -> Result<Vec<u8>, EncodeError> {
    let grid = dc6.frames();
    let table_len = grid.directions() as usize * grid.frames_per_direction() as usize * 4;

    let mut total = HEADER_SIZE + table_len;
    for frame in grid.iter() {
        frame.validate()?;
        total += frame.block_len();
    }

    let mut writer = Writer::with_capacity(total);
    dc6.header().write(&mut writer);

    let mut offset = HEADER_SIZE + table_len;
    for frame in grid.iter() {
        writer.u32(offset as u32);
        offset += frame.block_len();
    }
    for frame in grid.iter() {
        frame.write(&mut writer);
    }

    Ok(writer.flush())
}
