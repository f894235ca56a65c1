//! Run-length codec for frame pixel data.
//!
//! Each frame's payload is a stream of control bytes:
//!
//! - `0x80` — end of the current scanline; the write cursor moves to the
//!   start of the next row and any unwritten pixels keep the transparent
//!   default.
//! - High bit set, value != `0x80` — transparency run; the low 7 bits give a
//!   pixel count to skip. No further bytes belong to the run.
//! - High bit clear — opaque run; the value (1–127) is the number of literal
//!   palette-index bytes that follow verbatim.
//!
//! Rows are filled top row first. Index 0 is the transparent default.

use thiserror::Error;

use crate::constants::{END_OF_SCANLINE, MAX_RUN_LENGTH, TRANSPARENT_RUN_BIT};
use crate::error::EncodeError;

/// Undecodable run-length stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RleError {
    /// The payload ended before every row was filled.
    #[error("pixel data exhausted after {rows_filled} of {height} rows")]
    Truncated { rows_filled: u32, height: u32 },
    /// A run would advance the write cursor past the end of its row.
    #[error("run of {run} pixels overflows row {row} of width {width}")]
    RowOverrun { row: u32, run: u32, width: u32 },
}

/// Decompresses a frame payload into a flat `width * height` buffer of
/// palette indices, row by row, top row first.
///
/// The stream ends once `height` end-of-scanline markers have been consumed;
/// any payload bytes after that are ignored. Exhausting the payload first is
/// an error, as is any run that crosses a row boundary — the write cursor
/// never leaves the declared buffer.
pub fn decompress(data: &[u8], width: u32, height: u32) -> Result<Vec<u8>, RleError> {
    let width = width as usize;
    let height = height as usize;
    let mut indices = vec![0u8; width * height];
    let mut row = 0usize;
    let mut x = 0usize;
    let mut pos = 0usize;

    while row < height {
        let Some(&control) = data.get(pos) else {
            return Err(RleError::Truncated {
                rows_filled: row as u32,
                height: height as u32,
            });
        };
        pos += 1;

        if control == END_OF_SCANLINE {
            row += 1;
            x = 0;
        } else if control & TRANSPARENT_RUN_BIT != 0 {
            let run = (control & !TRANSPARENT_RUN_BIT) as usize;
            if x + run > width {
                return Err(RleError::RowOverrun {
                    row: row as u32,
                    run: run as u32,
                    width: width as u32,
                });
            }
            x += run;
        } else {
            let run = control as usize;
            if x + run > width {
                return Err(RleError::RowOverrun {
                    row: row as u32,
                    run: run as u32,
                    width: width as u32,
                });
            }
            let Some(literals) = data.get(pos..pos + run) else {
                return Err(RleError::Truncated {
                    rows_filled: row as u32,
                    height: height as u32,
                });
            };
            let at = row * width + x;
            indices[at..at + run].copy_from_slice(literals);
            pos += run;
            x += run;
        }
    }

    Ok(indices)
}

/// Compresses a flat `width * height` pixel-index buffer into a frame
/// payload using the canonical greedy policy:
///
/// - runs are maximal and split at 127 pixels;
/// - index 0 pixels are emitted as transparency skips, never literals;
/// - trailing transparency in a row is elided (the end-of-scanline marker
///   covers it);
/// - every row, including the last, is closed with `0x80`.
///
/// The policy is deterministic, so compressing a decompressed payload is
/// stable, and [`decompress`] inverts it byte-for-byte at the pixel level.
pub fn compress(indices: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    let w = width as usize;
    let h = height as usize;
    if indices.len() != w * h {
        return Err(EncodeError::PixelCountMismatch {
            width,
            height,
            actual: indices.len(),
        });
    }

    let mut out = Vec::new();
    if w == 0 {
        // Zero-width rows still need their scanline markers.
        out.resize(h, END_OF_SCANLINE);
        return Ok(out);
    }

    for row in indices.chunks_exact(w) {
        // Trailing transparency is covered by the scanline marker.
        let end = row.iter().rposition(|&p| p != 0).map_or(0, |i| i + 1);
        let mut x = 0usize;
        while x < end {
            if row[x] == 0 {
                let run = row[x..end].iter().take_while(|&&p| p == 0).count();
                let mut left = run;
                while left > 0 {
                    let n = left.min(MAX_RUN_LENGTH);
                    out.push(TRANSPARENT_RUN_BIT | n as u8);
                    left -= n;
                }
                x += run;
            } else {
                let run = row[x..end].iter().take_while(|&&p| p != 0).count();
                let mut start = x;
                while start < x + run {
                    let n = (x + run - start).min(MAX_RUN_LENGTH);
                    out.push(n as u8);
                    out.extend_from_slice(&row[start..start + n]);
                    start += n;
                }
                x += run;
            }
        }
        out.push(END_OF_SCANLINE);
    }

    Ok(out)
}
