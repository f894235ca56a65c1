//! Decoder and encoder for the DC6 sprite container format.
//!
//! A DC6 stream holds a grid of directional animation frames: a 24-byte
//! fixed header, a frame pointer table, and one run-length-compressed frame
//! block per (direction, frame) pair. Pixels are 8-bit indices into an
//! external 256-entry palette that is attached separately and only consulted
//! at color-resolution time.
//!
//! # Example
//!
//! ```
//! use dc6::{Dc6, Frame, FrameGrid};
//!
//! let mut grid = FrameGrid::new(1, 1);
//! *grid.frame_mut(0, 0)? = Frame::from_indices(2, 1, 0, 0, vec![7, 0])?;
//! let dc6 = Dc6::from_grid(grid);
//!
//! let bytes = dc6.to_bytes()?;
//! let decoded = Dc6::from_bytes(&bytes)?;
//! assert_eq!(decoded.frame(0, 0)?.indices(), &[7, 0]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod constants;
pub mod rle;

mod container;
mod decoder;
mod encoder;
mod error;
mod frame;
mod grid;
mod header;
mod palette;

pub use container::{Dc6, FrameView};
pub use error::{EncodeError, FormatError, IndexError, NoPaletteError};
pub use frame::Frame;
pub use grid::FrameGrid;
pub use header::Header;
pub use palette::{Palette, Rgb, Rgba};
pub use rle::RleError;
