//! Direction-by-frame grid of decoded frames.

use crate::error::IndexError;
use crate::frame::Frame;

/// Rectangular, fixed-shape container of frames.
///
/// Frames are stored row-major in pointer-table order: direction-major,
/// frame-minor. The shape is set at construction and never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameGrid {
    directions: u32,
    frames_per_direction: u32,
    frames: Vec<Frame>,
}

impl FrameGrid {
    /// Creates a grid of the given shape filled with empty frames.
    pub fn new(directions: u32, frames_per_direction: u32) -> Self {
        let len = (directions * frames_per_direction) as usize;
        Self {
            directions,
            frames_per_direction,
            frames: vec![Frame::default(); len],
        }
    }

    /// Builds a grid from frames already laid out in table order.
    pub(crate) fn from_frames(
        directions: u32,
        frames_per_direction: u32,
        frames: Vec<Frame>,
    ) -> Self {
        debug_assert_eq!(frames.len(), (directions * frames_per_direction) as usize);
        Self {
            directions,
            frames_per_direction,
            frames,
        }
    }

    /// Number of directions in the grid.
    pub fn directions(&self) -> u32 {
        self.directions
    }

    /// Number of frames in each direction.
    pub fn frames_per_direction(&self) -> u32 {
        self.frames_per_direction
    }

    /// Range-checked access to the frame at `(direction, frame)`.
    pub fn frame(&self, direction: u32, frame: u32) -> Result<&Frame, IndexError> {
        let at = self.index(direction, frame)?;
        Ok(&self.frames[at])
    }

    /// Range-checked mutable access, for populating a grid cell by cell.
    pub fn frame_mut(&mut self, direction: u32, frame: u32) -> Result<&mut Frame, IndexError> {
        let at = self.index(direction, frame)?;
        Ok(&mut self.frames[at])
    }

    /// Iterates frames in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }

    fn index(&self, direction: u32, frame: u32) -> Result<usize, IndexError> {
        if direction >= self.directions || frame >= self.frames_per_direction {
            return Err(IndexError {
                direction,
                frame,
                directions: self.directions,
                frames_per_direction: self.frames_per_direction,
            });
        }
        Ok((direction * self.frames_per_direction + frame) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_is_direction_major() {
        let mut grid = FrameGrid::new(2, 3);
        *grid.frame_mut(1, 2).unwrap() = Frame::from_indices(1, 1, 0, 0, vec![9]).unwrap();
        // The cell we wrote is the last one in table order.
        assert_eq!(grid.iter().filter(|f| f.width() == 1).count(), 1);
        assert_eq!(grid.frame(1, 2).unwrap().indices(), &[9]);
        assert_eq!(grid.frame(0, 0).unwrap().width(), 0);
    }

    #[test]
    fn out_of_range_access_fails() {
        let grid = FrameGrid::new(2, 3);
        assert!(grid.frame(1, 2).is_ok());
        assert_eq!(
            grid.frame(2, 0).unwrap_err(),
            IndexError {
                direction: 2,
                frame: 0,
                directions: 2,
                frames_per_direction: 3
            }
        );
        assert!(grid.frame(0, 3).is_err());
    }

    #[test]
    fn empty_grid_rejects_everything() {
        let grid = FrameGrid::default();
        assert!(grid.frame(0, 0).is_err());
    }
}
