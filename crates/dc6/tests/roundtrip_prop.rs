//! Property tests for the encode/decode round-trip law over small synthetic
//! containers.

use proptest::collection::vec;
use proptest::prelude::*;

use dc6::{rle, Dc6, Frame, FrameGrid};

fn arb_frame() -> impl Strategy<Value = Frame> {
    (1u32..=4, 1u32..=4).prop_flat_map(|(width, height)| {
        vec(any::<u8>(), (width * height) as usize).prop_map(move |pixels| {
            Frame::from_indices(width, height, -3, 8, pixels).unwrap()
        })
    })
}

fn arb_container() -> impl Strategy<Value = Dc6> {
    (1u32..=2, 1u32..=2).prop_flat_map(|(directions, frames_per_direction)| {
        vec(arb_frame(), (directions * frames_per_direction) as usize).prop_map(
            move |frames| {
                let mut grid = FrameGrid::new(directions, frames_per_direction);
                let mut it = frames.into_iter();
                for d in 0..directions {
                    for f in 0..frames_per_direction {
                        *grid.frame_mut(d, f).unwrap() = it.next().unwrap();
                    }
                }
                Dc6::from_grid(grid)
            },
        )
    })
}

proptest! {
    /// decode(encode(c)) == c for synthetic containers.
    #[test]
    fn encode_decode_is_identity(dc6 in arb_container()) {
        let bytes = dc6.to_bytes().unwrap();
        let decoded = Dc6::from_bytes(&bytes).unwrap();
        prop_assert_eq!(decoded, dc6);
    }

    /// Re-encoding a decoded container reproduces the same bytes.
    #[test]
    fn encode_is_stable(dc6 in arb_container()) {
        let bytes = dc6.to_bytes().unwrap();
        let decoded = Dc6::from_bytes(&bytes).unwrap();
        prop_assert_eq!(decoded.to_bytes().unwrap(), bytes);
    }

    /// The RLE codec inverts itself for any pixel buffer of the declared
    /// shape.
    #[test]
    fn rle_compress_decompress_is_identity(
        (width, height, pixels) in (1u32..=16, 1u32..=16).prop_flat_map(|(w, h)| {
            vec(any::<u8>(), (w * h) as usize).prop_map(move |p| (w, h, p))
        })
    ) {
        let payload = rle::compress(&pixels, width, height).unwrap();
        prop_assert_eq!(rle::decompress(&payload, width, height).unwrap(), pixels);
    }

    /// Every decoded frame buffer has exactly width * height pixels.
    #[test]
    fn decoded_frames_have_declared_pixel_count(dc6 in arb_container()) {
        let decoded = Dc6::from_bytes(&dc6.to_bytes().unwrap()).unwrap();
        for d in 0..decoded.directions() {
            for f in 0..decoded.frames_per_direction() {
                let frame = decoded.frame(d, f).unwrap();
                prop_assert_eq!(
                    frame.indices().len(),
                    (frame.width() * frame.height()) as usize
                );
            }
        }
    }
}
