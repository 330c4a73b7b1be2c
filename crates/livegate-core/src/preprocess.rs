//! Deterministic frame-to-tensor conversion.
//!
//! The classifier's accuracy depends on the input byte layout being exactly
//! what it was trained on: 80×80 pixels, channel-major, blue channel first,
//! raw 0–255 intensities as 32-bit floats. Every step here is fixed and
//! resolution-independent.

use crate::types::{Frame, Rotation};
use image::imageops::{self, FilterType};
use image::RgbImage;
use ndarray::Array4;

/// Side length of the classifier's square input.
pub const MODEL_INPUT_SIZE: u32 = 80;

/// Number of color channels in the input tensor.
pub const MODEL_INPUT_CHANNELS: usize = 3;

/// Convert a frame into the classifier's `[1, 3, 80, 80]` input tensor.
///
/// The pixel buffer is rescaled to exactly 80×80 with independent horizontal
/// and vertical scale factors (nearest-neighbour, so pixel intensities pass
/// through unchanged), then rotated by the frame's rotation hint.
///
/// Channels are written blue-first: channel 0 carries blue, channel 1 green,
/// channel 2 red. The classifier was trained on BGR-ordered input, so this
/// inversion relative to the packed-RGB source must be preserved exactly.
/// Values are the raw 0–255 intensities cast to `f32` — the model expects no
/// further scaling.
///
/// The tensor is in standard layout: its flat buffer iterates
/// batch→channel→row→column, 1×3×80×80 `f32` values.
///
/// # Panics
///
/// Panics if the frame has zero-area dimensions, which is a contract
/// violation by the capture source.
pub fn frame_to_tensor(frame: &Frame) -> Array4<f32> {
    let (width, height) = frame.pixels().dimensions();
    assert!(
        width > 0 && height > 0,
        "frame has zero-area dimensions ({width}x{height})"
    );

    let resized = imageops::resize(
        frame.pixels(),
        MODEL_INPUT_SIZE,
        MODEL_INPUT_SIZE,
        FilterType::Nearest,
    );
    let oriented = orient(resized, frame.rotation());

    let size = MODEL_INPUT_SIZE as usize;
    let mut tensor = Array4::<f32>::zeros((1, MODEL_INPUT_CHANNELS, size, size));

    for (x, y, pixel) in oriented.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        let (x, y) = (x as usize, y as usize);
        tensor[[0, 0, y, x]] = f32::from(b);
        tensor[[0, 1, y, x]] = f32::from(g);
        tensor[[0, 2, y, x]] = f32::from(r);
    }

    tensor
}

/// Apply the capture source's rotation hint. The input is square, so every
/// branch keeps the 80×80 dimensions.
fn orient(pixels: RgbImage, rotation: Rotation) -> RgbImage {
    match rotation {
        Rotation::Deg0 => pixels,
        Rotation::Deg90 => imageops::rotate90(&pixels),
        Rotation::Deg180 => imageops::rotate180(&pixels),
        Rotation::Deg270 => imageops::rotate270(&pixels),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn uniform_frame(width: u32, height: u32, color: [u8; 3]) -> Frame {
        let pixels = RgbImage::from_pixel(width, height, Rgb(color));
        Frame::new(pixels, Rotation::Deg0)
    }

    #[test]
    fn output_shape_is_resolution_independent() {
        for (width, height) in [(640, 480), (1920, 1080), (80, 80), (33, 77), (1, 1)] {
            let tensor = frame_to_tensor(&uniform_frame(width, height, [0, 0, 0]));
            assert_eq!(tensor.shape(), &[1, 3, 80, 80]);
        }
    }

    #[test]
    fn output_buffer_is_exactly_76800_bytes() {
        let tensor = frame_to_tensor(&uniform_frame(640, 480, [1, 2, 3]));
        // 1 batch × 3 channels × 80 × 80 × 4 bytes per f32
        assert_eq!(tensor.len() * std::mem::size_of::<f32>(), 76_800);
    }

    #[test]
    fn channels_are_blue_first() {
        // pure red input: red must land in channel 2, blue channel stays zero
        let tensor = frame_to_tensor(&uniform_frame(160, 120, [255, 0, 0]));
        assert_eq!(tensor[[0, 0, 40, 40]], 0.0);
        assert_eq!(tensor[[0, 1, 40, 40]], 0.0);
        assert_eq!(tensor[[0, 2, 40, 40]], 255.0);
    }

    #[test]
    fn values_are_raw_intensities() {
        let tensor = frame_to_tensor(&uniform_frame(100, 100, [10, 20, 30]));
        assert_eq!(tensor[[0, 0, 0, 0]], 30.0);
        assert_eq!(tensor[[0, 1, 0, 0]], 20.0);
        assert_eq!(tensor[[0, 2, 0, 0]], 10.0);
    }

    #[test]
    fn flat_layout_is_batch_channel_row_column() {
        let mut pixels = RgbImage::new(80, 80);
        pixels.put_pixel(7, 3, Rgb([0, 0, 200]));
        let tensor = frame_to_tensor(&Frame::new(pixels, Rotation::Deg0));

        let flat = tensor.as_slice().expect("tensor is standard layout");
        assert_eq!(flat.len(), 3 * 80 * 80);
        // blue value of pixel (x=7, y=3) sits at channel 0, row 3, column 7
        assert_eq!(flat[3 * 80 + 7], 200.0);
    }

    #[test]
    fn rotation_hint_is_applied_after_resize() {
        // 80x80 source so the resize is the identity; marker in the top-left
        let mut pixels = RgbImage::new(80, 80);
        pixels.put_pixel(0, 0, Rgb([0, 255, 0]));

        let tensor = frame_to_tensor(&Frame::new(pixels, Rotation::Deg90));

        // 90° clockwise moves the top-left corner to the top-right
        assert_eq!(tensor[[0, 1, 0, 79]], 255.0);
        assert_eq!(tensor[[0, 1, 0, 0]], 0.0);
    }

    #[test]
    fn rotation_180_flips_both_axes() {
        let mut pixels = RgbImage::new(80, 80);
        pixels.put_pixel(0, 0, Rgb([0, 0, 255]));

        let tensor = frame_to_tensor(&Frame::new(pixels, Rotation::Deg180));
        assert_eq!(tensor[[0, 0, 79, 79]], 255.0);
    }

    #[test]
    #[should_panic(expected = "zero-area")]
    fn zero_area_frame_is_a_contract_violation() {
        frame_to_tensor(&Frame::new(RgbImage::new(0, 0), Rotation::Deg0));
    }
}
