//! Favicon visual similarity via per-pixel mean squared error
//!
//! This is a coarse pixel metric, not a structural one: two icons that differ
//! by a small shift can score low while being visually alike. That limitation
//! is part of the scoring contract, not something to compensate for here.

use image::imageops::FilterType;
use image::RgbImage;
use tracing::debug;

/// Visual similarity in `[0, 100]` between two encoded images.
///
/// Both inputs are decoded and converted to RGB; if the dimensions differ the
/// second image is resampled (Lanczos3) to match the first. The score is
/// `max(0, 100 - mse / 255 * 100)` over all channels. Any decode failure
/// yields 0.0.
pub fn score(bytes_a: &[u8], bytes_b: &[u8]) -> f64 {
    let image_a = match image::load_from_memory(bytes_a) {
        Ok(img) => img.to_rgb8(),
        Err(err) => {
            debug!("failed to decode first image: {err}");
            return 0.0;
        }
    };
    let image_b = match image::load_from_memory(bytes_b) {
        Ok(img) => img.to_rgb8(),
        Err(err) => {
            debug!("failed to decode second image: {err}");
            return 0.0;
        }
    };

    compare_rgb(&image_a, &image_b)
}

fn compare_rgb(a: &RgbImage, b: &RgbImage) -> f64 {
    let resized;
    let b = if a.dimensions() != b.dimensions() {
        resized = image::imageops::resize(b, a.width(), a.height(), FilterType::Lanczos3);
        &resized
    } else {
        b
    };

    let total = (a.as_raw().len()) as f64;
    if total == 0.0 {
        return 0.0;
    }

    let sum_sq: f64 = a
        .as_raw()
        .iter()
        .zip(b.as_raw())
        .map(|(&x, &y)| {
            let diff = x as f64 - y as f64;
            diff * diff
        })
        .sum();
    let mse = sum_sq / total;

    (100.0 - mse / 255.0 * 100.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, ImageFormat, Rgb};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32, pixel: [u8; 3]) -> Vec<u8> {
        let img: RgbImage = ImageBuffer::from_pixel(width, height, Rgb(pixel));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn identical_images_score_100() {
        let icon = png_bytes(16, 16, [120, 80, 200]);
        assert_eq!(score(&icon, &icon), 100.0);
    }

    #[test]
    fn black_vs_white_scores_zero() {
        let black = png_bytes(16, 16, [0, 0, 0]);
        let white = png_bytes(16, 16, [255, 255, 255]);
        assert_eq!(score(&black, &white), 0.0);
    }

    #[test]
    fn differing_dimensions_are_resampled() {
        // Same solid color at different sizes still compares as identical
        let small = png_bytes(8, 8, [10, 200, 30]);
        let large = png_bytes(32, 32, [10, 200, 30]);
        assert_eq!(score(&small, &large), 100.0);
    }

    #[test]
    fn undecodable_input_scores_zero() {
        let valid = png_bytes(16, 16, [1, 2, 3]);
        assert_eq!(score(b"not an image", &valid), 0.0);
        assert_eq!(score(&valid, b"not an image"), 0.0);
        assert_eq!(score(b"", b""), 0.0);
    }

    #[test]
    fn near_identical_images_score_high_but_below_100() {
        let a = png_bytes(16, 16, [100, 100, 100]);
        let b = png_bytes(16, 16, [102, 100, 100]);
        let s = score(&a, &b);
        assert!(s > 99.0 && s < 100.0, "got {s}");
    }

    #[test]
    fn score_is_bounded() {
        let a = png_bytes(4, 4, [255, 0, 0]);
        let b = png_bytes(4, 4, [0, 255, 255]);
        let s = score(&a, &b);
        assert!((0.0..=100.0).contains(&s));
    }
}
