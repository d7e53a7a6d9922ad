// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the luminosity of a pixel
//!
//! The luminosity is the single brightness value the energy field is
//! built on: a weighted sum of the red, green, and blue channels,
//!
//! ```text
//! L = ⌊0.21·R + 0.72·G + 0.07·B⌋
//! ```
//!
//! truncated, not rounded.  Alpha plays no part.
//!
//! ```
//! use image::Rgb;
//! use lumaseam::luminosity;
//!
//! // 42 + 72 + 3.5
//! assert_eq!(luminosity(&Rgb([200u8, 100, 50])), 117);
//! ```

use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, GrayImage, ImageBuffer, Luma, Pixel, Primitive};
use itertools::iproduct;
use num_traits::NumCast;

const RED_WEIGHT: f64 = 0.21;
const GREEN_WEIGHT: f64 = 0.72;
const BLUE_WEIGHT: f64 = 0.07;

/// Pixel -> Luminosity
#[inline]
pub fn luminosity<P, S>(pixel: &P) -> u32
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    #[inline]
    fn channel<S: Primitive>(c: S) -> f64 {
        <f64 as NumCast>::from(c).unwrap_or(0.0)
    }

    let rgb = pixel.to_rgb();
    let c = rgb.channels();
    let lum = RED_WEIGHT * channel(c[0]) + GREEN_WEIGHT * channel(c[1]) + BLUE_WEIGHT * channel(c[2]);
    // `as` truncates toward zero, which is exactly the rule.
    lum as u32
}

/// Compute the luminosity of every pixel once, so the energy
/// calculation can look neighbours up without re-deriving them.
pub fn luminosity_map<I, P, S>(image: &I) -> TwoDimensionalMap<u32>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    TwoDimensionalMap::from_vec(
        width,
        height,
        iproduct!(0..height, 0..width)
            .map(|(y, x)| luminosity(&image.get_pixel(x, y)))
            .collect(),
    )
}

/// A greyscale rendition of the image in which every pixel is its own
/// luminosity, clamped to the 8-bit range.
pub fn luminosity_image<I, P, S>(image: &I) -> GrayImage
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let lmap = luminosity_map(image);
    let (width, height) = lmap.dimensions();
    ImageBuffer::from_fn(width, height, |x, y| Luma([lmap[(x, y)].min(255) as u8]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba, RgbaImage};

    #[test]
    fn weights_and_truncation() {
        assert_eq!(luminosity(&Rgb([0u8, 0, 0])), 0);
        // 42 + 72 + 3.5
        assert_eq!(luminosity(&Rgb([200u8, 100, 50])), 117);
        // 2.1 + 14.4 + 2.1
        assert_eq!(luminosity(&Rgb([10u8, 20, 30])), 18);
        assert_eq!(luminosity(&Rgb([0u8, 255, 0])), 183);
        assert_eq!(luminosity(&Rgb([255u8, 0, 0])), 53);
        assert_eq!(luminosity(&Rgb([0u8, 0, 255])), 17);
    }

    #[test]
    fn alpha_is_ignored() {
        assert_eq!(
            luminosity(&Rgba([200u8, 100, 50, 0])),
            luminosity(&Rgba([200u8, 100, 50, 255]))
        );
    }

    #[test]
    fn luminosity_image_matches_the_map() {
        let img = RgbaImage::from_fn(3, 2, |x, y| {
            if x == y {
                Rgba([0, 255, 0, 255])
            } else {
                Rgba([0, 0, 50, 255])
            }
        });
        let grey = luminosity_image(&img);
        assert_eq!(grey.dimensions(), (3, 2));
        assert_eq!(grey.get_pixel(0, 0)[0], 183);
        assert_eq!(grey.get_pixel(1, 1)[0], 183);
        assert_eq!(grey.get_pixel(2, 0)[0], 3);
    }
}
