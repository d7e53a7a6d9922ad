// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the sum of two absolute luminosity
//! differences: one against a horizontal neighbour and one against a
//! vertical neighbour.  Which neighbours depends on where the pixel
//! sits.  Most pixels look right and down; the last column looks left
//! instead of right, and the last row looks up instead of down.  There
//! is no wraparound.
//!
//! On a grid one pixel wide (or one pixel tall) some of those
//! neighbours do not exist at all, and the missing term counts as zero.

use crate::cq;
use crate::luminosity::{luminosity, luminosity_map};
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, GrayImage, ImageBuffer, Luma, Pixel, Primitive};
use itertools::iproduct;

// The border table, written once and fed by whatever luminosity
// lookup the caller has: a precomputed map for the whole field, or
// the image itself for a single pixel.
fn energy_with<L>(lum: L, (width, height): (u32, u32), (x, y): (u32, u32)) -> u32
where
    L: Fn(u32, u32) -> u32,
{
    assert!(
        x < width && y < height,
        "({}, {}) is outside a {}x{} image",
        x,
        y,
        width,
        height
    );
    let (mw, mh) = (width - 1, height - 1);
    let here = lum(x, y);
    let diff = |other: Option<u32>| other.map_or(0, |o| o.abs_diff(here));

    let horizontal = cq!(
        x == mw,
        diff(cq!(x == 0, None, Some(lum(x - 1, y)))),
        diff(Some(lum(x + 1, y)))
    );
    let vertical = cq!(
        y == mh,
        diff(cq!(y == 0, None, Some(lum(x, y - 1)))),
        diff(Some(lum(x, y + 1)))
    );
    horizontal + vertical
}

/// (Image, x, y) -> Energy
///
/// The energy of a single pixel, computed directly from the image.
/// Panics if the coordinate is outside the image.
pub fn energy_at<I, P, S>(image: &I, x: u32, y: u32) -> u32
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    energy_with(
        |px, py| luminosity(&image.get_pixel(px, py)),
        image.dimensions(),
        (x, y),
    )
}

// Image -> Energy Map

/// Compute the energy of every pixel in an image.  The luminosity of
/// each pixel is derived once up front; nothing is kept between calls.
pub fn calculate_energy<I, P, S>(image: &I) -> TwoDimensionalMap<u32>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let lmap = luminosity_map(image);
    let dims = lmap.dimensions();
    let (width, height) = dims;
    TwoDimensionalMap::from_vec(
        width,
        height,
        iproduct!(0..height, 0..width)
            .map(|(y, x)| energy_with(|px, py| lmap[(px, py)], dims, (x, y)))
            .collect(),
    )
}

/// Render the energy field as a greyscale image.  Energies run up to
/// 510, so anything brighter than white is clamped.
pub fn energy_image<I, P, S>(image: &I) -> GrayImage
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let emap = calculate_energy(image);
    let (width, height) = emap.dimensions();
    ImageBuffer::from_fn(width, height, |x, y| Luma([emap[(x, y)].min(255) as u8]))
}
