// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Remove seams from an image
//!
//! Remove one seam, or many, from an image.  Every removal builds a
//! brand new image one column narrower; the source is only ever read.

use crate::error::SeamError;
use crate::seam::Seam;
use crate::seamfinder::{LuminositySeams, SeamFinder};
use image::{GenericImageView, ImageBuffer, Pixel, Primitive, Rgba, RgbaImage};
use log::{debug, warn};

/// Copy every pixel except the seam's into a new image one column
/// narrower.  Left of the seam nothing moves; right of it everything
/// moves one column left.  Each row is handled on its own, since the
/// seam may sit in a different column on every row.
///
/// Panics if the seam is not one this image could have produced: the
/// wrong length, a column off the edge, or a disconnected path.
pub fn remove_vertical_seam<I, P, S>(image: &I, seam: &Seam) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    assert!(width > 0, "cannot remove a seam from an empty image");
    assert_eq!(
        seam.len(),
        height as usize,
        "a seam for an image of height {} must have {} columns",
        height,
        height
    );
    assert!(seam.is_connected(), "seam {:?} is not connected", seam);

    let mut imgbuf = ImageBuffer::new(width - 1, height);
    for (y, &col) in (0..height).zip(seam.iter()) {
        assert!(
            col < width,
            "seam column {} on row {} is outside an image of width {}",
            col,
            y,
            width
        );
        for x in 0..col {
            imgbuf.put_pixel(x, y, image.get_pixel(x, y));
        }
        for x in (col + 1)..width {
            imgbuf.put_pixel(x - 1, y, image.get_pixel(x, y));
        }
    }
    imgbuf
}

/// Find the cheapest seam in the image and remove it.
pub fn carve_once<I, P, S>(image: &I) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let seam = LuminositySeams::new(image).find_vertical_seam();
    debug!("seam: {:?}", seam.columns());
    remove_vertical_seam(image, &seam)
}

/// Paint the next seam red on a copy of the image.
pub fn show_seam(image: &RgbaImage) -> RgbaImage {
    let seam = LuminositySeams::new(image).find_vertical_seam();
    RgbaImage::from_fn(image.width(), image.height(), |x, y| {
        if seam[y as usize] == x {
            Rgba([255, 0, 0, 255])
        } else {
            *image.get_pixel(x, y)
        }
    })
}

/// A struct for holding the image to be carved.
pub struct SeamCarver<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    image: &'a I,
}

impl<'a, I, P, S> SeamCarver<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: &'a I) -> Self {
        Self { image }
    }

    // The entire energy map and seam digraph are rebuilt for every
    // seam.  Removing a seam changes the gradient of every pixel that
    // touched it, so nothing from the previous round is trustworthy.

    /// Remove `seams` seams, one after another.  At least one column
    /// must survive, so asking for `width` seams or more is refused and
    /// the image is left alone.
    pub fn carve(&self, seams: u32) -> Result<ImageBuffer<P, Vec<S>>, SeamError> {
        let width = self.image.width();
        if seams >= width {
            return Err(SeamError::InvalidSeamCount {
                requested: seams,
                width,
            });
        }

        if seams == 0 {
            let (_, height) = self.image.dimensions();
            let mut copy = ImageBuffer::<P, Vec<S>>::new(width, height);
            self.image.pixels().for_each(|p| copy.put_pixel(p.0, p.1, p.2));
            return Ok(copy);
        }

        let mut scratch = carve_once(self.image);
        debug!("round 1: width now {}", scratch.width());
        for round in 1..seams {
            scratch = carve_once(&scratch);
            debug!("round {}: width now {}", round + 1, scratch.width());
        }
        Ok(scratch)
    }
}

/// Remove `seams` seams from an image, or, when the request can't be
/// honoured, report why and hand the image back untouched.
pub fn carve_or_keep<P, S>(image: ImageBuffer<P, Vec<S>>, seams: u32) -> ImageBuffer<P, Vec<S>>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let result = SeamCarver::new(&image).carve(seams);
    match result {
        Ok(carved) => carved,
        Err(err) => {
            warn!("{}", err);
            image
        }
    }
}
