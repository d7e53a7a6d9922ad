// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use failure::Fail;

/// Everything that can go wrong short of a programming error.  Handing
/// the carver a seam that does not belong to the image is a programming
/// error, and panics instead.
#[derive(Debug, Fail)]
pub enum SeamError {
    /// More seams were requested than the image can give up while
    /// keeping at least one column.
    #[fail(
        display = "Cannot remove {} seams from an image of width {}",
        requested, width
    )]
    InvalidSeamCount { requested: u32, width: u32 },

    #[fail(display = "Not a seam count: {:?}", _0)]
    BadSeamCount(String),

    #[fail(display = "Unknown output mode: {:?}", _0)]
    BadMode(String),

    #[fail(display = "Image error: {}", _0)]
    Image(#[cause] image::ImageError),

    #[fail(display = "I/O error: {}", _0)]
    Io(#[cause] std::io::Error),
}

impl From<image::ImageError> for SeamError {
    fn from(err: image::ImageError) -> Self {
        SeamError::Image(err)
    }
}

impl From<std::io::Error> for SeamError {
    fn from(err: std::io::Error) -> Self {
        SeamError::Io(err)
    }
}
