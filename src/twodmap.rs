// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Defines the basic two-dimensional map: An addressable field the
/// size of an image, holding one value per pixel.  It backs the
/// luminosity map, the energy map, and both halves of the seam
/// digraph (the cumulative cost and the parent column).
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map, every cell holding the content type's default.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major buffer.  Panics if the buffer is not
    /// exactly `width * height` long.
    pub fn from_vec(width: u32, height: u32, data: Vec<P>) -> Self {
        assert_eq!(
            data.len(),
            width as usize * height as usize,
            "a {}x{} map needs {} cells, got {}",
            width,
            height,
            width as usize * height as usize,
            data.len()
        );
        TwoDimensionalMap {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  An x
    // past the end of a row would silently land in the next row, so
    // the bounds are checked here rather than left to the Vec.
    fn get_index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "({}, {}) is outside a {}x{} map",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// One full row, left to right.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.data[start..start + self.width as usize]
    }

    /// The completed row above `y`, together with row `y` itself,
    /// writable.  This is the shape every dynamic-programming sweep
    /// wants: read the previous row, fill in the current one.
    pub fn split_rows_mut(&mut self, y: u32) -> (&[P], &mut [P]) {
        assert!(y > 0, "row 0 has no row above it");
        let width = self.width as usize;
        let start = self.get_index(0, y);
        let (head, tail) = self.data.split_at_mut(start);
        (&head[start - width..], &mut tail[..width])
    }

    /// All values, in row-major order.
    pub fn as_slice(&self) -> &[P] {
        &self.data
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}

/// One line per row, each cell followed by a tab, the row in square
/// brackets.  Handy for eyeballing small energy and cost tables.
impl<P: Default + Copy + fmt::Display> fmt::Display for TwoDimensionalMap<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height {
            write!(f, "[")?;
            for value in self.row(y) {
                write!(f, "{}\t", value)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
