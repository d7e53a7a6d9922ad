// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest vertical seam
//!
//! Given an energy map, build the seam digraph one row at a time: every
//! cell records the cheapest cumulative energy of any path from the top
//! row that ends there, and which of the (up to) three cells above it
//! that path came through.  The seam is then read back from the
//! cheapest cell in the bottom row.
//!
//! Ties are never left to chance.  Going straight down wins over going
//! diagonally, the left diagonal wins over the right, and in the bottom
//! row the leftmost minimum wins.

use crate::energy::calculate_energy;
use crate::seam::Seam;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Pixel, Primitive};

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to make room for more than one
/// energy model behind the carver.
pub trait SeamFinder {
    /// Request the next top-to-bottom seam.
    fn find_vertical_seam(&self) -> Seam;
}

/// The two halves of the seam digraph.  Row 0 of `parent` is never
/// written; a path starts there.
#[derive(Debug)]
pub struct SeamTables {
    pub cost: TwoDimensionalMap<u32>,
    pub parent: TwoDimensionalMap<u32>,
}

// Which column of the row above feeds column `x`?  `above` is the
// completed cost row.
#[inline]
fn choose_parent(above: &[u32], x: usize) -> usize {
    let last = above.len() - 1;
    if last == 0 {
        0
    } else if x == 0 {
        if above[0] <= above[1] {
            0
        } else {
            1
        }
    } else if x == last {
        if above[x - 1] == above[x] || above[x] < above[x - 1] {
            x
        } else {
            x - 1
        }
    } else {
        let m = above[x - 1].min(above[x]).min(above[x + 1]);
        if above[x] == m {
            x
        } else if above[x - 1] == m {
            x - 1
        } else {
            x + 1
        }
    }
}

// Fill a run of cells of one row.  `start` is the column of `cost[0]`,
// so that a row can be handed out in pieces.
fn fill_span(energy: &[u32], above: &[u32], start: usize, cost: &mut [u32], parent: &mut [u32]) {
    for (i, (c, p)) in cost.iter_mut().zip(parent.iter_mut()).enumerate() {
        let x = start + i;
        let px = choose_parent(above, x);
        *c = energy[x] + above[px];
        *p = px as u32;
    }
}

#[cfg(not(feature = "threaded"))]
fn fill_row(energy: &[u32], above: &[u32], cost: &mut [u32], parent: &mut [u32]) {
    fill_span(energy, above, 0, cost, parent);
}

// Every cell of a row depends only on the row above, so the row can be
// split into chunks and filled concurrently.  Leaving the scope joins
// all the workers, and that join is the barrier between rows.
#[cfg(feature = "threaded")]
fn fill_row(energy: &[u32], above: &[u32], cost: &mut [u32], parent: &mut [u32]) {
    const MIN_THREADED_WIDTH: usize = 512;

    let width = cost.len();
    let workers = num_cpus::get().max(1);
    if width < MIN_THREADED_WIDTH || workers == 1 {
        return fill_span(energy, above, 0, cost, parent);
    }

    let chunk = (width + workers - 1) / workers;
    let result = crossbeam::scope(|scope| {
        for (i, (c, p)) in cost.chunks_mut(chunk).zip(parent.chunks_mut(chunk)).enumerate() {
            scope.spawn(move |_| fill_span(energy, above, i * chunk, c, p));
        }
    });
    if let Err(panic) = result {
        std::panic::resume_unwind(panic);
    }
}

/// Build the cost and parent tables for an energy map.  Panics if the
/// map is empty.
pub fn build_tables(energy: &TwoDimensionalMap<u32>) -> SeamTables {
    let (width, height) = energy.dimensions();
    assert!(
        width > 0 && height > 0,
        "cannot find a seam in a {}x{} image",
        width,
        height
    );

    let mut cost: TwoDimensionalMap<u32> = TwoDimensionalMap::new(width, height);
    let mut parent: TwoDimensionalMap<u32> = TwoDimensionalMap::new(width, height);

    // The first row costs exactly its own energy.
    for x in 0..width {
        cost[(x, 0)] = energy[(x, 0)];
    }

    for y in 1..height {
        let (above, current) = cost.split_rows_mut(y);
        let (_, parents) = parent.split_rows_mut(y);
        fill_row(energy.row(y), above, current, parents);
    }

    SeamTables { cost, parent }
}

/// Find the column of the leftmost cheapest cell in the bottom row.
pub fn cheapest_terminal(cost: &TwoDimensionalMap<u32>) -> u32 {
    let bottom = cost.row(cost.height() - 1);
    let mut best = 0;
    for (x, &c) in bottom.iter().enumerate().skip(1) {
        if c < bottom[best] {
            best = x;
        }
    }
    best as u32
}

/// Follow the parent pointers from the given bottom-row column up to
/// the top row.
pub fn backtrack(parent: &TwoDimensionalMap<u32>, terminal: u32) -> Seam {
    // Working backwards, collect the columns bottom to top, then
    // reverse.
    let mut columns = (1..parent.height())
        .rev()
        .fold(vec![terminal], |mut acc, y| {
            let below = acc[acc.len() - 1];
            acc.push(parent[(below, y)]);
            acc
        });
    columns.reverse();
    Seam::new(columns)
}

/// Given an energy map, return the list of x-coordinates that, when
/// mapped with the range (0..height), give the XY coordinates for each
/// pixel in the seam to be removed.
pub fn energy_to_vertical_seam(energy: &TwoDimensionalMap<u32>) -> Seam {
    let tables = build_tables(energy);
    backtrack(&tables.parent, cheapest_terminal(&tables.cost))
}

/// The basic seam engine: an image reference, and the luminosity
/// gradient energy computed from scratch on every request.
pub struct LuminositySeams<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    image: &'a I,
}

impl<'a, I, P, S> LuminositySeams<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Takes a reference to an image, and holds onto it.
    pub fn new(image: &'a I) -> Self {
        LuminositySeams { image }
    }
}

impl<'a, I, P, S> SeamFinder for LuminositySeams<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    fn find_vertical_seam(&self) -> Seam {
        energy_to_vertical_seam(&calculate_energy(self.image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    const ENERGY_DATA: [u32; 20] = [9, 9, 0, 9, 9, 9, 1, 9, 8, 9, 9, 9, 9, 9, 0, 9, 9, 9, 0, 9];

    fn emap(width: u32, height: u32, data: &[u32]) -> TwoDimensionalMap<u32> {
        TwoDimensionalMap::from_vec(width, height, data.to_vec())
    }

    #[test]
    fn energy_grid_to_vertical_seam() {
        let seam = energy_to_vertical_seam(&emap(5, 4, &ENERGY_DATA));
        assert_eq!(seam.columns(), &[2, 3, 4, 3]);
    }

    #[test]
    fn cost_and_parent_tables() {
        let tables = build_tables(&emap(5, 4, &ENERGY_DATA));
        assert_eq!(
            tables.cost.as_slice(),
            &[9, 9, 0, 9, 9, 18, 1, 9, 8, 18, 10, 10, 10, 17, 8, 19, 19, 19, 8, 17][..]
        );
        assert_eq!(&tables.parent.as_slice()[5..], &[0, 2, 2, 2, 4, 1, 1, 1, 3, 3, 0, 1, 2, 4, 4][..]);
    }

    #[test]
    fn cost_dominates_energy() {
        let energy = emap(5, 4, &ENERGY_DATA);
        let tables = build_tables(&energy);
        assert_eq!(tables.cost.row(0), energy.row(0));
        for (c, e) in tables.cost.as_slice().iter().zip(energy.as_slice()) {
            assert!(c >= e);
        }
    }

    #[test]
    fn straight_down_wins_ties() {
        let seam = energy_to_vertical_seam(&emap(3, 2, &[0, 0, 0, 5, 5, 5]));
        assert_eq!(seam.columns(), &[0, 0]);
        let tables = build_tables(&emap(3, 2, &[0, 0, 0, 5, 5, 5]));
        assert_eq!(tables.parent.row(1), &[0, 1, 2]);
    }

    #[test]
    fn left_diagonal_beats_right_diagonal() {
        let energy = emap(3, 2, &[0, 5, 0, 9, 0, 9]);
        let tables = build_tables(&energy);
        assert_eq!(tables.parent.row(1), &[0, 0, 2]);
        assert_eq!(energy_to_vertical_seam(&energy).columns(), &[0, 1]);
    }

    #[test]
    fn last_column_goes_straight_on_a_tie() {
        let energy = emap(2, 2, &[3, 3, 1, 0]);
        assert_eq!(build_tables(&energy).parent.row(1), &[0, 1]);
        assert_eq!(energy_to_vertical_seam(&energy).columns(), &[1, 1]);
    }

    #[test]
    fn first_column_goes_right_only_when_strictly_cheaper() {
        let energy = emap(2, 2, &[4, 3, 0, 9]);
        assert_eq!(build_tables(&energy).parent.row(1), &[1, 1]);
        assert_eq!(energy_to_vertical_seam(&energy).columns(), &[1, 0]);
    }

    #[test]
    fn leftmost_terminal_wins() {
        let energy = emap(4, 1, &[7, 2, 5, 2]);
        assert_eq!(energy_to_vertical_seam(&energy).columns(), &[1]);
    }

    #[test]
    fn one_column_forces_the_seam() {
        let energy = emap(1, 4, &[3, 1, 4, 1]);
        let tables = build_tables(&energy);
        assert_eq!(tables.cost.as_slice(), &[3, 4, 8, 9][..]);
        assert_eq!(energy_to_vertical_seam(&energy).columns(), &[0, 0, 0, 0]);
    }

    #[test]
    fn uniform_image_carves_the_left_edge() {
        let img = RgbaImage::from_pixel(6, 5, Rgba([90, 90, 90, 255]));
        let seam = LuminositySeams::new(&img).find_vertical_seam();
        assert_eq!(seam.columns(), &[0, 0, 0, 0, 0]);
    }

    // Energy of the bright-centre image is
    //     0 183   0
    //   183 366 183
    //     0 183   0
    // so the cheapest seams hug either edge at 183, and the left one
    // wins.
    #[test]
    fn bright_centre_is_avoided() {
        let img = RgbaImage::from_fn(3, 3, |x, y| {
            if x == 1 && y == 1 {
                Rgba([0, 255, 0, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        });
        let tables = build_tables(&calculate_energy(&img));
        assert_eq!(tables.cost.row(1), &[183, 366, 183]);
        assert_eq!(tables.cost.row(2), &[183, 366, 183]);
        assert_eq!(tables.parent.row(1), &[0, 0, 2]);
        assert_eq!(tables.parent.row(2), &[0, 0, 2]);
        assert_eq!(LuminositySeams::new(&img).find_vertical_seam().columns(), &[0, 0, 0]);
    }

    #[test]
    fn seams_are_connected() {
        let img = RgbaImage::from_fn(17, 11, |x, y| {
            Rgba([((x * 37 + y * 11) % 256) as u8, ((x * y * 5) % 256) as u8, (y * 23) as u8, 255])
        });
        let seam = LuminositySeams::new(&img).find_vertical_seam();
        assert_eq!(seam.len(), 11);
        assert!(seam.is_connected());
        assert!(seam.iter().all(|&x| x < 17));
    }

    #[cfg(feature = "threaded")]
    #[test]
    fn threaded_rows_match_a_single_pass() {
        let width = 2000;
        let above: Vec<u32> = (0..width).map(|x| (x * 7919 % 613) as u32).collect();
        let energy: Vec<u32> = (0..width).map(|x| (x * 31 % 97) as u32).collect();
        let (mut cost, mut parent) = (vec![0; width], vec![0; width]);
        let (mut cost1, mut parent1) = (vec![0; width], vec![0; width]);
        fill_row(&energy, &above, &mut cost, &mut parent);
        fill_span(&energy, &above, 0, &mut cost1, &mut parent1);
        assert_eq!(cost, cost1);
        assert_eq!(parent, parent1);
    }
}
