// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::ops::Index;

/// A top-to-bottom path through an image: one column index per row,
/// in row order.  Columns in adjacent rows differ by at most one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seam(Vec<u32>);

impl Seam {
    /// Wrap a list of columns.  Nothing is checked here; see
    /// `is_connected`.
    pub fn new(columns: Vec<u32>) -> Self {
        Seam(columns)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn columns(&self) -> &[u32] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u32> {
        self.0.iter()
    }

    /// True when every step from one row to the next moves at most one
    /// column left or right.
    pub fn is_connected(&self) -> bool {
        self.0.windows(2).all(|w| w[0].abs_diff(w[1]) <= 1)
    }
}

impl Index<usize> for Seam {
    type Output = u32;

    fn index(&self, row: usize) -> &u32 {
        &self.0[row]
    }
}

impl From<Seam> for Vec<u32> {
    fn from(seam: Seam) -> Vec<u32> {
        seam.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connectivity() {
        assert!(Seam::new(vec![2, 3, 3, 2, 1]).is_connected());
        assert!(Seam::new(vec![0]).is_connected());
        assert!(!Seam::new(vec![0, 2]).is_connected());
    }
}
