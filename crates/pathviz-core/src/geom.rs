//! Cell coordinates and grid extents.
//!
//! X grows right (columns), Y grows down (rows). Cells are stored row-major,
//! so the flat index of `(x, y)` is `y * cols + x`.

use std::fmt;

/// A cell coordinate. May lie outside any grid; see [`Bounds::contains`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point `dx` columns right and `dy` rows down.
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The extent `[0, cols) × [0, rows)` of a grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    cols: i32,
    rows: i32,
}

impl Bounds {
    /// Negative sizes are treated as zero.
    pub const fn new(cols: i32, rows: i32) -> Self {
        Self {
            cols: if cols > 0 { cols } else { 0 },
            rows: if rows > 0 { rows } else { 0 },
        }
    }

    #[inline]
    pub fn cols(self) -> i32 {
        self.cols
    }

    #[inline]
    pub fn rows(self) -> i32 {
        self.rows
    }

    /// Number of cells.
    #[inline]
    pub fn len(self) -> usize {
        self.cols as usize * self.rows as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (0..self.cols).contains(&p.x) && (0..self.rows).contains(&p.y)
    }

    /// Row-major index of `p`, or `None` outside the extent.
    #[inline]
    pub fn index(self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| p.y as usize * self.cols as usize + p.x as usize)
    }

    /// Inverse of [`index`](Self::index). Only meaningful below [`len`](Self::len).
    #[inline]
    pub fn point(self, index: usize) -> Point {
        let cols = self.cols.max(1) as usize;
        Point::new((index % cols) as i32, (index / cols) as i32)
    }

    /// Every cell, row by row.
    pub fn iter(self) -> Cells {
        Cells {
            bounds: self,
            next: 0,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Point;
    type IntoIter = Cells;

    fn into_iter(self) -> Cells {
        self.iter()
    }
}

/// Row-major iterator over the cells of a [`Bounds`].
#[derive(Clone, Debug)]
pub struct Cells {
    bounds: Bounds,
    next: usize,
}

impl Iterator for Cells {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let p = self.bounds.point(self.next);
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.bounds.len().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Cells {}
