use pathviz_core::{Bounds, Point};

/// Orthogonal offsets in enumeration order: left, right, up, down.
const CARDINAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal offsets in enumeration order.
const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Cached neighbor computation shared by every search.
///
/// Enumeration order is fixed, which makes DFS output and A*/Dijkstra tie
/// breaks reproducible. Only in-bounds points are yielded; walls are left to
/// the caller. Diagonal moves are not restricted by the orthogonal cells
/// they cut across.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Neighbors of `p` inside `bounds`, diagonals appended when
    /// `allow_diagonal` is set.
    pub fn of(&mut self, bounds: Bounds, p: Point, allow_diagonal: bool) -> &[Point] {
        self.buf.clear();
        let diagonals: &[(i32, i32)] = if allow_diagonal { &DIAGONAL } else { &[] };
        for &(dx, dy) in CARDINAL.iter().chain(diagonals) {
            let n = p.shift(dx, dy);
            if bounds.contains(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_order() {
        let mut nb = Neighbors::new();
        let b = Bounds::new(5, 5);
        let p = Point::new(2, 2);
        assert_eq!(
            nb.of(b, p, false),
            &[
                Point::new(1, 2),
                Point::new(3, 2),
                Point::new(2, 1),
                Point::new(2, 3)
            ]
        );
        let all = nb.of(b, p, true).to_vec();
        assert_eq!(all.len(), 8);
        assert_eq!(
            &all[4..],
            &[
                Point::new(1, 1),
                Point::new(1, 3),
                Point::new(3, 1),
                Point::new(3, 3)
            ]
        );
    }

    #[test]
    fn corner_is_clipped() {
        let mut nb = Neighbors::new();
        let b = Bounds::new(3, 3);
        assert_eq!(
            nb.of(b, Point::ZERO, true),
            &[Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]
        );
        assert_eq!(
            nb.of(b, Point::new(2, 2), false),
            &[Point::new(1, 2), Point::new(2, 1)]
        );
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        let mut nb = Neighbors::new();
        assert!(nb.of(Bounds::new(1, 1), Point::ZERO, true).is_empty());
    }
}
