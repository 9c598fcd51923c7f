use pathviz_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
///
/// The minimal number of steps between two cells when diagonal moves are
/// allowed on an open grid.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Point::new(0, 0);
        let b = Point::new(4, -2);
        assert_eq!(manhattan(a, b), 6);
        assert_eq!(chebyshev(a, b), 4);
        assert_eq!(manhattan(b, b), 0);
    }
}
