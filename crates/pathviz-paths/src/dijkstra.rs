use pathviz_core::{Grid, Point};

use crate::astar::best_first;
use crate::frame::AnimationFrame;

/// Search from `start` to `end` with Dijkstra's algorithm.
///
/// This is the A* loop with a zero heuristic, so the open set is ordered by
/// `g` alone. Paths have the same length as A*'s on open grids; the
/// exploration order differs.
///
/// Returns an empty sequence when either endpoint is missing.
pub fn dijkstra(
    grid: &mut Grid,
    start: Option<Point>,
    end: Option<Point>,
    allow_diagonal: bool,
) -> Vec<AnimationFrame> {
    let (Some(start), Some(end)) = (start, end) else {
        return Vec::new();
    };
    best_first(grid, start, end, allow_diagonal, |_, _| 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar::astar;
    use crate::frame::{path_len, path_of, visit_count};

    fn run(grid: &mut Grid, diagonal: bool) -> Vec<AnimationFrame> {
        let (s, e) = (grid.start(), grid.end());
        dijkstra(grid, s, e, diagonal)
    }

    #[test]
    fn explores_both_sides_evenly() {
        let mut g = Grid::from_ascii("..S.E");
        let frames = run(&mut g, false);
        let visited: Vec<Point> = frames
            .iter()
            .filter(|f| f.is_visit())
            .map(|f| f.pos)
            .collect();
        assert_eq!(
            visited,
            vec![
                Point::new(1, 0),
                Point::new(3, 0),
                Point::new(0, 0),
                Point::new(4, 0)
            ]
        );
        assert_eq!(
            path_of(&frames),
            vec![Point::new(2, 0), Point::new(3, 0), Point::new(4, 0)]
        );
    }

    #[test]
    fn heuristic_stays_zero() {
        let mut g = Grid::from_ascii("S..E");
        run(&mut g, false);
        let n = g.node(Point::new(2, 0)).unwrap();
        assert_eq!(n.h, 0);
        assert_eq!(n.f, n.g);
    }

    #[test]
    fn matches_astar_length_on_open_grids() {
        for diagonal in [false, true] {
            for (cols, rows) in [(5, 5), (9, 4), (12, 7)] {
                let mut g = Grid::new(cols, rows);
                let d = run(&mut g, diagonal);
                let (s, e) = (g.start(), g.end());
                let a = astar(&mut g, s, e, diagonal);
                assert_eq!(path_len(&a), path_len(&d), "{cols}x{rows} diagonal={diagonal}");
                assert!(visit_count(&a) <= visit_count(&d));
            }
        }
    }

    #[test]
    fn routes_around_walls() {
        let mut g = Grid::from_ascii(
            "S#...
             .#.#.
             ...#E",
        );
        let frames = run(&mut g, false);
        assert_eq!(path_len(&frames), 11);
    }
}
