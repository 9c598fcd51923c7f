use pathviz_core::{Grid, NodeType, Point};

use crate::distance::manhattan;
use crate::frame::AnimationFrame;
use crate::neighbors::Neighbors;
use crate::path::push_path;

/// Search from `start` to `end` with A* and a Manhattan heuristic.
///
/// Every step costs 1, diagonal moves included, and the heuristic stays
/// Manhattan when diagonals are allowed. The open set is scanned linearly for
/// the lowest `f`; among equal values the one inserted first wins.
///
/// Returns an empty sequence when either endpoint is missing.
pub fn astar(
    grid: &mut Grid,
    start: Option<Point>,
    end: Option<Point>,
    allow_diagonal: bool,
) -> Vec<AnimationFrame> {
    let (Some(start), Some(end)) = (start, end) else {
        return Vec::new();
    };
    best_first(grid, start, end, allow_diagonal, manhattan)
}

/// Shared A*/Dijkstra loop, parameterised by the heuristic.
pub(crate) fn best_first(
    grid: &mut Grid,
    start: Point,
    end: Point,
    allow_diagonal: bool,
    estimate: impl Fn(Point, Point) -> i32,
) -> Vec<AnimationFrame> {
    grid.reset_state();
    let (Some(start_idx), Some(end_idx)) = (grid.idx(start), grid.idx(end)) else {
        return Vec::new();
    };

    let len = grid.len();
    let bounds = grid.bounds();
    let mut frames = Vec::new();
    let mut open: Vec<usize> = vec![start_idx];
    let mut in_open = vec![false; len];
    let mut closed = vec![false; len];
    in_open[start_idx] = true;

    {
        let h = estimate(start, end);
        let s = &mut grid.scratch_arena_mut()[start_idx];
        s.g = 0;
        s.h = h;
        s.f = h;
    }

    let mut nb = Neighbors::new();

    while !open.is_empty() {
        let slot = lowest_f(grid, &open);
        let ci = open[slot];
        let current = grid.point(ci);

        if ci != start_idx {
            frames.push(AnimationFrame::visit(current));
        }
        if ci == end_idx {
            push_path(grid, current, &mut frames);
            break;
        }

        // Vec::remove keeps insertion order, which the tie break relies on.
        open.remove(slot);
        in_open[ci] = false;
        closed[ci] = true;

        let tentative_g = grid.scratch_arena()[ci].g + 1;

        for &np in nb.of(bounds, current, allow_diagonal) {
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            if closed[ni] || grid.layout()[ni] == NodeType::Wall {
                continue;
            }

            if !in_open[ni] {
                open.push(ni);
                in_open[ni] = true;
            } else if tentative_g >= grid.scratch_arena()[ni].g {
                continue;
            }

            let h = estimate(np, end);
            let n = &mut grid.scratch_arena_mut()[ni];
            n.parent = Some(current);
            n.g = tentative_g;
            n.h = h;
            n.f = tentative_g + h;
        }
    }

    frames
}

/// Slot of the first open entry with the minimum `f`.
fn lowest_f(grid: &Grid, open: &[usize]) -> usize {
    let scratch = grid.scratch_arena();
    let mut best = 0;
    for (slot, &i) in open.iter().enumerate().skip(1) {
        if scratch[i].f < scratch[open[best]].f {
            best = slot;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{FrameKind, is_unreachable, path_len, path_of, visit_count};

    fn visits(frames: &[AnimationFrame]) -> Vec<Point> {
        frames
            .iter()
            .filter(|f| f.kind == FrameKind::Visit)
            .map(|f| f.pos)
            .collect()
    }

    fn run(grid: &mut Grid, diagonal: bool) -> Vec<AnimationFrame> {
        let (s, e) = (grid.start(), grid.end());
        astar(grid, s, e, diagonal)
    }

    #[test]
    fn open_five_by_five() {
        let mut g = Grid::new(5, 5);
        g.set_start(Point::new(0, 0));
        g.set_end(Point::new(4, 4));
        let frames = run(&mut g, false);
        assert_eq!(path_len(&frames), 9);
        assert!(visit_count(&frames) < 25);
        assert_eq!(path_of(&frames).first(), Some(&Point::new(0, 0)));
        assert_eq!(path_of(&frames).last(), Some(&Point::new(4, 4)));
        // Visit frames precede path frames.
        let first_path = frames.iter().position(|f| f.is_path()).unwrap();
        assert!(frames[first_path..].iter().all(|f| f.is_path()));
    }

    #[test]
    fn tie_break_trace() {
        let mut g = Grid::from_ascii(
            "S..
             ...
             ..E",
        );
        let frames = run(&mut g, false);
        assert_eq!(
            visits(&frames),
            vec![
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(2, 0),
                Point::new(1, 1),
                Point::new(0, 2),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
        );
        assert_eq!(
            path_of(&frames),
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn heuristic_steers_toward_end() {
        let mut g = Grid::from_ascii("..S.E");
        let frames = run(&mut g, false);
        assert_eq!(visits(&frames), vec![Point::new(3, 0), Point::new(4, 0)]);
        assert_eq!(path_len(&frames), 3);
    }

    #[test]
    fn diagonal_walks_the_diagonal() {
        let mut g = Grid::new(5, 5);
        g.set_start(Point::new(0, 0));
        g.set_end(Point::new(4, 4));
        let frames = run(&mut g, true);
        assert_eq!(
            path_of(&frames),
            (0..5).map(|i| Point::new(i, i)).collect::<Vec<_>>()
        );
        assert_eq!(visit_count(&frames), 4);
    }

    #[test]
    fn diagonal_ignores_corner_walls() {
        let mut g = Grid::from_ascii(
            "S#
             #E",
        );
        assert!(is_unreachable(&run(&mut g, false)));
        let frames = run(&mut g, true);
        assert_eq!(path_of(&frames), vec![Point::new(0, 0), Point::new(1, 1)]);
    }

    #[test]
    fn scratch_holds_costs() {
        let mut g = Grid::from_ascii("S..E");
        run(&mut g, false);
        let n = g.node(Point::new(2, 0)).unwrap();
        assert_eq!(n.g, 2);
        assert_eq!(n.h, 1);
        assert_eq!(n.f, 3);
        assert_eq!(n.parent, Some(Point::new(1, 0)));
    }

    #[test]
    fn repeated_runs_do_not_leak_state() {
        let mut g = Grid::from_ascii(
            "S...
             .##.
             ...E",
        );
        let first = run(&mut g, false);
        let second = run(&mut g, false);
        assert_eq!(first, second);
    }

    #[test]
    fn missing_endpoint_is_empty() {
        let mut g = Grid::new(5, 5);
        assert!(astar(&mut g, None, Some(Point::new(1, 1)), false).is_empty());
        assert!(astar(&mut g, Some(Point::new(1, 1)), None, false).is_empty());
    }
}
