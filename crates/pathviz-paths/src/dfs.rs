use pathviz_core::{Grid, NodeType, Point};

use crate::frame::AnimationFrame;
use crate::neighbors::Neighbors;
use crate::path::push_path;

/// Depth-first search from `start` to `end`.
///
/// Neighbors are pushed whenever they are not yet visited, so a node may sit
/// on the stack several times; duplicates are dropped when popped. The route
/// found depends on neighbor order and is generally not the shortest.
///
/// Returns an empty sequence when either endpoint is missing.
pub fn dfs(
    grid: &mut Grid,
    start: Option<Point>,
    end: Option<Point>,
    allow_diagonal: bool,
) -> Vec<AnimationFrame> {
    let (Some(start), Some(end)) = (start, end) else {
        return Vec::new();
    };
    grid.reset_state();
    let Some(start_idx) = grid.idx(start) else {
        return Vec::new();
    };

    let bounds = grid.bounds();
    let mut frames = Vec::new();
    let mut visited = vec![false; grid.len()];
    let mut stack: Vec<usize> = vec![start_idx];
    grid.scratch_arena_mut()[start_idx].g = 0;

    let mut nb = Neighbors::new();

    while let Some(ci) = stack.pop() {
        if visited[ci] {
            continue;
        }
        visited[ci] = true;

        let current = grid.point(ci);
        if ci != start_idx {
            frames.push(AnimationFrame::visit(current));
        }
        if current == end {
            push_path(grid, current, &mut frames);
            break;
        }

        let depth = grid.scratch_arena()[ci].g + 1;
        for &np in nb.of(bounds, current, allow_diagonal) {
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            if visited[ni] || grid.layout()[ni] == NodeType::Wall {
                continue;
            }
            let n = &mut grid.scratch_arena_mut()[ni];
            n.parent = Some(current);
            n.g = depth;
            stack.push(ni);
        }
    }

    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{path_len, path_of, visit_count};

    fn run(grid: &mut Grid, diagonal: bool) -> Vec<AnimationFrame> {
        let (s, e) = (grid.start(), grid.end());
        dfs(grid, s, e, diagonal)
    }

    #[test]
    fn snake_trace_on_open_grid() {
        let mut g = Grid::from_ascii(
            "S..
             ...
             ..E",
        );
        let frames = run(&mut g, false);
        let order: Vec<Point> = frames
            .iter()
            .filter(|f| f.is_visit())
            .map(|f| f.pos)
            .collect();
        let route = vec![
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(0, 2),
            Point::new(1, 2),
            Point::new(1, 1),
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(2, 1),
            Point::new(2, 2),
        ];
        assert_eq!(order, route[1..].to_vec());
        assert_eq!(path_of(&frames), route);
        // Not the shortest route (5 nodes).
        assert_eq!(path_len(&frames), 9);
    }

    #[test]
    fn duplicates_are_skipped_on_pop() {
        let mut g = Grid::new(6, 6);
        g.set_end(Point::new(5, 5));
        let frames = run(&mut g, true);
        let mut seen = std::collections::HashSet::new();
        assert!(
            frames
                .iter()
                .filter(|f| f.is_visit())
                .all(|f| seen.insert(f.pos))
        );
    }

    #[test]
    fn route_is_connected() {
        let mut g = Grid::from_ascii(
            "S....
             .###.
             .#E#.
             .#.#.
             ...#.",
        );
        let frames = run(&mut g, false);
        let route = path_of(&frames);
        assert_eq!(route.first(), Some(&Point::new(0, 0)));
        assert_eq!(route.last(), Some(&Point::new(2, 2)));
        for w in route.windows(2) {
            let d = Point::new(w[1].x - w[0].x, w[1].y - w[0].y);
            assert_eq!(d.x.abs() + d.y.abs(), 1, "{} -> {}", w[0], w[1]);
            assert!(!g.is_wall(w[1]));
        }
        assert!(visit_count(&frames) >= route.len() - 1);
    }
}
