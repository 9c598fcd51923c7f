use std::collections::VecDeque;

use pathviz_core::{Grid, NodeType, Point};

use crate::frame::AnimationFrame;
use crate::neighbors::Neighbors;
use crate::path::push_path;

/// Breadth-first search from `start` to `end`.
///
/// Nodes are marked visited when enqueued, so each one enters the queue at
/// most once. `g` records the BFS depth.
///
/// Returns an empty sequence when either endpoint is missing.
pub fn bfs(
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
    let mut queue: VecDeque<usize> = VecDeque::new();
    visited[start_idx] = true;
    grid.scratch_arena_mut()[start_idx].g = 0;
    queue.push_back(start_idx);

    let mut nb = Neighbors::new();

    while let Some(ci) = queue.pop_front() {
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
            visited[ni] = true;
            let n = &mut grid.scratch_arena_mut()[ni];
            n.parent = Some(current);
            n.g = depth;
            queue.push_back(ni);
        }
    }

    frames
}
