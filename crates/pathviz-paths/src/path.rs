use std::iter;

use pathviz_core::{Grid, Point};

use crate::frame::AnimationFrame;

/// Follow `parent` links back from `end` and append one path frame per node,
/// start first.
///
/// Parent chains always point at nodes finalized earlier, so the walk ends at
/// the start; it is capped at the grid size regardless.
pub(crate) fn push_path(grid: &Grid, end: Point, frames: &mut Vec<AnimationFrame>) {
    let mut route: Vec<Point> =
        iter::successors(Some(end), |&p| grid.scratch(p).and_then(|s| s.parent))
            .take(grid.len())
            .collect();
    route.reverse();
    frames.extend(route.into_iter().map(AnimationFrame::path));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_parents_in_start_to_end_order() {
        let mut g = Grid::new(4, 1);
        g.scratch_mut(Point::new(1, 0)).unwrap().parent = Some(Point::new(0, 0));
        g.scratch_mut(Point::new(2, 0)).unwrap().parent = Some(Point::new(1, 0));
        let mut frames = Vec::new();
        push_path(&g, Point::new(2, 0), &mut frames);
        assert_eq!(
            frames,
            vec![
                AnimationFrame::path(Point::new(0, 0)),
                AnimationFrame::path(Point::new(1, 0)),
                AnimationFrame::path(Point::new(2, 0)),
            ]
        );
    }

    #[test]
    fn cyclic_parents_are_bounded() {
        let mut g = Grid::new(2, 1);
        g.scratch_mut(Point::new(0, 0)).unwrap().parent = Some(Point::new(1, 0));
        g.scratch_mut(Point::new(1, 0)).unwrap().parent = Some(Point::new(0, 0));
        let mut frames = Vec::new();
        push_path(&g, Point::new(1, 0), &mut frames);
        assert_eq!(frames.len(), 2);
    }
}
