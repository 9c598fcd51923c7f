//! The grid model: a `cols × rows` matrix of nodes plus start/end markers.
//!
//! A [`Grid`] keeps two parallel arenas indexed by `y * cols + x`:
//!
//! - the **layout** ([`NodeType`]), which persists across search runs and is
//!   only changed by editing, wall generation and [`Grid::clear_walls`];
//! - the **scratch** ([`Scratch`]), holding the presentation state and the
//!   `g`/`h`/`f`/`parent` values written by whichever search ran last.
//!
//! [`Grid::reset_state`] wipes the scratch without touching the layout.

use std::fmt;

use crate::geom::{Bounds, Point};

/// Cost of a node that has not been reached by the current search.
pub const UNREACHABLE: i32 = i32::MAX;

/// Largest inset used when placing the default start/end markers.
const MARKER_INSET: i32 = 5;

// ---------------------------------------------------------------------------
// Node types
// ---------------------------------------------------------------------------

/// What occupies a cell. Persistent across search runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NodeType {
    #[default]
    Empty,
    Wall,
    Start,
    End,
}

impl NodeType {
    /// Whether the cell holds the start or end marker.
    #[inline]
    pub fn is_marker(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }
}

/// Presentation state of a cell. Never read by the search algorithms.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NodeState {
    #[default]
    Unvisited,
    Visiting,
    Visited,
    Path,
}

/// Per-run search scratch for one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Scratch {
    pub state: NodeState,
    /// Cost from the start; [`UNREACHABLE`] until reached.
    pub g: i32,
    /// Heuristic estimate to the end.
    pub h: i32,
    /// `g + h`; [`UNREACHABLE`] until reached.
    pub f: i32,
    /// Predecessor on the best known path.
    pub parent: Option<Point>,
}

impl Scratch {
    /// The state every cell returns to on [`Grid::reset_state`].
    pub const CLEARED: Self = Self {
        state: NodeState::Unvisited,
        g: UNREACHABLE,
        h: 0,
        f: UNREACHABLE,
        parent: None,
    };
}

impl Default for Scratch {
    fn default() -> Self {
        Self::CLEARED
    }
}

/// Snapshot of one cell: its layout and its scratch combined.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub pos: Point,
    pub kind: NodeType,
    pub state: NodeState,
    pub g: i32,
    pub h: i32,
    pub f: i32,
    pub parent: Option<Point>,
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular matrix of nodes with cached start/end markers.
///
/// The markers, when set, always point at cells inside the grid whose layout
/// is [`NodeType::Start`] / [`NodeType::End`] respectively.
#[derive(Clone, Debug)]
pub struct Grid {
    bounds: Bounds,
    layout: Vec<NodeType>,
    scratch: Vec<Scratch>,
    start: Option<Point>,
    end: Option<Point>,
}

impl Grid {
    /// Allocate a fresh `cols × rows` grid with default start/end markers.
    ///
    /// Sizes below 1 are clamped to 1. The start marker is placed near the
    /// top-left corner and the end marker near the bottom-right corner, both
    /// inset by up to five cells. A 1×1 grid only gets a start marker.
    pub fn new(cols: i32, rows: i32) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        let bounds = Bounds::new(cols, rows);
        let len = bounds.len();
        let mut grid = Self {
            bounds,
            layout: vec![NodeType::Empty; len],
            scratch: vec![Scratch::CLEARED; len],
            start: None,
            end: None,
        };

        let kx = MARKER_INSET.min((cols - 1) / 3);
        let ky = MARKER_INSET.min((rows - 1) / 3);
        grid.set_start(Point::new(kx, ky));
        grid.set_end(Point::new(cols - 1 - kx, rows - 1 - ky));

        log::debug!(
            "grid initialised: {cols}x{rows}, start {:?}, end {:?}",
            grid.start,
            grid.end
        );
        grid
    }

    /// Build a grid from an ASCII layout, one line per row.
    ///
    /// `#` is a wall, `S` the start and `E` the end; anything else is empty.
    /// Short lines are padded with empty cells. If a marker appears more than
    /// once the last occurrence wins.
    pub fn from_ascii(text: &str) -> Self {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let rows = lines.len() as i32;
        let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as i32;

        let mut grid = Self::blank(cols, rows);
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match ch {
                    '#' => {
                        grid.set_wall(p, true);
                    }
                    'S' => {
                        grid.set_start(p);
                    }
                    'E' => {
                        grid.set_end(p);
                    }
                    _ => {}
                }
            }
        }
        grid
    }

    /// A grid without markers.
    fn blank(cols: i32, rows: i32) -> Self {
        let bounds = Bounds::new(cols.max(1), rows.max(1));
        let len = bounds.len();
        Self {
            bounds,
            layout: vec![NodeType::Empty; len],
            scratch: vec![Scratch::CLEARED; len],
            start: None,
            end: None,
        }
    }

    // -----------------------------------------------------------------------
    // Dimensions and coordinates
    // -----------------------------------------------------------------------

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    /// The rectangle `[0, cols) × [0, rows)`.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Total number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.layout.len()
    }

    /// Always false: a grid holds at least one node.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat arena index of `p`, or `None` when out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        self.bounds.index(p)
    }

    /// Point at a flat arena index.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        self.bounds.point(idx)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Current start marker.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Current end marker.
    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Snapshot of the node at `p`.
    pub fn node(&self, p: Point) -> Option<Node> {
        let i = self.idx(p)?;
        let s = self.scratch[i];
        Some(Node {
            pos: p,
            kind: self.layout[i],
            state: s.state,
            g: s.g,
            h: s.h,
            f: s.f,
            parent: s.parent,
        })
    }

    /// Layout of the node at `p`.
    #[inline]
    pub fn node_type(&self, p: Point) -> Option<NodeType> {
        self.idx(p).map(|i| self.layout[i])
    }

    /// Whether `p` is inside the grid and holds a wall.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.node_type(p) == Some(NodeType::Wall)
    }

    /// Presentation state of the node at `p`.
    #[inline]
    pub fn state(&self, p: Point) -> Option<NodeState> {
        self.idx(p).map(|i| self.scratch[i].state)
    }

    /// Search scratch of the node at `p`.
    #[inline]
    pub fn scratch(&self, p: Point) -> Option<&Scratch> {
        self.idx(p).map(|i| &self.scratch[i])
    }

    /// Mutable search scratch of the node at `p`.
    #[inline]
    pub fn scratch_mut(&mut self, p: Point) -> Option<&mut Scratch> {
        let i = self.idx(p)?;
        Some(&mut self.scratch[i])
    }

    /// Layout arena, indexed by [`Grid::idx`].
    #[inline]
    pub fn layout(&self) -> &[NodeType] {
        &self.layout
    }

    /// Scratch arena, indexed by [`Grid::idx`].
    #[inline]
    pub fn scratch_arena(&self) -> &[Scratch] {
        &self.scratch
    }

    /// Mutable scratch arena, indexed by [`Grid::idx`].
    #[inline]
    pub fn scratch_arena_mut(&mut self) -> &mut [Scratch] {
        &mut self.scratch
    }

    /// Count nodes with the given layout.
    pub fn count(&self, kind: NodeType) -> usize {
        self.layout.iter().filter(|&&k| k == kind).count()
    }

    /// Count nodes in the given presentation state.
    pub fn count_state(&self, state: NodeState) -> usize {
        self.scratch.iter().filter(|s| s.state == state).count()
    }

    /// Row-major iterator over node snapshots.
    pub fn iter(&self) -> impl Iterator<Item = Node> + '_ {
        self.bounds.iter().filter_map(move |p| self.node(p))
    }

    // -----------------------------------------------------------------------
    // Bulk operations
    // -----------------------------------------------------------------------

    /// Clear state, costs and parents on every node. The layout is kept.
    pub fn reset_state(&mut self) {
        self.scratch.fill(Scratch::CLEARED);
    }

    /// Turn every wall back into an empty cell, then [`reset_state`].
    ///
    /// Start and end markers are untouched.
    ///
    /// [`reset_state`]: Self::reset_state
    pub fn clear_walls(&mut self) {
        for k in self.layout.iter_mut() {
            if *k == NodeType::Wall {
                *k = NodeType::Empty;
            }
        }
        self.reset_state();
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Set the presentation state of `p`. Returns whether `p` is in bounds.
    pub fn mark(&mut self, p: Point, state: NodeState) -> bool {
        match self.scratch_mut(p) {
            Some(s) => {
                s.state = state;
                true
            }
            None => false,
        }
    }

    /// Place or remove a wall at `p`.
    ///
    /// Markers are never overwritten. Returns whether the layout changed.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> bool {
        let Some(i) = self.idx(p) else {
            return false;
        };
        let next = match (self.layout[i], wall) {
            (NodeType::Empty, true) => NodeType::Wall,
            (NodeType::Wall, false) => NodeType::Empty,
            _ => return false,
        };
        self.layout[i] = next;
        true
    }

    /// Flip a wall at `p`. Returns whether the layout changed.
    pub fn toggle_wall(&mut self, p: Point) -> bool {
        match self.node_type(p) {
            Some(NodeType::Empty) => self.set_wall(p, true),
            Some(NodeType::Wall) => self.set_wall(p, false),
            _ => false,
        }
    }

    /// Move the start marker to `p`.
    ///
    /// Refused when `p` is out of bounds or holds the end marker. A wall at
    /// `p` is replaced; the previous start cell becomes empty.
    pub fn set_start(&mut self, p: Point) -> bool {
        if self.end == Some(p) {
            return false;
        }
        let moved = self.move_marker(self.start, p, NodeType::Start);
        if moved {
            self.start = Some(p);
        }
        moved
    }

    /// Move the end marker to `p`.
    ///
    /// Refused when `p` is out of bounds or holds the start marker. A wall at
    /// `p` is replaced; the previous end cell becomes empty.
    pub fn set_end(&mut self, p: Point) -> bool {
        if self.start == Some(p) {
            return false;
        }
        let moved = self.move_marker(self.end, p, NodeType::End);
        if moved {
            self.end = Some(p);
        }
        moved
    }

    fn move_marker(&mut self, old: Option<Point>, p: Point, kind: NodeType) -> bool {
        let Some(i) = self.idx(p) else {
            return false;
        };
        if old == Some(p) {
            return false;
        }
        if let Some(j) = old.and_then(|o| self.idx(o)) {
            self.layout[j] = NodeType::Empty;
        }
        self.layout[i] = kind;
        true
    }
}

impl fmt::Display for Grid {
    /// Renders the layout, overlaid with the presentation state of empty
    /// cells: `*` path, `o` visited, `+` visiting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows() {
            for x in 0..self.cols() {
                let i = y as usize * self.cols() as usize + x as usize;
                let ch = match (self.layout[i], self.scratch[i].state) {
                    (NodeType::Wall, _) => '#',
                    (NodeType::Start, _) => 'S',
                    (NodeType::End, _) => 'E',
                    (NodeType::Empty, NodeState::Path) => '*',
                    (NodeType::Empty, NodeState::Visited) => 'o',
                    (NodeType::Empty, NodeState::Visiting) => '+',
                    (NodeType::Empty, NodeState::Unvisited) => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn node_type_uses_lowercase_names() {
        let json = serde_json::to_string(&NodeType::Wall).unwrap();
        assert_eq!(json, "\"wall\"");
        let back: NodeState = serde_json::from_str("\"visited\"").unwrap();
        assert_eq!(back, NodeState::Visited);
    }
}
