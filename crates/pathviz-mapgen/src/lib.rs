//! Wall generation for pathviz grids.
//!
//! Provides two generators:
//! - **Random walls**: every free cell independently becomes a wall with a
//!   given probability.
//! - **Recursive division maze**: the grid is filled with walls, then the
//!   inner rectangle is split recursively by walls with a single-cell gap,
//!   leaving a connected set of corridors.
//!
//! Start and end markers are never overwritten.

use pathviz_core::{Grid, NodeType, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Inclusive rectangle still to be divided.
#[derive(Debug, Clone, Copy)]
struct Chamber {
    x1: i32,
    x2: i32,
    y1: i32,
    y2: i32,
}

impl Chamber {
    fn points(self) -> impl Iterator<Item = Point> {
        (self.y1..=self.y2).flat_map(move |y| (self.x1..=self.x2).map(move |x| Point::new(x, y)))
    }
}

/// Map generator owning its random source.
pub struct MapGen<R: Rng> {
    pub rng: R,
}

impl MapGen<StdRng> {
    /// A generator with a fixed seed, for reproducible layouts.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> MapGen<R> {
    /// Create a new generator around `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Scatter walls at random.
    ///
    /// Existing walls are cleared first, then every cell that is not a marker
    /// becomes a wall with probability `density` (clamped to `[0, 1]`, NaN
    /// counts as 0). Returns the number of walls placed.
    pub fn random_walls(&mut self, grid: &mut Grid, density: f64) -> usize {
        let density = if density.is_nan() {
            0.0
        } else {
            density.clamp(0.0, 1.0)
        };
        grid.clear_walls();

        let mut placed = 0;
        for p in grid.bounds() {
            if grid.node_type(p) != Some(NodeType::Empty) {
                continue;
            }
            let r: f64 = self.rng.random();
            if r < density && grid.set_wall(p, true) {
                placed += 1;
            }
        }
        log::debug!("random walls: {placed} placed at density {density:.2}");
        placed
    }

    /// Generate a maze by recursive division.
    ///
    /// 1. Clear the grid and fill every non-marker cell with a wall.
    /// 2. Starting from the rectangle inside the outer border, split the
    ///    chamber with a wall line across its shorter axis (a horizontal line
    ///    when it is strictly narrower than tall), leaving one random gap.
    /// 3. Recurse into both halves. Chambers less than three cells across on
    ///    either axis are carved open.
    ///
    /// Lines are never placed where their ends would seal a gap of an
    /// enclosing wall, so every open cell stays reachable. Returns the number
    /// of walls in the final layout.
    pub fn maze(&mut self, grid: &mut Grid) -> usize {
        grid.clear_walls();
        for p in grid.bounds() {
            grid.set_wall(p, true);
        }

        let mut gaps = vec![false; grid.len()];
        let mut stack = vec![Chamber {
            x1: 1,
            x2: grid.cols() - 2,
            y1: 1,
            y2: grid.rows() - 2,
        }];

        while let Some(c) = stack.pop() {
            if c.x2 - c.x1 < 2 || c.y2 - c.y1 < 2 {
                carve(grid, c);
                continue;
            }

            let horizontal = (c.x2 - c.x1) < (c.y2 - c.y1);
            let halves = if horizontal {
                self.divide_horizontally(grid, &mut gaps, c)
            } else {
                self.divide_vertically(grid, &mut gaps, c)
            };
            match halves {
                Some((first, second)) => {
                    stack.push(second);
                    stack.push(first);
                }
                None => carve(grid, c),
            }
        }

        let walls = grid.count(NodeType::Wall);
        log::debug!(
            "maze generated on {}x{}: {walls} walls",
            grid.cols(),
            grid.rows()
        );
        walls
    }

    fn divide_horizontally(
        &mut self,
        grid: &mut Grid,
        gaps: &mut [bool],
        c: Chamber,
    ) -> Option<(Chamber, Chamber)> {
        let rows: Vec<i32> = (c.y1 + 1..c.y2)
            .filter(|&y| {
                !is_gap(grid, gaps, Point::new(c.x1 - 1, y))
                    && !is_gap(grid, gaps, Point::new(c.x2 + 1, y))
            })
            .collect();
        if rows.is_empty() {
            return None;
        }
        let y = rows[self.rng.random_range(0..rows.len())];
        let hole = self.rng.random_range(c.x1..=c.x2);
        for x in c.x1..=c.x2 {
            draw_line_cell(grid, gaps, Point::new(x, y), x == hole);
        }
        Some((Chamber { y2: y - 1, ..c }, Chamber { y1: y + 1, ..c }))
    }

    fn divide_vertically(
        &mut self,
        grid: &mut Grid,
        gaps: &mut [bool],
        c: Chamber,
    ) -> Option<(Chamber, Chamber)> {
        let cols: Vec<i32> = (c.x1 + 1..c.x2)
            .filter(|&x| {
                !is_gap(grid, gaps, Point::new(x, c.y1 - 1))
                    && !is_gap(grid, gaps, Point::new(x, c.y2 + 1))
            })
            .collect();
        if cols.is_empty() {
            return None;
        }
        let x = cols[self.rng.random_range(0..cols.len())];
        let hole = self.rng.random_range(c.y1..=c.y2);
        for y in c.y1..=c.y2 {
            draw_line_cell(grid, gaps, Point::new(x, y), y == hole);
        }
        Some((Chamber { x2: x - 1, ..c }, Chamber { x1: x + 1, ..c }))
    }
}

/// Open every cell of a chamber.
fn carve(grid: &mut Grid, c: Chamber) {
    for p in c.points() {
        grid.set_wall(p, false);
    }
}

/// One cell of a dividing line. Markers sitting on the line count as gaps.
fn draw_line_cell(grid: &mut Grid, gaps: &mut [bool], p: Point, hole: bool) {
    let Some(i) = grid.idx(p) else {
        return;
    };
    let marker = grid.node_type(p).is_some_and(NodeType::is_marker);
    if hole || marker {
        grid.set_wall(p, false);
        gaps[i] = true;
    } else {
        grid.set_wall(p, true);
    }
}

fn is_gap(grid: &Grid, gaps: &[bool], p: Point) -> bool {
    grid.idx(p).is_some_and(|i| gaps[i])
}
