//! Graph searches over a [`Grid`](pathviz_core::Grid) that record their
//! progress as animation frames.
//!
//! Every algorithm has the same shape: it takes the grid, the start and end
//! positions and the diagonal flag, runs to completion, and returns the
//! ordered [`AnimationFrame`]s a renderer replays:
//!
//! - **A\*** ([`astar`]): Manhattan heuristic, linear-scan open set
//! - **Dijkstra** ([`dijkstra`]): A* with a zero heuristic
//! - **BFS** ([`bfs`]): FIFO queue, visited on enqueue
//! - **DFS** ([`dfs`]): LIFO stack, visited on pop
//!
//! A sequence without [`FrameKind::Path`] frames means the end is
//! unreachable. [`Algorithm`] selects one of the four by name.

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod frame;
mod neighbors;
mod path;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use astar::astar;
pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use distance::{chebyshev, manhattan};
pub use frame::{AnimationFrame, FrameKind, is_unreachable, path_len, path_of, visit_count};
pub use neighbors::Neighbors;
