use std::fmt;
use std::str::FromStr;

use pathviz_core::{Grid, Point};

use crate::frame::{AnimationFrame, path_len, visit_count};
use crate::{astar, bfs, dfs, dijkstra};

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm `{0}` (expected astar, dijkstra, bfs or dfs)")]
pub struct ParseAlgorithmError(String);

/// The four interchangeable searches.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    #[default]
    Astar,
    Dijkstra,
    Bfs,
    Dfs,
}

impl Algorithm {
    pub const ALL: [Self; 4] = [Self::Astar, Self::Dijkstra, Self::Bfs, Self::Dfs];

    /// Selector name: `astar`, `dijkstra`, `bfs` or `dfs`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Astar => "astar",
            Self::Dijkstra => "dijkstra",
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Astar => "A*",
            Self::Dijkstra => "Dijkstra",
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
        }
    }

    /// The next algorithm in [`Algorithm::ALL`], wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Astar => Self::Dijkstra,
            Self::Dijkstra => Self::Bfs,
            Self::Bfs => Self::Dfs,
            Self::Dfs => Self::Astar,
        }
    }

    /// Run this search between explicit endpoints.
    pub fn search(
        self,
        grid: &mut Grid,
        start: Option<Point>,
        end: Option<Point>,
        allow_diagonal: bool,
    ) -> Vec<AnimationFrame> {
        let frames = match self {
            Self::Astar => astar(grid, start, end, allow_diagonal),
            Self::Dijkstra => dijkstra(grid, start, end, allow_diagonal),
            Self::Bfs => bfs(grid, start, end, allow_diagonal),
            Self::Dfs => dfs(grid, start, end, allow_diagonal),
        };
        log::debug!(
            "{} search: {} visits, path of {} nodes (diagonal: {allow_diagonal})",
            self.label(),
            visit_count(&frames),
            path_len(&frames),
        );
        frames
    }

    /// Run this search between the grid's own start and end markers.
    pub fn run(self, grid: &mut Grid, allow_diagonal: bool) -> Vec<AnimationFrame> {
        let (start, end) = (grid.start(), grid.end());
        self.search(grid, start, end, allow_diagonal)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "astar" | "a*" | "a-star" => Ok(Self::Astar),
            "dijkstra" => Ok(Self::Dijkstra),
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
