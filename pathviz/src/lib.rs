//! **pathviz**: step-by-step pathfinding visualization.
//!
//! This crate ties the workspace together:
//!
//! - [`VisualizerConfig`]: user settings, loaded from TOML
//! - [`Visualizer`]: the controller owning the grid, the map generator and
//!   the frame player
//!
//! The lower layers are re-exported so a host only needs this crate.

pub mod config;
pub mod error;
pub mod visualizer;

pub use config::{GridSize, VisualizerConfig};
pub use error::{ConfigError, PathvizError, Result};
pub use visualizer::Visualizer;

pub use pathviz_anim::{FrameSink, PlayState, PlaybackStats, Player, Tick, callbacks};
pub use pathviz_core::{Grid, NodeState, NodeType, Point};
pub use pathviz_mapgen::MapGen;
pub use pathviz_paths::{Algorithm, AnimationFrame, FrameKind};
