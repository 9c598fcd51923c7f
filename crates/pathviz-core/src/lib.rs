//! **pathviz-core**: the grid model shared by every pathviz crate.
//!
//! This crate provides the geometry primitives ([`Point`], [`Bounds`]) and the
//! [`Grid`] that owns the node matrix, the start/end markers and the
//! per-run search scratch written by the algorithms in `pathviz-paths`.

pub mod geom;
pub mod grid;

pub use geom::{Bounds, Point};
pub use grid::{Grid, Node, NodeState, NodeType, Scratch, UNREACHABLE};
