//! Error types for pathviz.

use std::io;
use std::path::PathBuf;

use pathviz_paths::ParseAlgorithmError;
use thiserror::Error;

/// Failure to obtain a usable [`VisualizerConfig`](crate::VisualizerConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level pathviz error.
#[derive(Error, Debug)]
pub enum PathvizError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Algorithm(#[from] ParseAlgorithmError),

    #[error("invalid grid size `{0}` (expected COLSxROWS)")]
    GridSize(String),

    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, PathvizError>;
