//! Configuration loading for pathviz

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use pathviz_anim::{MAX_SPEED, MIN_SPEED};
use pathviz_paths::Algorithm;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, PathvizError};

/// User settings for a visualizer session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisualizerConfig {
    /// Search to run (default: astar)
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Pixels per cell, used to derive the grid size from a surface (default: 20)
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,

    /// Playback rate in frames per second (default: 60)
    #[serde(default = "default_animation_speed")]
    pub animation_speed: f64,

    /// Allow the four diagonal moves (default: false)
    #[serde(default)]
    pub allow_diagonal: bool,

    /// Probability of a wall per cell for random walls (default: 0.3)
    #[serde(default = "default_wall_density")]
    pub wall_density: f64,

    /// Fixed seed for wall and maze generation; random when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            cell_size: default_cell_size(),
            animation_speed: default_animation_speed(),
            allow_diagonal: false,
            wall_density: default_wall_density(),
            seed: None,
        }
    }
}

impl VisualizerConfig {
    /// Load and validate a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::debug!("loaded config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.wall_density) {
            return Err(ConfigError::Invalid(format!(
                "wall_density must be within [0, 1], got {}",
                self.wall_density
            )));
        }
        if !self.animation_speed.is_finite() || self.animation_speed <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "animation_speed must be a positive number, got {}",
                self.animation_speed
            )));
        }
        if self.cell_size == 0 {
            return Err(ConfigError::Invalid("cell_size must be at least 1".into()));
        }
        if !(MIN_SPEED..=MAX_SPEED).contains(&self.animation_speed) {
            log::warn!(
                "animation_speed {} will be clamped to [{MIN_SPEED}, {MAX_SPEED}]",
                self.animation_speed
            );
        }
        Ok(())
    }

    /// Grid dimensions for a `width × height` pixel surface.
    ///
    /// Partial cells are dropped; each axis has at least one cell.
    pub fn grid_dims(&self, width: u32, height: u32) -> (i32, i32) {
        let cell = self.cell_size.max(1);
        let cols = i32::try_from(width / cell).unwrap_or(i32::MAX).max(1);
        let rows = i32::try_from(height / cell).unwrap_or(i32::MAX).max(1);
        (cols, rows)
    }
}

fn default_cell_size() -> u32 {
    20
}
fn default_animation_speed() -> f64 {
    60.0
}
fn default_wall_density() -> f64 {
    0.3
}

// ---------------------------------------------------------------------------
// GridSize
// ---------------------------------------------------------------------------

/// Explicit grid dimensions, written `COLSxROWS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    pub cols: i32,
    pub rows: i32,
}

impl FromStr for GridSize {
    type Err = PathvizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PathvizError::GridSize(s.to_string());
        let (c, r) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        let cols: i32 = c.trim().parse().map_err(|_| invalid())?;
        let rows: i32 = r.trim().parse().map_err(|_| invalid())?;
        if cols < 1 || rows < 1 {
            return Err(invalid());
        }
        Ok(Self { cols, rows })
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let c: VisualizerConfig = toml::from_str("").unwrap();
        assert_eq!(c, VisualizerConfig::default());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_toml_overrides_fields() {
        let c: VisualizerConfig = toml::from_str(
            r#"
            algorithm = "bfs"
            allow_diagonal = true
            wall_density = 0.1
            seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(c.algorithm, Algorithm::Bfs);
        assert!(c.allow_diagonal);
        assert_eq!(c.wall_density, 0.1);
        assert_eq!(c.seed, Some(7));
        assert_eq!(c.cell_size, 20);
        assert_eq!(c.animation_speed, 60.0);
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        assert!(toml::from_str::<VisualizerConfig>(r#"algorithm = "greedy""#).is_err());
    }

    #[test]
    fn validate_ranges() {
        let mut c = VisualizerConfig {
            wall_density: 1.5,
            ..Default::default()
        };
        assert!(matches!(c.validate(), Err(ConfigError::Invalid(_))));
        c.wall_density = 0.5;
        c.animation_speed = 0.0;
        assert!(c.validate().is_err());
        c.animation_speed = f64::INFINITY;
        assert!(c.validate().is_err());
        c.animation_speed = 30.0;
        c.cell_size = 0;
        assert!(c.validate().is_err());
        c.cell_size = 10;
        assert!(c.validate().is_ok());
    }

    #[test]
    fn grid_dims_floor_the_surface() {
        let c = VisualizerConfig::default();
        assert_eq!(c.grid_dims(800, 600), (40, 30));
        assert_eq!(c.grid_dims(819, 619), (40, 30));
        assert_eq!(c.grid_dims(5, 5), (1, 1));
    }

    #[test]
    fn load_reports_path_on_errors() {
        let missing = Path::new("/definitely/not/here/pathviz.toml");
        let err = VisualizerConfig::load(missing).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("pathviz.toml"));

        let dir = std::env::temp_dir().join(format!("pathviz-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let bad = dir.join("bad.toml");
        std::fs::write(&bad, "cell_size = \"big\"").unwrap();
        assert!(matches!(
            VisualizerConfig::load(&bad),
            Err(ConfigError::Parse { .. })
        ));

        let good = dir.join("good.toml");
        std::fs::write(&good, "animation_speed = 120.0\nalgorithm = \"dfs\"").unwrap();
        let c = VisualizerConfig::load(&good).unwrap();
        assert_eq!(c.algorithm, Algorithm::Dfs);
        assert_eq!(c.animation_speed, 120.0);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn grid_size_parsing() {
        assert_eq!(
            "40x20".parse::<GridSize>().unwrap(),
            GridSize { cols: 40, rows: 20 }
        );
        assert_eq!("7 X 3".parse::<GridSize>().unwrap().to_string(), "7x3");
        for bad in ["40", "x20", "0x5", "ax5", "-3x4"] {
            assert!(bad.parse::<GridSize>().is_err(), "{bad}");
        }
    }

    #[test]
    fn config_json_shape() {
        let json = serde_json::to_value(VisualizerConfig::default()).unwrap();
        assert_eq!(json["algorithm"], "astar");
        assert_eq!(json["cell_size"], 20);
    }
}
