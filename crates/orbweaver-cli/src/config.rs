//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files from
//! various locations (explicit path, local directory, system directory) and
//! defines the configuration schema for the layout run.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
}

/// Initial placement strategy for the nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementMode {
    /// Nodes start on a circle around the canvas center.
    #[default]
    Circle,
    /// Nodes start scattered in a rectangle around the canvas center.
    Rect,
}

/// Canvas extent in layout units.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    width: f32,
    height: f32,
}

impl CanvasConfig {
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1600.0,
            height: 922.0,
        }
    }
}

/// Tuning knobs of the layout algorithm.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    constant: f32,
    cooling: f32,
    gravity: f32,
    placement: PlacementMode,
}

impl LayoutConfig {
    /// Scaling constant of the ideal edge length formula.
    pub fn constant(&self) -> f32 {
        self.constant
    }

    /// Geometric cooling factor per iteration.
    pub fn cooling(&self) -> f32 {
        self.cooling
    }

    /// Pull strength toward the canvas center.
    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Initial placement strategy.
    pub fn placement(&self) -> PlacementMode {
        self.placement
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            constant: 0.7,
            cooling: 0.99,
            gravity: 1.0,
            placement: PlacementMode::default(),
        }
    }
}

/// Visual options of the SVG snapshot.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    node_min: f32,
    node_max: f32,
    show_labels: bool,
}

impl DisplayConfig {
    /// Node radius at degree zero.
    pub fn node_min(&self) -> f32 {
        self.node_min
    }

    /// Node radius at the maximum degree.
    pub fn node_max(&self) -> f32 {
        self.node_max
    }

    /// Whether node labels are drawn.
    pub fn show_labels(&self) -> bool {
        self.show_labels
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            node_min: 8.0,
            node_max: 8.0,
            show_labels: false,
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    canvas: CanvasConfig,
    layout: LayoutConfig,
    display: DisplayConfig,
}

impl AppConfig {
    /// Returns the canvas configuration section.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the layout configuration section.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the display configuration section.
    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (orbweaver/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns an error if an explicit path is provided but the file doesn't
/// exist, or if a found config file cannot be read or parsed.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ConfigError> {
    // 1. Try the explicitly provided path first if available
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    // 2. Try the local project directory
    let local_config = Path::new("orbweaver/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    // 3. Try the platform-specific config directory
    if let Some(proj_dirs) = ProjectDirs::from("dev", "orbweaver", "orbweaver") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    // 4. If no config is found, return default config
    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;

    Ok(config)
}
