//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use geode_mesh::{BasePolyhedron, MeshRequest, SubdivisionAlgorithm};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// What to generate.
    pub mesh: MeshConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Sphere generation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MeshConfig {
    /// Seed polyhedron.
    pub base: BasePolyhedron,
    /// Refinement applied on every pass.
    pub algorithm: SubdivisionAlgorithm,
    /// Number of passes. Signed so a bad value in the file is reported, not wrapped.
    pub iterations: i64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Count inward-facing triangles after generation.
    pub check_winding: bool,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            base: BasePolyhedron::Icosahedron,
            algorithm: SubdivisionAlgorithm::UniformFourWay,
            iterations: 3,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            check_winding: true,
        }
    }
}

impl MeshConfig {
    /// Validate these settings into a build request.
    pub fn request(&self) -> Result<MeshRequest, ConfigError> {
        Ok(MeshRequest::new(self.base, self.algorithm, self.iterations)?)
    }
}

/// Platform config directory for Geode, e.g. `~/.config/geode` on Linux.
///
/// Falls back to the current directory when the platform has none.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("geode"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Location of the config file inside `config_dir`.
pub fn config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE)
}

fn read_file(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
    ron::from_str(&text).map_err(ConfigError::ParseError)
}

impl Config {
    /// Read `config.ron` from `config_dir`, writing the defaults there first if
    /// the file does not exist yet.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_path(config_dir);
        if !path.exists() {
            let defaults = Config::default();
            defaults.save(config_dir)?;
            log::info!("Wrote default settings to {}", path.display());
            return Ok(defaults);
        }

        let config = read_file(&path)?;
        log::info!(
            "Using {} ({} x{} on {})",
            path.display(),
            config.mesh.algorithm,
            config.mesh.iterations,
            config.mesh.base
        );
        Ok(config)
    }

    /// Write these settings to `config_dir/config.ron`, creating the directory.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let style = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let text = ron::ser::to_string_pretty(self, style).map_err(ConfigError::SerializeError)?;

        std::fs::write(config_path(config_dir), text).map_err(ConfigError::WriteError)
    }
}
