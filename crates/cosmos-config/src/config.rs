//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration inside the config directory.
pub const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// What to render when the command line does not say.
    pub generation: GenerationConfig,
    /// Where rendered images go.
    pub output: OutputConfig,
    pub debug: DebugConfig,
}

/// Default render request.
///
/// Body type and variation are kept as names so the file stays readable;
/// they are checked when the request is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    /// Body type name, e.g. `"desert"`.
    pub body_type: String,
    /// Variation name; empty selects the body type's default.
    pub variation: String,
    /// Output side length in pixels.
    pub size: u32,
    pub light_angle: f64,
    pub light_intensity: f64,
    pub light_falloff: f64,
    pub rings: bool,
    /// 1 (sparse) to 3 (every band).
    pub ring_complexity: u8,
    pub ring_tilt: f64,
    pub atmosphere: bool,
    pub atmosphere_intensity: f64,
    pub clouds: bool,
    pub cloud_coverage: f64,
    /// Wind shear strength; 0 disables it.
    pub cloud_wind: f64,
    /// 1-based palette id; 0 derives one from the seed.
    pub palette_id: u32,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
    /// File name template. `{type}`, `{variation}` and `{seed}` are
    /// substituted.
    pub file_name: String,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// `tracing` filter directive, e.g. "debug" or "cosmos_planet=trace".
    pub log_level: String,
    /// Directory for the JSON log file written in debug builds.
    pub log_dir: PathBuf,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            body_type: "desert".to_string(),
            variation: String::new(),
            size: 512,
            light_angle: 45.0,
            light_intensity: 1.0,
            light_falloff: 0.6,
            rings: false,
            ring_complexity: 2,
            ring_tilt: 0.0,
            atmosphere: false,
            atmosphere_intensity: 0.5,
            clouds: false,
            cloud_coverage: 0.5,
            cloud_wind: 0.0,
            palette_id: 0,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            file_name: "{type}_{variation}_{seed}.png".to_string(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl OutputConfig {
    /// Full output path for one rendered body.
    pub fn path_for(&self, body_type: &str, variation: &str, seed: u32) -> PathBuf {
        let name = self
            .file_name
            .replace("{type}", body_type)
            .replace("{variation}", variation)
            .replace("{seed}", &seed.to_string());
        self.directory.join(name)
    }
}

impl Config {
    /// Default config directory: `<platform config dir>/cosmos`, or
    /// `./cosmos` when the platform has none.
    pub fn default_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cosmos")
    }

    /// Read `config.ron` from `config_dir`, writing the defaults there first
    /// if the file does not exist.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Write `config.ron` into `config_dir`, creating the directory.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(config_dir.join(CONFIG_FILE), serialized).map_err(ConfigError::WriteError)
    }

    /// Re-read the file. `Some` only when its contents differ from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("{} changed on disk", config_path.display());
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let ron_str = ron::ser::to_string_pretty(
            &Config::default(),
            ron::ser::PrettyConfig::new().depth_limit(3),
        )
        .unwrap();
        assert!(ron_str.contains("size: 512"));
        assert!(ron_str.contains("body_type: \"desert\""));
    }

    #[test]
    fn test_missing_section_uses_default() {
        let config: Config = ron::from_str("(generation: (seedless: true, size: 256))").unwrap();
        assert_eq!(config.generation.size, 256);
        assert_eq!(config.generation.light_angle, 45.0);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.generation.body_type = "jovian".to_string();
        config.generation.rings = true;
        config.output.directory = PathBuf::from("renders");

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("cosmos");
        let config = Config::load_or_create(&nested).unwrap();
        assert_eq!(config, Config::default());
        assert!(nested.join(CONFIG_FILE).exists(), "default file is written");
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();
        assert!(config.reload(dir.path()).unwrap().is_none());

        let mut modified = config.clone();
        modified.generation.cloud_coverage = 0.9;
        modified.save(dir.path()).unwrap();

        let reloaded = config.reload(dir.path()).unwrap();
        assert_eq!(reloaded.map(|c| c.generation.cloud_coverage), Some(0.9));
    }

    #[test]
    fn test_invalid_ron_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{{not valid}}").unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_output_path_template() {
        let output = OutputConfig {
            directory: PathBuf::from("out"),
            ..OutputConfig::default()
        };
        assert_eq!(
            output.path_for("ocean", "reef", 42),
            PathBuf::from("out").join("ocean_reef_42.png")
        );
    }
}
