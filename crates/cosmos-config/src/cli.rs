//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Procedural planet sprite generator.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "cosmos", about = "Procedural planet sprite generator")]
pub struct CliArgs {
    /// Body type (desert, ocean, furnace, jovian, vital, toxic, ice, rocky, jungle).
    #[arg(long = "type")]
    pub body_type: Option<String>,

    /// Texture variation of the body type.
    #[arg(long)]
    pub variation: Option<String>,

    /// Seed; a random one is drawn when omitted.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Output side length in pixels.
    #[arg(long)]
    pub size: Option<u32>,

    /// Light angle in degrees, [0, 360).
    #[arg(long)]
    pub light_angle: Option<f64>,

    #[arg(long)]
    pub light_intensity: Option<f64>,

    #[arg(long)]
    pub light_falloff: Option<f64>,

    #[arg(long)]
    pub rings: Option<bool>,

    #[arg(long)]
    pub ring_complexity: Option<u8>,

    #[arg(long, allow_hyphen_values = true)]
    pub ring_tilt: Option<f64>,

    #[arg(long)]
    pub atmosphere: Option<bool>,

    #[arg(long)]
    pub atmosphere_intensity: Option<f64>,

    #[arg(long)]
    pub clouds: Option<bool>,

    #[arg(long)]
    pub cloud_coverage: Option<f64>,

    #[arg(long)]
    pub cloud_wind: Option<f64>,

    /// 1-based palette id; 0 derives one from the seed.
    #[arg(long)]
    pub palette: Option<u32>,

    /// Output file. Only used when rendering a single body.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Output directory for templated file names.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Render this many bodies with consecutive seeds.
    #[arg(long)]
    pub count: Option<u32>,

    /// Print the body types and exit.
    #[arg(long)]
    pub list_types: bool,

    /// Print the variations of `--type` (or of every type) and exit.
    #[arg(long)]
    pub list_variations: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        let generation = &mut self.generation;
        if let Some(ref body_type) = args.body_type {
            if !body_type.eq_ignore_ascii_case(&generation.body_type) && args.variation.is_none()
            {
                // A configured variation belongs to the configured type.
                generation.variation.clear();
            }
            generation.body_type = body_type.clone();
        }
        if let Some(ref variation) = args.variation {
            generation.variation = variation.clone();
        }
        if let Some(size) = args.size {
            generation.size = size;
        }
        if let Some(angle) = args.light_angle {
            generation.light_angle = angle;
        }
        if let Some(intensity) = args.light_intensity {
            generation.light_intensity = intensity;
        }
        if let Some(falloff) = args.light_falloff {
            generation.light_falloff = falloff;
        }
        if let Some(rings) = args.rings {
            generation.rings = rings;
        }
        if let Some(complexity) = args.ring_complexity {
            generation.ring_complexity = complexity;
        }
        if let Some(tilt) = args.ring_tilt {
            generation.ring_tilt = tilt;
        }
        if let Some(atmosphere) = args.atmosphere {
            generation.atmosphere = atmosphere;
        }
        if let Some(intensity) = args.atmosphere_intensity {
            generation.atmosphere_intensity = intensity;
        }
        if let Some(clouds) = args.clouds {
            generation.clouds = clouds;
        }
        if let Some(coverage) = args.cloud_coverage {
            generation.cloud_coverage = coverage;
        }
        if let Some(wind) = args.cloud_wind {
            generation.cloud_wind = wind;
        }
        if let Some(palette) = args.palette {
            generation.palette_id = palette;
        }
        if let Some(ref dir) = args.output_dir {
            self.output.directory = dir.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            body_type: Some("ocean".to_string()),
            rings: Some(true),
            ring_tilt: Some(-20.0),
            log_level: Some("debug".to_string()),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.generation.body_type, "ocean");
        assert!(config.generation.rings);
        assert_eq!(config.generation.ring_tilt, -20.0);
        assert_eq!(config.debug.log_level, "debug");
        // Non-overridden fields retain defaults
        assert_eq!(config.generation.size, 512);
        assert_eq!(config.generation.ring_complexity, 2);
    }

    #[test]
    fn test_cli_no_override() {
        let before = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, before);
    }

    #[test]
    fn test_changing_type_drops_configured_variation() {
        let mut config = Config::default();
        config.generation.variation = "dunes".to_string();
        config.apply_cli_overrides(&CliArgs {
            body_type: Some("ice".to_string()),
            ..CliArgs::default()
        });
        assert!(config.generation.variation.is_empty());
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::try_parse_from([
            "cosmos",
            "--type",
            "jovian",
            "--seed",
            "12345",
            "--rings",
            "true",
            "--ring-tilt",
            "-30",
            "--count",
            "4",
        ])
        .unwrap();
        assert_eq!(args.body_type.as_deref(), Some("jovian"));
        assert_eq!(args.seed, Some(12345));
        assert_eq!(args.rings, Some(true));
        assert_eq!(args.ring_tilt, Some(-30.0));
        assert_eq!(args.count, Some(4));
        assert!(!args.list_types);
    }
}
