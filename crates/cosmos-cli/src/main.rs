//! `cosmos`: render procedural planet sprites to PNG.
//!
//! Settings come from `config.ron` and can be overridden with flags:
//!
//! ```text
//! cosmos --type jovian --variation storm --rings true --seed 12345
//! cosmos --type ice --count 16 --output-dir renders
//! cosmos --list-variations --type ocean
//! ```

mod request;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use cosmos_config::{CliArgs, Config};
use cosmos_planet::{
    BatchError, BatchRenderer, BodyDescriptor, BodyType, GenerationContext, GenerationError,
    PlanetGenerator, RasterImage, RenderJob, StageEvent, Variation,
};
use tracing::{debug, error, info, warn};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Batch(#[from] BatchError),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("{failed} of {total} renders failed")]
    Incomplete { failed: usize, total: usize },
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(Config::default_dir);
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join(&config.debug.log_dir);
    if let Err(e) = cosmos_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config))
    {
        eprintln!("Failed to initialise logging: {e}");
    }

    if args.list_types || args.list_variations {
        return match list(&args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn list(args: &CliArgs) -> Result<(), GenerationError> {
    if args.list_variations {
        let bodies = match &args.body_type {
            Some(name) => vec![request::parse_body_type(name)?],
            None => BodyType::ALL.to_vec(),
        };
        for body in bodies {
            let names: Vec<&str> = Variation::all(body).iter().map(|v| v.name()).collect();
            println!("{}: {}", body.name().to_ascii_lowercase(), names.join(", "));
        }
    } else {
        for body in BodyType::ALL {
            println!("{}", body.name().to_ascii_lowercase());
        }
    }
    Ok(())
}

fn run(args: &CliArgs, config: &Config) -> Result<(), CliError> {
    let first_seed = args.seed.unwrap_or_else(rand::random);
    let count = args.count.unwrap_or(1).max(1);

    let descriptors = (0..count)
        .map(|i| request::descriptor(&config.generation, first_seed.wrapping_add(i)))
        .collect::<Result<Vec<_>, _>>()?;

    if let [descriptor] = descriptors.as_slice() {
        let path = match &args.output {
            Some(path) => path.clone(),
            None => output_path(config, descriptor),
        };
        render_one(descriptor, &path)
    } else {
        if args.output.is_some() {
            warn!("--output is ignored when rendering more than one body");
        }
        render_batch(descriptors, config)
    }
}

fn render_one(descriptor: &BodyDescriptor, path: &Path) -> Result<(), CliError> {
    info!(
        body = %descriptor.body,
        variation = %descriptor.variation,
        seed = descriptor.seed,
        "Generating planet"
    );
    let mut ctx = GenerationContext::with_observer(|event: &StageEvent| {
        debug!(stage = %event.stage, elapsed = ?event.duration, "Stage complete");
    });
    let rendered = PlanetGenerator::new().render(descriptor, &mut ctx)?;
    write_png(&rendered.image, path)?;
    info!(
        elapsed = ?rendered.total_duration(),
        path = %path.display(),
        "Planet written"
    );
    Ok(())
}

fn render_batch(descriptors: Vec<BodyDescriptor>, config: &Config) -> Result<(), CliError> {
    let total = descriptors.len();
    let started = Instant::now();
    let renderer = BatchRenderer::with_defaults()?;
    info!(count = total, "Generating planets");

    let mut queue: Vec<RenderJob> = descriptors
        .into_iter()
        .enumerate()
        .map(|(id, descriptor)| RenderJob {
            id: id as u64,
            descriptor,
        })
        .rev()
        .collect();
    let mut finished = 0;
    let mut failed = 0;

    while finished < total {
        while let Some(job) = queue.pop() {
            if let Err(job) = renderer.submit(job) {
                queue.push(job);
                break;
            }
        }

        let Some(outcome) = renderer.recv_timeout(std::time::Duration::from_millis(100)) else {
            continue;
        };
        finished += 1;
        for event in &outcome.stages {
            debug!(job = outcome.id, stage = %event.stage, elapsed = ?event.duration, "Stage complete");
        }
        let total_duration = outcome.total_duration();
        let written = match outcome.result {
            Ok(image) => {
                let path = output_path(config, &outcome.descriptor);
                write_png(&image, &path).map(|()| path)
            }
            Err(e) => Err(e.into()),
        };
        match written {
            Ok(path) => info!(
                seed = outcome.descriptor.seed,
                elapsed = ?total_duration,
                path = %path.display(),
                "Planet written"
            ),
            Err(e) => {
                failed += 1;
                error!(seed = outcome.descriptor.seed, "{e}");
            }
        }
    }

    info!(count = total, elapsed = ?started.elapsed(), "Batch complete");
    if failed > 0 {
        return Err(CliError::Incomplete { failed, total });
    }
    Ok(())
}

fn output_path(config: &Config, descriptor: &BodyDescriptor) -> PathBuf {
    let (body, variation) = request::file_stem_parts(descriptor);
    config.output.path_for(&body, variation, descriptor.seed)
}

fn write_png(raster: &RasterImage, path: &Path) -> Result<(), CliError> {
    let write_error = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| write_error(image::ImageError::IoError(e)))?;
    }
    raster
        .as_rgba_image()
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(write_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_png_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("planet.png");
        let descriptor = BodyDescriptor::new(BodyType::Rocky, 5).with_size(64);
        let raster = PlanetGenerator::new().render_image(&descriptor).unwrap();

        write_png(&raster, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (64, 64));
        assert_eq!(decoded.as_raw(), raster.as_raw(), "PNG is lossless");
    }

    #[test]
    fn test_batch_writes_every_body() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.output.directory = dir.path().to_path_buf();
        config.generation.size = 64;
        let descriptors: Vec<BodyDescriptor> = (0..3)
            .map(|seed| request::descriptor(&config.generation, 100 + seed).unwrap())
            .collect();

        render_batch(descriptors, &config).unwrap();

        for seed in 100..103 {
            let path = dir.path().join(format!("desert_arid_{seed}.png"));
            assert!(path.exists(), "{} missing", path.display());
        }
    }
}
