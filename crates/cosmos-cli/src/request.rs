//! Turning configuration into render requests.

use cosmos_config::GenerationConfig;
use cosmos_planet::{
    BodyDescriptor, BodyType, CloudParams, GenerationError, LightSource, RingParams, Variation,
};

/// Parse a body type name, reporting unknown names as invalid input.
pub fn parse_body_type(name: &str) -> Result<BodyType, GenerationError> {
    name.parse::<BodyType>()
        .map_err(|_| GenerationError::InvalidParameter {
            field: "body type",
            reason: format!("'{name}' is not a known body type"),
        })
}

/// Build and validate the descriptor for `seed` from `config`.
pub fn descriptor(config: &GenerationConfig, seed: u32) -> Result<BodyDescriptor, GenerationError> {
    let body = parse_body_type(&config.body_type)?;
    let variation = if config.variation.trim().is_empty() {
        Variation::default_for(body)
    } else {
        Variation::parse(body, &config.variation)?
    };

    let mut descriptor = BodyDescriptor::new(body, seed)
        .with_size(config.size)
        .with_variation(variation)
        .with_light(LightSource::new(
            config.light_angle,
            config.light_intensity,
            config.light_falloff,
        ))
        .with_palette_id(config.palette_id);
    if config.rings {
        descriptor = descriptor.with_rings(RingParams {
            complexity: config.ring_complexity,
            tilt_deg: config.ring_tilt,
        });
    }
    if config.atmosphere {
        descriptor = descriptor.with_atmosphere(config.atmosphere_intensity);
    }
    if config.clouds {
        descriptor = descriptor.with_clouds(CloudParams {
            coverage: config.cloud_coverage,
            wind: config.cloud_wind,
        });
    }

    descriptor.validate()?;
    Ok(descriptor)
}

/// Lower-case names used in output file names and listings.
pub fn file_stem_parts(descriptor: &BodyDescriptor) -> (String, &'static str) {
    (
        descriptor.body.name().to_ascii_lowercase(),
        descriptor.variation.name(),
    )
}
