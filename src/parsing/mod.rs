pub mod config;

use config::{Config, RenderSettings, TOMLConfig};

use crate::camera::PinholeCamera;
use crate::sdf::Displacement;
use crate::tracer::SceneSettings;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, ensure, Context};

pub fn get_settings<P: AsRef<Path>>(filepath: P) -> anyhow::Result<TOMLConfig> {
    let filepath = filepath.as_ref();
    info!("loading config file {}", filepath.display());
    let mut input = String::new();
    let read_count = File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("couldn't read {}", filepath.display()))?;
    info!("done: {} bytes", read_count);

    parse_settings(&input).with_context(|| format!("couldn't parse {}", filepath.display()))
}

pub fn parse_settings(input: &str) -> anyhow::Result<TOMLConfig> {
    let settings: TOMLConfig = toml::from_str(input)?;
    Ok(settings)
}

fn validate_scene(scene: &SceneSettings) -> anyhow::Result<()> {
    ensure!(
        scene.sphere_radius.is_finite() && scene.sphere_radius > 0.0,
        "sphere_radius must be positive, got {}",
        scene.sphere_radius
    );
    ensure!(
        scene.noise_amplitude.is_finite() && scene.noise_amplitude >= 0.0,
        "noise_amplitude must be non-negative, got {}",
        scene.noise_amplitude
    );
    if matches!(scene.displacement, Displacement::SineRipple { .. }) && scene.noise_amplitude > 0.0
    {
        // the ripple pushes outward too, past the bounding sphere
        debug!(
            "sine ripple with amplitude {} may be clipped by the bounding sphere of radius {}",
            scene.noise_amplitude, scene.sphere_radius
        );
    }
    ensure!(
        scene.light.position.is_finite(),
        "light_position must be finite"
    );
    ensure!(
        scene.light.ambient.is_finite() && scene.light.ambient >= 0.0,
        "ambient must be non-negative, got {}",
        scene.light.ambient
    );
    ensure!(
        scene.normal_epsilon.is_finite() && scene.normal_epsilon > 0.0,
        "normal_epsilon must be positive, got {}",
        scene.normal_epsilon
    );
    ensure!(scene.march.max_steps > 0, "max_steps must be at least 1");
    ensure!(
        scene.march.step_scale.is_finite() && scene.march.step_scale > 0.0,
        "step_scale must be positive, got {}",
        scene.march.step_scale
    );
    ensure!(
        scene.march.min_step.is_finite() && scene.march.min_step > 0.0,
        "min_step must be positive, got {}",
        scene.march.min_step
    );
    Ok(())
}

fn validate_render_settings(settings: &RenderSettings) -> anyhow::Result<()> {
    let resolution = settings.resolution;
    ensure!(
        resolution.width > 0 && resolution.height > 0,
        "{}: resolution must be nonzero, got {}x{}",
        settings.filename,
        resolution.width,
        resolution.height
    );
    ensure!(
        resolution.width <= u32::MAX as usize && resolution.height <= u32::MAX as usize,
        "{}: resolution {}x{} is too large for an image",
        settings.filename,
        resolution.width,
        resolution.height
    );
    ensure!(
        settings.vfov > 0.0 && settings.vfov < 180.0,
        "{}: vfov must be between 0 and 180 degrees, got {}",
        settings.filename,
        settings.vfov
    );
    // vanishingly small angles push the image plane so far out that camera rays no longer normalize
    let camera = PinholeCamera::new(resolution.width, resolution.height, settings.vfov);
    let center = camera.get_ray(resolution.width / 2, resolution.height / 2);
    ensure!(
        (center.direction.norm() - 1.0).abs() < 1.0e-9,
        "{}: vfov {} is too narrow for a {} pixel tall image",
        settings.filename,
        settings.vfov,
        resolution.height
    );
    ensure!(settings.threads > 0, "{}: threads must be at least 1", settings.filename);
    Ok(())
}

/// Fills in defaults and checks every value the tracer and renderer rely on.
pub fn parse_config(settings: TOMLConfig) -> anyhow::Result<Config> {
    let config = Config::from(settings);
    if config.render_settings.is_empty() {
        bail!("no render_settings given, nothing to render");
    }
    validate_scene(&config.scene).context("invalid scene settings")?;
    for render_settings in config.render_settings.iter() {
        validate_render_settings(render_settings).context("invalid render settings")?;
    }
    info!(
        "parsed config with {} render(s), displacement {:?}, shading {:?}",
        config.render_settings.len(),
        config.scene.displacement,
        config.scene.shading
    );
    Ok(config)
}
