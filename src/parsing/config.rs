use crate::march::MarchSettings;
use crate::sdf::Displacement;
use crate::shading::{Color, PointLight, Shading};
use crate::tracer::SceneSettings;

use serde::Deserialize;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution {
            width: 640,
            height: 480,
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct TOMLSceneSettings {
    pub sphere_radius: Option<f64>,
    pub noise_amplitude: Option<f64>,
    pub displacement: Option<Displacement>,
    pub shading: Option<Shading>,
    pub background: Option<[u8; 3]>,
    pub light_position: Option<[f64; 3]>,
    pub ambient: Option<f64>,
    pub normal_epsilon: Option<f64>,
    pub max_steps: Option<usize>,
    pub step_scale: Option<f64>,
    pub min_step: Option<f64>,
}

impl From<TOMLSceneSettings> for SceneSettings {
    fn from(data: TOMLSceneSettings) -> Self {
        let default = SceneSettings::default();
        let default_march = MarchSettings::default();
        SceneSettings {
            sphere_radius: data.sphere_radius.unwrap_or(default.sphere_radius),
            noise_amplitude: data.noise_amplitude.unwrap_or(default.noise_amplitude),
            displacement: data.displacement.unwrap_or(default.displacement),
            shading: data.shading.unwrap_or(default.shading),
            background: data.background.map(Color::from).unwrap_or(default.background),
            light: PointLight {
                position: data
                    .light_position
                    .map(Into::into)
                    .unwrap_or(default.light.position),
                ambient: data.ambient.unwrap_or(default.light.ambient),
            },
            normal_epsilon: data.normal_epsilon.unwrap_or(default.normal_epsilon),
            march: MarchSettings {
                max_steps: data.max_steps.unwrap_or(default_march.max_steps),
                step_scale: data.step_scale.unwrap_or(default_march.step_scale),
                min_step: data.min_step.unwrap_or(default_march.min_step),
            },
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLRenderSettings {
    pub filename: Option<String>,
    pub resolution: Option<Resolution>,
    // degrees
    pub vfov: Option<f64>,
    pub threads: Option<u16>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub filename: String,
    pub resolution: Resolution,
    pub vfov: f64,
    pub threads: u16,
}

impl From<TOMLRenderSettings> for RenderSettings {
    fn from(data: TOMLRenderSettings) -> Self {
        RenderSettings {
            filename: data.filename.unwrap_or_else(|| String::from("beauty")),
            resolution: data.resolution.unwrap_or_default(),
            vfov: data.vfov.unwrap_or(60.0),
            threads: data.threads.unwrap_or(num_cpus::get() as u16),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLConfig {
    pub output_directory: Option<String>,
    #[serde(default)]
    pub scene: TOMLSceneSettings,
    pub render_settings: Vec<TOMLRenderSettings>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub output_directory: String,
    pub scene: SceneSettings,
    pub render_settings: Vec<RenderSettings>,
}

impl From<TOMLConfig> for Config {
    fn from(data: TOMLConfig) -> Self {
        Config {
            output_directory: data
                .output_directory
                .unwrap_or_else(|| String::from("output")),
            scene: SceneSettings::from(data.scene),
            render_settings: data
                .render_settings
                .into_iter()
                .map(RenderSettings::from)
                .collect(),
        }
    }
}
