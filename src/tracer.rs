use crate::march::{distance_field_normal, sphere_trace, MarchResult, MarchSettings};
use crate::math::*;
use crate::profile::Profile;
use crate::sdf::{DisplacedSphere, Displacement};
use crate::shading::{Color, PointLight, Shading};

/// Everything that stays fixed for a whole frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneSettings {
    pub sphere_radius: f64,
    pub noise_amplitude: f64,
    pub displacement: Displacement,
    pub shading: Shading,
    pub background: Color,
    pub light: PointLight,
    pub normal_epsilon: f64,
    pub march: MarchSettings,
}

impl Default for SceneSettings {
    fn default() -> Self {
        SceneSettings {
            sphere_radius: 1.5,
            noise_amplitude: 1.0,
            displacement: Displacement::default(),
            shading: Shading::default(),
            background: Color::new(51, 178, 204),
            light: PointLight::default(),
            normal_epsilon: 0.1,
            march: MarchSettings::default(),
        }
    }
}

/// Turns camera rays into colors. Holds no mutable state, so one instance is shared by every render thread.
#[derive(Copy, Clone, Debug)]
pub struct Tracer {
    settings: SceneSettings,
    sphere: DisplacedSphere,
}

impl Tracer {
    pub fn new(settings: SceneSettings) -> Self {
        let sphere = DisplacedSphere::new(
            settings.sphere_radius,
            settings.noise_amplitude,
            settings.displacement,
        );
        Tracer { settings, sphere }
    }

    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    pub fn sdf(&self) -> &DisplacedSphere {
        &self.sphere
    }

    pub fn march(&self, r: Ray) -> MarchResult {
        sphere_trace(&self.sphere, r, &self.settings.march)
    }

    // how far below the undisplaced radius the hit sits, in units of the amplitude
    fn noise_level(&self, point: Vec3) -> f64 {
        if self.settings.noise_amplitude > 0.0 {
            (self.settings.sphere_radius - point.norm()) / self.settings.noise_amplitude
        } else {
            0.0
        }
    }

    pub fn shade(&self, point: Vec3, normal: Option<Vec3>) -> Color {
        let intensity = self.settings.light.intensity(point, normal);
        let base = self.settings.shading.base_color(self.noise_level(point));
        (base * intensity).quantize()
    }

    pub fn trace(&self, r: &Ray) -> Color {
        self.trace_with_profile(r, &mut Profile::default())
    }

    pub fn trace_with_profile(&self, r: &Ray, profile: &mut Profile) -> Color {
        profile.camera_rays += 1;
        let result = self.march(*r);
        profile.march_steps += result.steps();
        match result {
            MarchResult::SurfaceIntersection { point, .. } => {
                profile.hits += 1;
                let normal =
                    distance_field_normal(&self.sphere, point, self.settings.normal_epsilon);
                if normal.is_none() {
                    profile.degenerate_normals += 1;
                }
                self.shade(point, normal)
            }
            MarchResult::NoIntersection { culled, .. } => {
                profile.misses += 1;
                if culled {
                    profile.culled_rays += 1;
                }
                self.settings.background
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_is_background() {
        let tracer = Tracer::new(SceneSettings::default());
        let mut profile = Profile::default();
        let color = tracer.trace_with_profile(
            &Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Z),
            &mut profile,
        );
        assert_eq!(color, Color::new(51, 178, 204));
        assert_eq!(profile.misses, 1);
        assert_eq!(profile.hits, 0);
    }

    #[test]
    fn test_hit_is_shaded() {
        let tracer = Tracer::new(SceneSettings::default());
        let mut profile = Profile::default();
        let color = tracer.trace_with_profile(
            &Ray::new(Vec3::new(0.0, 0.0, 3.0), -Vec3::Z),
            &mut profile,
        );
        assert_ne!(color, tracer.settings().background);
        assert_eq!(color.a, 255);
        assert_eq!(profile.hits, 1);
        assert!(profile.march_steps > 0);
    }

    #[test]
    fn test_flat_white_is_scaled_by_light() {
        let tracer = Tracer::new(SceneSettings {
            noise_amplitude: 0.0,
            shading: Shading::Flat {
                color: [255, 255, 255],
            },
            ..SceneSettings::default()
        });
        // surface normal points straight away from the light
        let point = Vec3::new(-1.0, -1.0, -1.0).normalized() * 1.5;
        let color = tracer.shade(point, Some(point.normalized()));
        assert_eq!(color, Color::new(102, 102, 102));
    }

    #[test]
    fn test_undisplaced_sphere_uses_bottom_of_fire_ramp() {
        let tracer = Tracer::new(SceneSettings {
            noise_amplitude: 0.0,
            ..SceneSettings::default()
        });
        let point = Vec3::new(0.0, 0.0, 1.5);
        // noise level 0 maps below the ramp, gray * ambient
        assert_eq!(tracer.shade(point, None), Color::new(40, 40, 40));
    }

    #[test]
    fn test_trace_is_deterministic() {
        let tracer = Tracer::new(SceneSettings::default());
        let r = Ray::new(
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::new(0.1, 0.2, -1.0).normalized(),
        );
        assert_eq!(tracer.trace(&r), tracer.trace(&r));
    }
}
