use crate::math::*;
use crate::sdf::SDF;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MarchSettings {
    pub max_steps: usize,
    /// fraction of the distance estimate advanced per step. the estimate overshoots on displaced surfaces.
    pub step_scale: f64,
    /// lower bound on the step, guarantees forward progress
    pub min_step: f64,
}

impl Default for MarchSettings {
    fn default() -> Self {
        MarchSettings {
            max_steps: 128,
            step_scale: 0.1,
            min_step: 0.1,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarchResult {
    SurfaceIntersection {
        // first sample found inside the surface, not refined towards the zero crossing
        point: Vec3,
        steps: usize,
    },
    NoIntersection {
        // direction of ray in world space that didn't intersect anything
        direction: Vec3,
        steps: usize,
        // true if the ray was rejected by the bounding sphere without stepping
        culled: bool,
    },
}

impl MarchResult {
    pub fn hit_point(&self) -> Option<Vec3> {
        match self {
            MarchResult::SurfaceIntersection { point, .. } => Some(*point),
            MarchResult::NoIntersection { .. } => None,
        }
    }

    pub fn steps(&self) -> usize {
        match self {
            MarchResult::SurfaceIntersection { steps, .. }
            | MarchResult::NoIntersection { steps, .. } => *steps,
        }
    }
}

/// Marches `r` through `sdf` until a sample lands inside the surface or the step budget runs out.
pub fn sphere_trace<S: SDF + ?Sized>(sdf: &S, r: Ray, settings: &MarchSettings) -> MarchResult {
    let (origin, direction) = (r.origin, r.direction);

    if let Some(radius) = sdf.bounding_radius() {
        // squared distance from the sphere center to the closest point on the ray's line
        let closest_approach = origin * origin - (origin * direction).powi(2);
        if closest_approach > radius * radius {
            return MarchResult::NoIntersection {
                direction,
                steps: 0,
                culled: true,
            };
        }
    }

    let mut pos = origin;
    for step in 0..settings.max_steps {
        let d = sdf.dist(pos);
        if d < 0.0 {
            return MarchResult::SurfaceIntersection {
                point: pos,
                steps: step + 1,
            };
        }
        pos += direction * (d * settings.step_scale).max(settings.min_step);
    }
    MarchResult::NoIntersection {
        direction,
        steps: settings.max_steps,
        culled: false,
    }
}

/// Forward difference gradient of `sdf` at `p`, normalized.
/// `eps` is coarse on purpose, on the order of the marching step.
/// Returns `None` where the gradient vanishes.
pub fn distance_field_normal<S: SDF + ?Sized>(sdf: &S, p: Vec3, eps: f64) -> Option<Vec3> {
    let d = sdf.dist(p);
    let nx = sdf.dist(p + Vec3::X * eps) - d;
    let ny = sdf.dist(p + Vec3::Y * eps) - d;
    let nz = sdf.dist(p + Vec3::Z * eps) - d;
    Vec3::new(nx, ny, nz).try_normalized()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdf::{DisplacedSphere, Displacement};

    struct Constant(f64);

    impl SDF for Constant {
        fn dist(&self, _p: Vec3) -> f64 {
            self.0
        }
    }

    fn camera_origin() -> Vec3 {
        Vec3::new(0.0, 0.0, 3.0)
    }

    #[test]
    fn test_ray_pointing_away_misses() {
        let sphere = DisplacedSphere::new(1.5, 1.0, Displacement::default());
        let result = sphere_trace(
            &sphere,
            Ray::new(camera_origin(), Vec3::Z),
            &MarchSettings::default(),
        );
        assert!(result.hit_point().is_none(), "{:?}", result);
    }

    #[test]
    fn test_ray_at_center_hits() {
        for displacement in [
            Displacement::Fbm { frequency: 3.4 },
            Displacement::SineRipple { frequency: 16.0 },
        ] {
            let (radius, amplitude) = (1.5, 1.0);
            let sphere = DisplacedSphere::new(radius, amplitude, displacement);
            let result = sphere_trace(
                &sphere,
                Ray::new(camera_origin(), -Vec3::Z),
                &MarchSettings::default(),
            );
            let point = result.hit_point().expect("ray at the center must hit");
            let norm = point.norm();
            assert!(
                norm >= radius - amplitude && norm <= radius + amplitude,
                "{:?} hit at |p| = {}",
                displacement,
                norm
            );
            assert!(sphere.dist(point) < 0.0);
        }
    }

    #[test]
    fn test_hit_is_first_sample_inside() {
        let sphere = DisplacedSphere::new(1.5, 0.0, Displacement::default());
        let settings = MarchSettings::default();
        let result = sphere_trace(&sphere, Ray::new(camera_origin(), -Vec3::Z), &settings);
        let point = result.hit_point().unwrap();
        // no refinement, the sample sits at most one min_step past the surface
        assert!(point.z < 1.5 && point.z > 1.5 - settings.min_step);
        assert_eq!(point.x, 0.0);
        assert_eq!(point.y, 0.0);
    }

    #[test]
    fn test_culled_ray_takes_no_steps() {
        let sphere = DisplacedSphere::new(1.5, 1.0, Displacement::default());
        // passes 2 units from the center
        let r = Ray::new(Vec3::new(2.0, 0.0, 3.0), -Vec3::Z);
        let result = sphere_trace(&sphere, r, &MarchSettings::default());
        assert_eq!(
            result,
            MarchResult::NoIntersection {
                direction: -Vec3::Z,
                steps: 0,
                culled: true
            }
        );
    }

    #[test]
    fn test_budget_exhaustion_is_a_miss() {
        let settings = MarchSettings::default();
        let result = sphere_trace(&Constant(1.0), Ray::new(Vec3::ZERO, Vec3::X), &settings);
        assert_eq!(
            result,
            MarchResult::NoIntersection {
                direction: Vec3::X,
                steps: 128,
                culled: false
            }
        );
    }

    #[test]
    fn test_min_step_floor() {
        // with a tiny positive distance everywhere the marcher still advances by min_step
        let settings = MarchSettings {
            max_steps: 10,
            ..MarchSettings::default()
        };
        let result = sphere_trace(&Constant(1.0e-9), Ray::new(Vec3::ZERO, Vec3::X), &settings);
        assert_eq!(result.steps(), 10);
        assert!(result.hit_point().is_none());
    }

    #[test]
    fn test_normal_of_undisplaced_sphere_is_radial() {
        let sphere = DisplacedSphere::new(1.5, 0.0, Displacement::default());
        for dir in [
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(-0.3, 0.8, 0.5),
            Vec3::new(0.2, -0.9, 0.1),
        ] {
            let p = dir.normalized() * 1.5;
            let n = distance_field_normal(&sphere, p, 0.1).unwrap();
            let cos_angle = n * p.normalized();
            // forward differences with eps = 0.1 bend the normal by a few degrees at most
            assert!(cos_angle > 0.99, "{:?} vs {:?}", n, p);
        }
    }

    #[test]
    fn test_degenerate_normal() {
        assert!(distance_field_normal(&Constant(0.5), Vec3::ZERO, 0.1).is_none());
    }
}
