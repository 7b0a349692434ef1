use crate::math::*;
use crate::noise::fbm;

use serde::Deserialize;

/// A signed distance field. negative inside, positive outside.
/// Implementors are not required to be exact, only to bound the distance loosely.
pub trait SDF: Send + Sync {
    fn dist(&self, p: Vec3) -> f64;

    /// radius of an origin centered sphere that rays must pass through to hit anything.
    /// `None` disables the early discard.
    fn bounding_radius(&self) -> Option<f64> {
        None
    }
}

/// How the sphere surface is pushed in or out at a given point.
#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum Displacement {
    /// `-amplitude * fbm(p * frequency)`, always pushes inward
    Fbm { frequency: f64 },
    /// `amplitude * sin(f x) sin(f y) sin(f z)`
    SineRipple { frequency: f64 },
}

impl Default for Displacement {
    fn default() -> Self {
        Displacement::Fbm { frequency: 3.4 }
    }
}

impl Displacement {
    pub fn eval(&self, p: Vec3, amplitude: f64) -> f64 {
        match *self {
            Displacement::Fbm { frequency } => -fbm(p * frequency) * amplitude,
            Displacement::SineRipple { frequency } => {
                (frequency * p.x).sin()
                    * (frequency * p.y).sin()
                    * (frequency * p.z).sin()
                    * amplitude
            }
        }
    }
}

/// Sphere of fixed radius centered at the origin, displaced by noise.
#[derive(Copy, Clone, Debug)]
pub struct DisplacedSphere {
    pub radius: f64,
    pub amplitude: f64,
    pub displacement: Displacement,
}

impl DisplacedSphere {
    pub fn new(radius: f64, amplitude: f64, displacement: Displacement) -> Self {
        DisplacedSphere {
            radius,
            amplitude,
            displacement,
        }
    }
}

impl SDF for DisplacedSphere {
    fn dist(&self, p: Vec3) -> f64 {
        let displacement = self.displacement.eval(p, self.amplitude);
        p.norm() - (self.radius + displacement)
    }

    // ignores the displacement, which is only sound while amplitude is small compared to radius
    fn bounding_radius(&self) -> Option<f64> {
        Some(self.radius)
    }
}
