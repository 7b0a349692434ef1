mod misc;
mod vec;
pub use misc::*;
pub use std::f64::consts::PI;
pub use vec::Vec3;

#[derive(Copy, Clone, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// `direction` is expected to be unit length. Marching step sizes are in world units only if it is.
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }

    pub fn point_at_parameter(self, time: f64) -> Vec3 {
        self.origin + self.direction * time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_at_parameter() {
        let r = Ray::new(Vec3::new(0.0, 0.0, 3.0), -Vec3::Z);
        assert_eq!(r.point_at_parameter(1.5), Vec3::new(0.0, 0.0, 1.5));
    }
}
