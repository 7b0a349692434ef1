use crate::math::*;

/// The camera is fixed at (0, 0, 3) looking down -z, only the film and field of view can change.
pub const CAMERA_ORIGIN: Vec3 = Vec3::new(0.0, 0.0, 3.0);

#[derive(Copy, Clone, Debug)]
pub struct PinholeCamera {
    pub origin: Vec3,
    pub width: usize,
    pub height: usize,
    // distance from the pinhole to the image plane, in pixels
    focal_length: f64,
}

impl PinholeCamera {
    /// `vertical_fov` is in degrees
    pub fn new(width: usize, height: usize, vertical_fov: f64) -> PinholeCamera {
        let theta = vertical_fov.to_radians();
        let focal_length = height as f64 / (2.0 * (theta / 2.0).tan());
        debug!(
            "pinhole camera {}x{}, vfov {} deg, focal length {} px",
            width, height, vertical_fov, focal_length
        );
        PinholeCamera {
            origin: CAMERA_ORIGIN,
            width,
            height,
            focal_length,
        }
    }

    /// Ray through the center of pixel (px, py). py grows downward, so the y axis is flipped here.
    pub fn get_ray(&self, px: usize, py: usize) -> Ray {
        let dir_x = (px as f64 + 0.5) - self.width as f64 / 2.0;
        let dir_y = -(py as f64 + 0.5) + self.height as f64 / 2.0;
        let dir_z = -self.focal_length;
        Ray::new(self.origin, Vec3::new(dir_x, dir_y, dir_z).normalized())
    }
}
