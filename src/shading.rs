use crate::math::*;

use std::ops::{Add, Mul, Sub};

use serde::Deserialize;

/// 8 bit RGBA, what ends up in the output image
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
}

impl From<[u8; 3]> for Color {
    fn from(c: [u8; 3]) -> Self {
        Color::new(c[0], c[1], c[2])
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(c: Color) -> Self {
        image::Rgba([c.r, c.g, c.b, c.a])
    }
}

/// unquantized color, channels nominally in [0, 255]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RGBColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RGBColor {
    pub const fn new(r: f64, g: f64, b: f64) -> RGBColor {
        RGBColor { r, g, b }
    }
    pub const ZERO: RGBColor = RGBColor::new(0.0, 0.0, 0.0);

    pub fn lerp(self, other: RGBColor, t: f64) -> RGBColor {
        let t = t.clamp(0.0, 1.0);
        self + (other - self) * t
    }

    /// clamps every channel into [0, 255] and truncates. alpha is always opaque.
    pub fn quantize(self) -> Color {
        fn channel(c: f64) -> u8 {
            if c.is_nan() {
                return 0;
            }
            c.clamp(0.0, 255.0) as u8
        }
        Color::new(channel(self.r), channel(self.g), channel(self.b))
    }
}

impl Add for RGBColor {
    type Output = RGBColor;
    fn add(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl Sub for RGBColor {
    type Output = RGBColor;
    fn sub(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r - other.r, self.g - other.g, self.b - other.b)
    }
}

impl Mul<f64> for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: f64) -> RGBColor {
        RGBColor::new(self.r * other, self.g * other, self.b * other)
    }
}

impl From<Color> for RGBColor {
    fn from(c: Color) -> Self {
        RGBColor::new(c.r as f64, c.g as f64, c.b as f64)
    }
}

const GRAY: RGBColor = RGBColor::new(100.0, 100.0, 100.0);
const DARK_GRAY: RGBColor = RGBColor::new(50.0, 50.0, 50.0);
const RED: RGBColor = RGBColor::new(255.0, 0.0, 0.0);
const ORANGE: RGBColor = RGBColor::new(255.0, 150.0, 0.0);
const YELLOW: RGBColor = RGBColor::new(255.0, 250.0, 0.0);

pub const FIRE_STOPS: [RGBColor; 5] = [GRAY, DARK_GRAY, RED, ORANGE, YELLOW];

/// Piecewise linear ramp through evenly spaced `stops`. `t` is clamped to [0, 1].
pub fn ramp(stops: &[RGBColor], t: f64) -> RGBColor {
    match stops.len() {
        0 => RGBColor::ZERO,
        1 => stops[0],
        n => {
            let bands = n - 1;
            let scaled = t.clamp(0.0, 1.0) * bands as f64;
            let band = (scaled.floor() as usize).min(bands - 1);
            stops[band].lerp(stops[band + 1], scaled - band as f64)
        }
    }
}

/// gray -> dark gray -> red -> orange -> yellow, one quarter each
pub fn palette_fire(d: f64) -> RGBColor {
    ramp(&FIRE_STOPS, d)
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum Shading {
    /// colors the surface by how deep it sits below the undisplaced radius
    Fire,
    Flat { color: [u8; 3] },
}

impl Default for Shading {
    fn default() -> Self {
        Shading::Fire
    }
}

impl Shading {
    /// `noise_level` is how far the surface sank below the undisplaced sphere, in units of the noise amplitude
    pub fn base_color(&self, noise_level: f64) -> RGBColor {
        match self {
            Shading::Fire => palette_fire((noise_level - 0.2) * 2.0),
            Shading::Flat { color } => RGBColor::from(Color::from(*color)),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    /// lower bound on the diffuse term, the surface is never fully dark
    pub ambient: f64,
}

impl Default for PointLight {
    fn default() -> Self {
        PointLight {
            position: Vec3::new(10.0, 10.0, 10.0),
            ambient: 0.4,
        }
    }
}

impl PointLight {
    /// Lambert term floored at `ambient`. Falls back to `ambient` when there is no usable normal
    /// or the point coincides with the light.
    pub fn intensity(&self, point: Vec3, normal: Option<Vec3>) -> f64 {
        let light_dir = (self.position - point).try_normalized();
        match (light_dir, normal) {
            (Some(light_dir), Some(normal)) => (light_dir * normal).max(self.ambient),
            _ => self.ambient,
        }
    }
}
