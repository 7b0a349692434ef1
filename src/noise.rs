// value noise on the integer lattice and a 4 octave fbm built on top of it.
// everything here is a pure function of its input, no seeds and no tables.

use crate::math::*;

use nalgebra::{Matrix3, Vector3};

const HASH_SCALE: f64 = 43758.5453;

// weights collapsing a lattice cell (x, y, z) into one scalar hash index
const LATTICE_WEIGHTS: Vec3 = Vec3::new(1.0, 57.0, 113.0);

// orthonormal, applied once before the first octave so that octave lattices don't line up with the world axes
const OCTAVE_ROTATION: Matrix3<f64> = Matrix3::new(
    0.00, 0.80, 0.60, //
    -0.80, 0.36, -0.48, //
    -0.60, -0.48, 0.64,
);

const OCTAVE_WEIGHTS: [f64; 4] = [0.5, 0.25, 0.125, 0.0625];
// frequency multiplier applied after each octave but the last. deliberately not powers of two.
const OCTAVE_SCALES: [f64; 3] = [2.32, 3.03, 2.61];
// sum of OCTAVE_WEIGHTS
const FBM_NORMALIZATION: f64 = 0.9375;

/// Pseudo random value in [0, 1) for any finite `n`.
pub fn hash(n: f64) -> f64 {
    fract(n.sin() * HASH_SCALE)
}

/// Trilinearly interpolated value noise. Output is in [0, 1).
pub fn value_noise(x: Vec3) -> f64 {
    let p = x.floor();
    let f = x - p;
    let f = Vec3::new(smoothstep(f.x), smoothstep(f.y), smoothstep(f.z));

    let n = p * LATTICE_WEIGHTS;

    lerp(
        lerp(
            lerp(hash(n + 0.0), hash(n + 1.0), f.x),
            lerp(hash(n + 57.0), hash(n + 58.0), f.x),
            f.y,
        ),
        lerp(
            lerp(hash(n + 113.0), hash(n + 114.0), f.x),
            lerp(hash(n + 170.0), hash(n + 171.0), f.x),
            f.y,
        ),
        f.z,
    )
}

fn rotate(v: Vec3) -> Vec3 {
    Vec3::from(OCTAVE_ROTATION * Vector3::<f64>::from(v))
}

/// Fractal brownian motion over [`value_noise`], renormalized to roughly [0, 1].
pub fn fbm(x: Vec3) -> f64 {
    let mut p = rotate(x);
    let mut f = 0.0;
    for (octave, weight) in OCTAVE_WEIGHTS.iter().enumerate() {
        f += weight * value_noise(p);
        if let Some(scale) = OCTAVE_SCALES.get(octave) {
            p = p * *scale;
        }
    }
    f / FBM_NORMALIZATION
}
