/// fractional part, always in [0, 1) for finite input
pub fn fract(x: f64) -> f64 {
    let f = x - x.floor();
    // tiny negative inputs round up to exactly 1.0
    if f >= 1.0 {
        0.0
    } else {
        f
    }
}

/// linear interpolation with `t` clamped to [0, 1]
pub fn lerp(v0: f64, v1: f64, t: f64) -> f64 {
    v0 + (v1 - v0) * t.clamp(0.0, 1.0)
}

/// cubic hermite fade, f*f*(3-2f)
pub fn smoothstep(f: f64) -> f64 {
    f * f * (3.0 - 2.0 * f)
}
