#[macro_use]
extern crate tracing;

pub mod camera;
pub mod march;
pub mod math;
pub mod noise;
pub mod parsing;
pub mod prelude;
pub mod profile;
pub mod renderer;
pub mod sdf;
pub mod shading;
pub mod tracer;
