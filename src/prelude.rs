pub use crate::camera::{PinholeCamera, CAMERA_ORIGIN};
pub use crate::march::{distance_field_normal, sphere_trace, MarchResult, MarchSettings};
pub use crate::math::{Ray, Vec3, PI};
pub use crate::noise::{fbm, hash, value_noise};
pub use crate::profile::Profile;
pub use crate::renderer::{output_film, Film, NaiveRenderer};
pub use crate::sdf::{DisplacedSphere, Displacement, SDF};
pub use crate::shading::{palette_fire, Color, PointLight, RGBColor, Shading};
pub use crate::tracer::{SceneSettings, Tracer};
