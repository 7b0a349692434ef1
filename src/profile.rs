#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct Profile {
    pub camera_rays: usize,        // all rays traced from the camera
    pub hits: usize,               // rays that found the surface
    pub misses: usize,             // rays that fell through to the background
    pub culled_rays: usize,        // misses rejected by the bounding sphere without marching
    pub march_steps: usize,        // distance field evaluations spent marching
    pub degenerate_normals: usize, // hits where the gradient vanished
}

impl Profile {
    pub fn new(
        camera_rays: usize,
        hits: usize,
        misses: usize,
        culled_rays: usize,
        march_steps: usize,
        degenerate_normals: usize,
    ) -> Self {
        Profile {
            camera_rays,
            hits,
            misses,
            culled_rays,
            march_steps,
            degenerate_normals,
        }
    }
    pub fn combine(&self, other: Self) -> Self {
        Profile::new(
            self.camera_rays + other.camera_rays,
            self.hits + other.hits,
            self.misses + other.misses,
            self.culled_rays + other.culled_rays,
            self.march_steps + other.march_steps,
            self.degenerate_normals + other.degenerate_normals,
        )
    }

    pub fn pretty_print(&self, elapsed: f32, threads: usize) {
        let &Profile {
            camera_rays,
            hits,
            misses,
            culled_rays,
            march_steps,
            degenerate_normals,
        } = self;
        let threads = threads.max(1) as f32;
        info!(
            "{} total camera rays at {} per second and {} per second per thread",
            camera_rays,
            camera_rays as f32 / elapsed,
            camera_rays as f32 / elapsed / threads
        );
        info!(
            "{} hits, {} misses of which {} were culled before marching",
            hits, misses, culled_rays
        );
        info!(
            "{} total march steps, {} per marched ray",
            march_steps,
            march_steps as f32 / (camera_rays - culled_rays).max(1) as f32
        );
        if degenerate_normals > 0 {
            warn!(
                "{} hits had a degenerate normal and were shaded with ambient light only",
                degenerate_normals
            );
        }
    }
}
