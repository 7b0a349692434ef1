use super::Film;

use crate::camera::PinholeCamera;
use crate::profile::Profile;
use crate::shading::Color;
use crate::tracer::Tracer;

#[cfg(feature = "pbr")]
use std::sync::atomic::{AtomicUsize, Ordering};
#[cfg(feature = "pbr")]
use std::sync::Arc;
#[cfg(feature = "pbr")]
use std::thread;
#[cfg(feature = "pbr")]
use std::time::Duration;
use std::time::Instant;

#[cfg(feature = "pbr")]
use pbr::ProgressBar;
use rayon::prelude::*;

/// One camera ray per pixel, pixels split across the rayon pool.
#[derive(Default)]
pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }

    pub fn render(&self, tracer: &Tracer, camera: &PinholeCamera) -> (Film<Color>, Profile) {
        let (width, height) = (camera.width, camera.height);
        info!("starting render with film resolution {}x{}", width, height);

        let now = Instant::now();
        let mut film: Film<Color> = Film::new(width, height, tracer.settings().background);

        #[cfg(feature = "pbr")]
        let (pixel_count, progress_thread) = {
            let total_pixels = film.total_pixels();
            let pixel_count = Arc::new(AtomicUsize::new(0));
            let clone = pixel_count.clone();
            let thread = thread::spawn(move || {
                let mut pb = ProgressBar::new(total_pixels as u64);
                let mut local_index = 0;
                while local_index < total_pixels {
                    let pixels_to_increment = clone.load(Ordering::Relaxed) - local_index;
                    pb.add(pixels_to_increment as u64);
                    local_index += pixels_to_increment;

                    thread::sleep(Duration::from_millis(250));
                }
                pb.finish();
            });
            (pixel_count, thread)
        };

        let stats: Profile = film
            .buffer
            .par_iter_mut()
            .enumerate()
            .map(|(pixel_index, pixel_ref)| {
                let mut profile = Profile::default();
                let y: usize = pixel_index / width;
                let x: usize = pixel_index - width * y;

                let r = camera.get_ray(x, y);
                *pixel_ref = tracer.trace_with_profile(&r, &mut profile);

                #[cfg(feature = "pbr")]
                pixel_count.fetch_add(1, Ordering::Relaxed);

                profile
            })
            .reduce(Profile::default, |a, b| a.combine(b));

        #[cfg(feature = "pbr")]
        if let Err(panic) = progress_thread.join() {
            warn!("progress bar thread panicked: {:?}", panic);
        }

        let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;
        info!("took {}s", elapsed);
        stats.pretty_print(elapsed, rayon::current_num_threads());
        (film, stats)
    }
}
