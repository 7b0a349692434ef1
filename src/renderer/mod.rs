mod film;
mod naive;

pub use film::Film;
pub use naive::NaiveRenderer;

use crate::parsing::config::RenderSettings;
use crate::shading::Color;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;

/// Encodes the film as an RGBA8 png at `<output_directory>/<filename>.png` and returns that path.
pub fn output_film(
    output_directory: &Path,
    render_settings: &RenderSettings,
    film: &Film<Color>,
) -> anyhow::Result<PathBuf> {
    let now = Instant::now();
    fs::create_dir_all(output_directory).with_context(|| {
        format!(
            "failed to create output directory {}",
            output_directory.display()
        )
    })?;
    let png_filename = output_directory.join(format!("{}.png", render_settings.filename));

    let img = image::RgbaImage::from_fn(film.width as u32, film.height as u32, |x, y| {
        film.at(x as usize, y as usize).into()
    });

    info!("saving image to {}", png_filename.display());
    img.save(&png_filename)
        .with_context(|| format!("failed to write {}", png_filename.display()))?;
    info!(
        "took {}s to encode and write",
        (now.elapsed().as_millis() as f32) / 1000.0
    );
    Ok(png_filename)
}
