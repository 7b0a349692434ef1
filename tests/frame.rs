use kaboom::parsing::config::{RenderSettings, Resolution};
use kaboom::prelude::*;

fn default_frame() -> (Tracer, PinholeCamera) {
    (
        Tracer::new(SceneSettings::default()),
        PinholeCamera::new(640, 480, 60.0),
    )
}

#[test]
fn test_center_hits_and_corners_miss() {
    let (tracer, camera) = default_frame();
    let background = tracer.settings().background;

    let center = camera.get_ray(320, 240);
    assert!(tracer.march(center).hit_point().is_some());
    assert_ne!(tracer.trace(&center), background);

    for (x, y) in [(0, 0), (639, 0), (0, 479), (639, 479)] {
        let r = camera.get_ray(x, y);
        assert!(tracer.march(r).hit_point().is_none(), "corner ({}, {})", x, y);
        assert_eq!(tracer.trace(&r), background);
    }
}

#[test]
fn test_full_frame() {
    let (tracer, camera) = default_frame();
    let background = tracer.settings().background;
    let (film, profile) = NaiveRenderer::new().render(&tracer, &camera);

    assert_eq!(film.total_pixels(), 640 * 480);
    assert_eq!(profile.camera_rays, 640 * 480);
    assert_ne!(film.at(320, 240), background);
    for (x, y) in [(0, 0), (639, 0), (0, 479), (639, 479)] {
        assert_eq!(film.at(x, y), background);
    }
    // the bounding sphere covers well under the whole frame
    assert!(profile.culled_rays > 0);
    assert!(profile.hits > 0);
    assert!(film.buffer.iter().all(|c| c.a == 255));
}

#[test]
fn test_ripple_variant_shares_the_pipeline() {
    let tracer = Tracer::new(SceneSettings {
        noise_amplitude: 0.2,
        displacement: Displacement::SineRipple { frequency: 16.0 },
        shading: Shading::Flat {
            color: [255, 255, 255],
        },
        ..SceneSettings::default()
    });
    let camera = PinholeCamera::new(640, 480, 60.0);
    let center = tracer.trace(&camera.get_ray(320, 240));
    // flat white scaled by a diffuse term in [0.4, 1]
    assert_eq!(center.r, center.g);
    assert_eq!(center.g, center.b);
    assert!(center.r >= 102);
    assert_eq!(
        tracer.trace(&camera.get_ray(0, 0)),
        tracer.settings().background
    );
}

#[test]
fn test_output_film_writes_png() {
    let tracer = Tracer::new(SceneSettings::default());
    let camera = PinholeCamera::new(32, 24, 60.0);
    let (film, _) = NaiveRenderer::new().render(&tracer, &camera);

    let directory = std::env::temp_dir().join(format!("kaboom-test-{}", std::process::id()));
    let settings = RenderSettings {
        filename: String::from("small"),
        resolution: Resolution {
            width: 32,
            height: 24,
        },
        vfov: 60.0,
        threads: 1,
    };
    let path = output_film(&directory, &settings, &film).unwrap();
    assert!(path.ends_with("small.png"));

    let img = image::open(&path).unwrap().into_rgba8();
    assert_eq!(img.dimensions(), (32, 24));
    let corner = film.at(0, 0);
    assert_eq!(img.get_pixel(0, 0).0, [corner.r, corner.g, corner.b, corner.a]);

    std::fs::remove_dir_all(&directory).unwrap();
}
