//! Image driver.
//!
//! Walks every pixel in row-major order, shades its camera ray and quantizes
//! the result into a fresh [`Framebuffer`].

use std::time::Instant;

use crate::{color_to_rgb8, Camera, Color, Framebuffer, Scene, Tracer};
use prism_core::RenderSettings;

/// Compute the linear color for a single pixel.
pub fn render_pixel(camera: &Camera, tracer: &Tracer<'_>, x: u32, y: u32) -> Color {
    let ray = camera.get_ray(x, y);
    tracer.shade(&ray, 0)
}

/// Render the entire scene.
///
/// Single-threaded; the scene is only read. Every pixel of the returned
/// framebuffer is written.
pub fn render(scene: &Scene, settings: &RenderSettings) -> Framebuffer {
    let camera = Camera::new(&settings.camera);
    let tracer = Tracer::new(scene)
        .with_max_depth(settings.max_depth)
        .with_background(settings.background);

    log::info!(
        "Rendering {}x{} = {} pixels ({} primitives, {} lights, max depth {})",
        settings.width,
        settings.height,
        settings.pixel_count(),
        scene.len(),
        scene.light_count(),
        settings.max_depth
    );

    let start = Instant::now();
    let mut image = Framebuffer::new(settings.width, settings.height);
    let progress_step = (settings.height / 10).max(1);

    for y in 0..settings.height {
        for x in 0..settings.width {
            let color = render_pixel(&camera, &tracer, x, y);
            image.set(x, y, color_to_rgb8(color));
        }

        if (y + 1) % progress_step == 0 {
            log::debug!("{}/{} rows", y + 1, settings.height);
        }
    }

    log::info!("Render took {:.3?}", start.elapsed());

    image
}
