//! Render the showcase scene and present it as an image file.
//!
//! Run with: cargo run --release -- [--settings render.json] [--mesh model.obj] [--output render.png]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use prism_core::{load_obj, RenderSettings};
use prism_math::Vec3;
use prism_tracer::{render, Color, Framebuffer, Material, Primitive, Scene};

#[derive(Debug, Parser)]
#[command(author, version, about = "Render the Prism showcase scene to an image", long_about = None)]
struct Args {
    /// JSON render settings (defaults: 800x600, max depth 3)
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// OBJ mesh appended to the scene as triangles
    #[arg(long, value_name = "FILE")]
    mesh: Option<PathBuf>,

    /// Output image path
    #[arg(short, long, value_name = "FILE", default_value = "render.png")]
    output: PathBuf,
}

/// Reflective ball over a floor, lit by two small colored lights.
fn build_scene() -> Scene {
    let mut scene = Scene::new();

    scene.push(
        Primitive::sphere(Vec3::ZERO, 2.5)
            .with_material(Material::mirror())
            .with_name("mirror ball"),
    );
    scene.push(
        Primitive::sphere(Vec3::new(2.0, 5.0, 1.0), 0.1)
            .with_material(Material::new(Color::new(0.7, 0.7, 0.9)))
            .with_name("cool light")
            .as_light(),
    );
    scene.push(
        Primitive::sphere(Vec3::new(-2.0, 5.0, -3.0), 0.1)
            .with_material(Material::new(Color::new(0.9, 0.9, 0.4)))
            .with_name("warm light")
            .as_light(),
    );
    scene.push(Primitive::plane(Vec3::Y, -4.0).with_name("floor"));

    scene
}

/// Hand the framebuffer to the image encoder.
///
/// Framebuffer row 0 is the bottom of the picture, so rows are flipped for
/// top-down image formats.
fn present(framebuffer: Framebuffer, path: &Path) -> Result<()> {
    let (width, height) = (framebuffer.width(), framebuffer.height());
    let image = image::RgbImage::from_raw(width, height, framebuffer.into_bytes())
        .context("framebuffer size does not match its dimensions")?;

    image::imageops::flip_vertical(&image)
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    log::info!("Saved {}x{} image to {}", width, height, path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => RenderSettings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => RenderSettings::default(),
    };

    let mut scene = build_scene();
    if let Some(path) = &args.mesh {
        let mesh = load_obj(path)
            .with_context(|| format!("failed to load mesh from {}", path.display()))?;
        let added = scene.add_mesh(&mesh, Material::default());
        log::info!("Added {} triangles from {}", added, path.display());
    }

    let framebuffer = render(&scene, &settings);

    present(framebuffer, &args.output)
}
