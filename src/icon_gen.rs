//! Loading, resampling and PNG encoding for the fixed icon sizes.

use crate::icon_set::IconSet;
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    imageops::{self, FilterType},
    ColorType, DynamicImage, ImageEncoder, Rgba32FImage,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Render every size in `set` from its source icon and write the results next to it.
///
/// The source is decoded before any output is opened, so a missing or broken source
/// leaves the directory untouched. Existing outputs are overwritten.
pub fn generate_icons(set: &IconSet) -> Result<Vec<PathBuf>> {
    let source_path = set.source_path();
    println!("Loading {}...", source_path.display());
    let source = load_image(&source_path)?;

    let mut written = Vec::with_capacity(set.sizes.len());
    for (size, output_path) in set.outputs() {
        let resized = resize_icon(&source, size);
        save_png(&resized, &output_path)?;
        println!("  ✓ Generated {} ({size}x{size})", output_path.display());
        written.push(output_path);
    }

    Ok(written)
}

/// Decode an image and normalize it to 8-bit RGBA.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let source = image::open(path)
        .with_context(|| format!("Failed to load image {}", path.display()))?;

    Ok(DynamicImage::ImageRgba8(source.to_rgba8()))
}

/// Resample to an exact `size`x`size` square. Non-square sources are stretched.
///
/// Filtering happens on premultiplied alpha, so the color stored under fully
/// transparent pixels never bleeds into the visible edges.
pub fn resize_icon(source: &DynamicImage, size: u32) -> DynamicImage {
    let mut premultiplied = source.to_rgba32f();
    premultiply_alpha(&mut premultiplied);

    let mut resized = imageops::resize(&premultiplied, size, size, FilterType::Lanczos3);
    unpremultiply_alpha(&mut resized);

    DynamicImage::ImageRgba8(DynamicImage::ImageRgba32F(resized).to_rgba8())
}

fn premultiply_alpha(image: &mut Rgba32FImage) {
    for pixel in image.pixels_mut() {
        let alpha = pixel[3];
        for channel in &mut pixel.0[..3] {
            *channel *= alpha;
        }
    }
}

fn unpremultiply_alpha(image: &mut Rgba32FImage) {
    for pixel in image.pixels_mut() {
        let alpha = pixel[3];
        if alpha <= 0.0 {
            pixel.0 = [0.0; 4];
            continue;
        }
        for channel in &mut pixel.0[..3] {
            *channel = (*channel / alpha).min(1.0);
        }
    }
}

pub fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    let rgba_image = image.to_rgba8();

    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    write_png(
        rgba_image.as_raw(),
        &mut out_file,
        rgba_image.width(),
        rgba_image.height(),
    )
    .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    out_file.flush()?;

    Ok(())
}

// Encode RGBA8 data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, width: u32, height: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, width, height, ColorType::Rgba8)?;
    Ok(())
}
