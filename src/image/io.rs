//! I/O helpers for pixel buffers and JSON reports.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into a planar 3-channel float buffer.
//! - `save_rgb_f32`: write the first three planes of a buffer to an RGB PNG.
//! - `save_grayscale_f32`: write plane 0 of a buffer to a grayscale PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{PixelBuffer, PlaneView, PlaneViewMut};
use image::{GrayImage, Luma, Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to a planar float buffer in [0, 1].
pub fn load_rgb_image(path: &Path) -> Result<PixelBuffer, String> {
    let rgb = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = rgb.width() as usize;
    let height = rgb.height() as usize;
    let interleaved = rgb.into_raw();

    let mut buffer = PixelBuffer::new(width, height, 3);
    for c in 0..3 {
        for (y, row) in buffer.plane_rows_mut(c).enumerate() {
            for (x, sample) in row.iter_mut().enumerate() {
                *sample = interleaved[(y * width + x) * 3 + c] as f32 / 255.0;
            }
        }
    }
    Ok(buffer)
}

/// Save the first three planes of a buffer to an RGB PNG, clamping samples
/// into [0, 255].
pub fn save_rgb_f32(buffer: &PixelBuffer, path: &Path) -> Result<(), String> {
    if buffer.channels() < 3 {
        return Err(format!(
            "RGB save needs 3 planes, buffer has {}",
            buffer.channels()
        ));
    }
    ensure_parent_dir(path)?;
    let mut out = RgbImage::new(buffer.width() as u32, buffer.height() as u32);
    for y in 0..buffer.height() {
        let r = buffer.plane_row(0, y);
        let g = buffer.plane_row(1, y);
        let b = buffer.plane_row(2, y);
        for x in 0..buffer.width() {
            out.put_pixel(
                x as u32,
                y as u32,
                Rgb([to_u8(r[x]), to_u8(g[x]), to_u8(b[x])]),
            );
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save plane 0 of a buffer to a grayscale PNG, clamping samples into [0, 255].
pub fn save_grayscale_f32(buffer: &PixelBuffer, path: &Path) -> Result<(), String> {
    if buffer.channels() == 0 {
        return Err("grayscale save needs at least one plane".to_string());
    }
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(buffer.width() as u32, buffer.height() as u32);
    for (y, row) in buffer.plane_rows(0).enumerate() {
        for (x, &px) in row.iter().enumerate() {
            out.put_pixel(x as u32, y as u32, Luma([to_u8(px)]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (v * 255.0).clamp(0.0, 255.0) as u8
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
