//! Common test utilities for synthetic image generation.
//!
//! These helpers create test images programmatically, avoiding the need
//! to include binary test files in the repository.

#![allow(dead_code)]

use std::collections::VecDeque;

use watermark::{Error, LineInput, PixelFormat, RasterImage, Result, Rgb};

/// Create a solid RGB image.
pub fn create_rgb_solid(width: u32, height: u32, rgb: Rgb) -> RasterImage {
    let mut img = RasterImage::new(width, height, PixelFormat::Rgb8).unwrap();
    for y in 0..height {
        for x in 0..width {
            img.put_rgb(x, y, rgb);
        }
    }
    img
}

/// Create an RGB image with a per-pixel gradient pattern.
///
/// Red tracks x, green tracks y, blue is constant, so every coordinate has
/// a distinct, predictable color.
pub fn create_rgb_gradient(width: u32, height: u32) -> RasterImage {
    let mut img = RasterImage::new(width, height, PixelFormat::Rgb8).unwrap();
    for y in 0..height {
        for x in 0..width {
            img.put_rgb(x, y, gradient_color(x, y));
        }
    }
    img
}

/// The color `create_rgb_gradient` writes at `(x, y)`.
pub fn gradient_color(x: u32, y: u32) -> Rgb {
    Rgb::new((x % 256) as u8, (y % 256) as u8, 128)
}

/// Create a solid RGBA image with uniform alpha.
pub fn create_rgba_solid(width: u32, height: u32, rgb: Rgb, alpha: u8) -> RasterImage {
    let mut img = RasterImage::new(width, height, PixelFormat::Rgba8).unwrap();
    for px in img.data.chunks_exact_mut(4) {
        px[0] = rgb.r;
        px[1] = rgb.g;
        px[2] = rgb.b;
        px[3] = alpha;
    }
    img
}

/// Create an RGB checkerboard of two colors with 1x1 cells.
pub fn create_rgb_checkerboard(width: u32, height: u32, even: Rgb, odd: Rgb) -> RasterImage {
    let mut img = RasterImage::new(width, height, PixelFormat::Rgb8).unwrap();
    for y in 0..height {
        for x in 0..width {
            let rgb = if (x + y) % 2 == 0 { even } else { odd };
            img.put_rgb(x, y, rgb);
        }
    }
    img
}

/// Line input backed by a fixed script of answers.
pub struct ScriptedInput {
    lines: VecDeque<String>,
    pub prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            prompts: Vec::new(),
        }
    }
}

impl LineInput for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.lines.pop_front().ok_or(Error::InputClosed)
    }
}

/// Truncating integer blend, written out longhand for cross-checking.
pub fn reference_blend(weight: u32, mark: Rgb, base: Rgb) -> Rgb {
    Rgb::new(
        ((weight * mark.r as u32 + (100 - weight) * base.r as u32) / 100) as u8,
        ((weight * mark.g as u32 + (100 - weight) * base.g as u32) / 100) as u8,
        ((weight * mark.b as u32 + (100 - weight) * base.b as u32) / 100) as u8,
    )
}
