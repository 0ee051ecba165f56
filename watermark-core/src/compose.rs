//! Watermark compositing.
//!
//! A pure per-pixel mapping: the output color at `(x, y)` depends only on
//! the base pixel, the configuration, and `(x, y)` itself, never on other
//! output pixels. Rows are therefore independent and the loop could be
//! partitioned by scanline without any ordering concern; the reference
//! path below is single-threaded.

use crate::config::WatermarkConfig;
use crate::types::{PixelFormat, RasterImage, Result, Rgb};
use enough::Stop;

/// Composite the configured watermark onto `base`.
///
/// Produces a new `Rgb8` image with `base`'s dimensions; neither input is
/// mutated. Cannot fail for a valid configuration other than through
/// cooperative cancellation, checked once per row.
pub fn compose(base: &RasterImage, config: &WatermarkConfig, stop: impl Stop) -> Result<RasterImage> {
    let mut output = RasterImage::new(base.width, base.height, PixelFormat::Rgb8)?;
    let weight = config.weight() as u32;

    for y in 0..base.height {
        stop.check()?;

        for x in 0..base.width {
            let under = base.pixel(x, y);
            let color = match config.candidate_at(x, y) {
                Some(over) if !config.excludes(over) => blend(over.rgb, under.rgb, weight),
                _ => under.rgb,
            };
            output.put_rgb(x, y, color);
        }
    }

    Ok(output)
}

/// Blend one channel pair with integer-weighted, truncating arithmetic.
///
/// The truncating division by 100 is a visible rounding policy, not an
/// approximation: outputs must match it bit-for-bit.
#[inline(always)]
fn blend(over: Rgb, under: Rgb, weight: u32) -> Rgb {
    let mix = |m: u8, b: u8| ((weight * m as u32 + (100 - weight) * b as u32) / 100) as u8;
    Rgb::new(
        mix(over.r, under.r),
        mix(over.g, under.g),
        mix(over.b, under.b),
    )
}
