//! Image watermarking with PNG/JPEG codec integration.
//!
//! The core compositing math lives in [`watermark_core`], which has no
//! codec dependency. This crate adds the codec layer (decode/encode via
//! the `image` crate) and ships the interactive `watermark` binary.
//!
//! # Example
//!
//! ```ignore
//! use watermark::{codec, compose, Unstoppable, WatermarkConfig};
//!
//! let base = codec::decode(&std::fs::read("photo.jpg")?)?;
//! let mark = codec::decode(&std::fs::read("logo.png")?)?;
//!
//! let config = WatermarkConfig::from_input(&base, mark, &mut input)?;
//! let output = compose(&base, &config, Unstoppable)?;
//!
//! let bytes = codec::encode(&output, codec::OutputFormat::Png)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;

// Re-export everything from watermark-core at the crate root
pub use watermark_core::{
    check_color_model, compose, limits, Error, ImageRole, LineInput, Pixel, PixelFormat, Placement,
    RasterImage, Result, Rgb, Stop, StopReason, Unstoppable, WatermarkConfig,
};
