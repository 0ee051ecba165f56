//! Core compositing math and validated configuration for image watermarking.
//!
//! This crate provides the pure computational components for watermarking:
//! - Raster image buffers and pixel format queries
//! - Validated watermark configuration (transparency keying, alpha
//!   handling, blend weight, placement)
//! - Per-pixel compositing of a watermark onto a base image
//!
//! This crate has **no codec dependency**. For PNG/JPEG decode/encode and
//! the interactive command-line tool, use the `watermark` crate.
//!
//! # Cooperative Cancellation
//!
//! The compositing loop accepts an `impl Stop` parameter from the `enough`
//! crate for cooperative cancellation. Use `Unstoppable` when cancellation
//! is not needed.
//!
//! # Example
//!
//! ```ignore
//! use watermark_core::{compose, LineInput, RasterImage, WatermarkConfig};
//! use enough::Unstoppable;
//!
//! // Build a validated configuration from line-based input
//! let config = WatermarkConfig::from_input(&base, mark, &mut input)?;
//!
//! // Composite the watermark onto the base image
//! let output = compose(&base, &config, Unstoppable)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compose;
pub mod config;
mod types;

// Re-export core types
pub use types::{Error, ImageRole, Pixel, PixelFormat, RasterImage, Result, Rgb};

pub use compose::compose;
pub use config::{check_color_model, LineInput, Placement, WatermarkConfig};

// Re-export enough for convenience
pub use enough::{Never as Unstoppable, Stop, StopReason};

/// Safety limits for allocation.
pub mod limits {
    /// Maximum image dimension (width or height).
    pub const MAX_IMAGE_DIMENSION: u32 = 65535;

    /// Maximum total pixels (width * height).
    pub const MAX_TOTAL_PIXELS: u64 = 500_000_000; // 500 megapixels
}
