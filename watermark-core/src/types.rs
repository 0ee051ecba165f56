//! Core types for watermark compositing.

use enough::StopReason;
use thiserror::Error;

use crate::limits;

/// Errors that can occur during watermarking.
///
/// Validation errors carry the exact user-facing message the interactive
/// tool reports before terminating; none of them are recoverable.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Operation was stopped via cooperative cancellation.
    #[error("operation stopped: {0}")]
    Stopped(StopReason),

    /// Source image file is missing or unreadable.
    #[error("The file {0} doesn't exist.")]
    ImageUnavailable(String),

    /// The image does not have exactly 3 color components.
    #[error("The number of {0} color components isn't 3.")]
    WrongColorComponents(ImageRole),

    /// The image is not 24 or 32 bits per pixel.
    #[error("The {0} isn't 24 or 32-bit.")]
    UnsupportedColorDepth(ImageRole),

    /// The watermark exceeds the base image in at least one dimension.
    #[error("The watermark's dimensions are larger.")]
    WatermarkTooLarge,

    /// Transparency color line was malformed or out of range.
    #[error("The transparency color input is invalid.")]
    InvalidColorInput,

    /// Blend weight was not an integer.
    #[error("The transparency percentage isn't an integer number.")]
    NotAnInteger,

    /// Blend weight was outside 0-100.
    #[error("The transparency percentage is out of range.")]
    WeightOutOfRange,

    /// Position line was malformed.
    #[error("The position input is invalid.")]
    InvalidPositionInput,

    /// Position was outside the valid placement range.
    #[error("The position input is out of range.")]
    PositionOutOfRange,

    /// Placement method keyword was not recognized.
    #[error("The position method input is invalid.")]
    UnknownPlacementMethod,

    /// Output filename does not end in a supported extension.
    #[error("The output file extension isn't \"jpg\" or \"png\".")]
    InvalidOutputExtension,

    /// The line input source ended before configuration was complete.
    #[error("input ended unexpectedly")]
    InputClosed,

    /// Image dimensions are invalid (zero).
    #[error("invalid image dimensions: {0}x{1}")]
    InvalidDimensions(u32, u32),

    /// Input exceeds safety limits.
    #[error("input exceeds safety limit: {0}")]
    LimitExceeded(String),

    /// Pixel data is invalid or truncated.
    #[error("invalid pixel data: {0}")]
    InvalidPixelData(String),

    /// Image decoding failed.
    #[error("decoding error: {0}")]
    DecodeError(String),

    /// Image encoding failed.
    #[error("encoding error: {0}")]
    EncodeError(String),

    /// File I/O failed.
    #[error("I/O error: {0}")]
    Io(String),
}

/// Result type for watermarking operations.
pub type Result<T> = core::result::Result<T, Error>;

impl From<StopReason> for Error {
    fn from(reason: StopReason) -> Self {
        Error::Stopped(reason)
    }
}

/// Which of the two participating images a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRole {
    /// The image being watermarked.
    Base,
    /// The overlay source.
    Watermark,
}

impl core::fmt::Display for ImageRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ImageRole::Base => write!(f, "image"),
            ImageRole::Watermark => write!(f, "watermark"),
        }
    }
}

/// Pixel format for raster images.
///
/// Only `Rgb8` and `Rgba8` participate in compositing; the remaining
/// variants exist so decoded images of any depth can be described and
/// rejected with a precise error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 8-bit grayscale
    Gray8,
    /// 8-bit grayscale with alpha
    GrayAlpha8,
    /// 8-bit RGB (24-bit pixels)
    Rgb8,
    /// 8-bit RGBA (32-bit pixels, true alpha channel)
    Rgba8,
    /// 16-bit grayscale
    Gray16,
    /// 16-bit RGB
    Rgb16,
    /// 16-bit RGBA
    Rgba16,
}

impl PixelFormat {
    /// Returns the number of bytes per pixel.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Gray8 => 1,
            Self::GrayAlpha8 | Self::Gray16 => 2,
            Self::Rgb8 => 3,
            Self::Rgba8 => 4,
            Self::Rgb16 => 6,
            Self::Rgba16 => 8,
        }
    }

    /// Returns the pixel size in bits.
    pub fn bits_per_pixel(&self) -> usize {
        self.bytes_per_pixel() * 8
    }

    /// Returns the number of color components (alpha excluded).
    pub fn color_components(&self) -> usize {
        match self {
            Self::Gray8 | Self::GrayAlpha8 | Self::Gray16 => 1,
            Self::Rgb8 | Self::Rgba8 | Self::Rgb16 | Self::Rgba16 => 3,
        }
    }

    /// Returns true if the format carries a true per-pixel alpha channel.
    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::GrayAlpha8 | Self::Rgba8 | Self::Rgba16)
    }
}

/// An 8-bit RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a new color from channel values.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A color sample with opacity.
///
/// `alpha` is 255 for pixels read from formats without an alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    /// Color channels.
    pub rgb: Rgb,
    /// Opacity; only zero vs nonzero is meaningful for compositing.
    pub alpha: u8,
}

/// A raw (uncompressed) raster image with packed pixel data.
#[derive(Debug, Clone)]
pub struct RasterImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel format.
    pub format: PixelFormat,
    /// Packed pixel data, row-major.
    pub data: Vec<u8>,
    /// Row stride in bytes.
    pub stride: u32,
}

impl RasterImage {
    /// Create a new zeroed image with the given dimensions and format.
    ///
    /// Returns an error if dimensions are zero or exceed safety limits.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Result<Self> {
        Self::validate_dimensions(width, height)?;

        let bpp = format.bytes_per_pixel() as u32;
        let stride = width
            .checked_mul(bpp)
            .ok_or_else(|| Error::LimitExceeded(format!("stride overflow: {}x{}", width, bpp)))?;
        let size = Self::calculate_data_size(height, stride)?;

        Ok(Self {
            width,
            height,
            format,
            data: vec![0u8; size],
            stride,
        })
    }

    /// Create an image from existing packed data.
    pub fn from_data(width: u32, height: u32, format: PixelFormat, data: Vec<u8>) -> Result<Self> {
        Self::validate_dimensions(width, height)?;

        let bpp = format.bytes_per_pixel() as u32;
        let stride = width
            .checked_mul(bpp)
            .ok_or_else(|| Error::LimitExceeded(format!("stride overflow: {}x{}", width, bpp)))?;
        let expected = Self::calculate_data_size(height, stride)?;
        if data.len() < expected {
            return Err(Error::InvalidPixelData(format!(
                "data too small: expected at least {} bytes, got {}",
                expected,
                data.len()
            )));
        }

        Ok(Self {
            width,
            height,
            format,
            data,
            stride,
        })
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// Only meaningful for the 3-component 8-bit formats; `alpha` is 255
    /// when the format has no alpha channel.
    pub fn pixel(&self, x: u32, y: u32) -> Pixel {
        debug_assert!(x < self.width && y < self.height);
        debug_assert!(matches!(self.format, PixelFormat::Rgb8 | PixelFormat::Rgba8));

        let bpp = self.format.bytes_per_pixel() as u32;
        let idx = (y * self.stride + x * bpp) as usize;
        let rgb = Rgb::new(self.data[idx], self.data[idx + 1], self.data[idx + 2]);
        let alpha = if self.format == PixelFormat::Rgba8 {
            self.data[idx + 3]
        } else {
            255
        };
        Pixel { rgb, alpha }
    }

    /// Write an RGB value at `(x, y)`. The image must be `Rgb8`.
    pub fn put_rgb(&mut self, x: u32, y: u32, rgb: Rgb) {
        debug_assert!(x < self.width && y < self.height);
        debug_assert_eq!(self.format, PixelFormat::Rgb8);

        let idx = (y * self.stride + x * 3) as usize;
        self.data[idx] = rgb.r;
        self.data[idx + 1] = rgb.g;
        self.data[idx + 2] = rgb.b;
    }

    /// Validate dimensions against safety limits.
    fn validate_dimensions(width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions(width, height));
        }

        if width > limits::MAX_IMAGE_DIMENSION || height > limits::MAX_IMAGE_DIMENSION {
            return Err(Error::LimitExceeded(format!(
                "dimension {} exceeds maximum {}",
                width.max(height),
                limits::MAX_IMAGE_DIMENSION
            )));
        }

        let total_pixels = width as u64 * height as u64;
        if total_pixels > limits::MAX_TOTAL_PIXELS {
            return Err(Error::LimitExceeded(format!(
                "total pixels {} exceeds maximum {}",
                total_pixels, limits::MAX_TOTAL_PIXELS
            )));
        }

        Ok(())
    }

    /// Calculate required data size with overflow checking.
    fn calculate_data_size(height: u32, stride: u32) -> Result<usize> {
        let size = (height as u64) * (stride as u64);
        if size > usize::MAX as u64 {
            return Err(Error::LimitExceeded(format!(
                "data size {} exceeds address space",
                size
            )));
        }
        Ok(size as usize)
    }
}
