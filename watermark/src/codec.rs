//! Codec glue over the `image` crate.
//!
//! Turns encoded bytes into [`RasterImage`] buffers and back. Decoding
//! preserves the source color model so validation can reject unsupported
//! depths with a precise message; encoding only ever sees the compositor's
//! `Rgb8` output.

use std::io::Cursor;

use image::{ColorType, ImageFormat};
use watermark_core::{Error, PixelFormat, RasterImage, Result};

/// Supported output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Portable Network Graphics.
    Png,
    /// JPEG.
    Jpeg,
}

impl OutputFormat {
    /// Select the output format from a filename.
    ///
    /// Accepts only `*.jpg` and `*.png` with a non-empty stem; everything
    /// else is rejected by the caller as an invalid extension.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() {
            return None;
        }
        match ext {
            "jpg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
        }
    }
}

/// Decode encoded image bytes into a raster buffer.
///
/// The container format is sniffed from the bytes. The decoded color model
/// is carried through unchanged; images that cannot participate in
/// compositing are rejected later by color-model validation.
pub fn decode(bytes: &[u8]) -> Result<RasterImage> {
    let decoded =
        image::load_from_memory(bytes).map_err(|e| Error::DecodeError(e.to_string()))?;

    let format = match decoded.color() {
        ColorType::L8 => PixelFormat::Gray8,
        ColorType::La8 => PixelFormat::GrayAlpha8,
        ColorType::Rgb8 => PixelFormat::Rgb8,
        ColorType::Rgba8 => PixelFormat::Rgba8,
        ColorType::L16 => PixelFormat::Gray16,
        ColorType::Rgb16 => PixelFormat::Rgb16,
        ColorType::Rgba16 => PixelFormat::Rgba16,
        other => {
            return Err(Error::DecodeError(format!(
                "unsupported color type: {:?}",
                other
            )))
        }
    };

    let width = decoded.width();
    let height = decoded.height();
    RasterImage::from_data(width, height, format, decoded.into_bytes())
}

/// Encode an `Rgb8` raster buffer as PNG or JPEG bytes.
pub fn encode(img: &RasterImage, format: OutputFormat) -> Result<Vec<u8>> {
    if img.format != PixelFormat::Rgb8 {
        return Err(Error::EncodeError(format!(
            "only Rgb8 buffers are encodable, got {:?}",
            img.format
        )));
    }

    let buffer = image::RgbImage::from_raw(img.width, img.height, img.data.clone())
        .ok_or_else(|| Error::EncodeError("pixel buffer too small".into()))?;

    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(buffer)
        .write_to(&mut Cursor::new(&mut bytes), format.image_format())
        .map_err(|e| Error::EncodeError(e.to_string()))?;
    Ok(bytes)
}
