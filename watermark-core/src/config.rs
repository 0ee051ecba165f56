//! Validated watermark configuration.
//!
//! [`WatermarkConfig`] holds everything the compositor needs: the watermark
//! pixel buffer, its transparency rules, the blend weight, and the placement
//! policy. Construction validates eagerly in a fixed order and the first
//! failure halts it; a config that exists is fully valid.

use crate::types::{Error, ImageRole, Pixel, RasterImage, Result, Rgb};

/// Where the watermark is placed on the base image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// One copy at the given top-left offset within the base.
    Single {
        /// Horizontal offset, in `[0, base_width - mark_width]`.
        x: u32,
        /// Vertical offset, in `[0, base_height - mark_height]`.
        y: u32,
    },
    /// The watermark tiles the whole base, repeating from (0, 0).
    Grid,
}

/// Ordered, blocking line-based input used to collect configuration values.
///
/// Each call presents `prompt` and returns the next line. There is no
/// re-prompting: a malformed line is a fatal validation error, not a retry
/// trigger.
pub trait LineInput {
    /// Present `prompt` and return the next line of input, without its
    /// trailing newline.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Immutable, fully-validated watermark configuration.
#[derive(Debug, Clone)]
pub struct WatermarkConfig {
    mark: RasterImage,
    key: Option<Rgb>,
    use_alpha: bool,
    weight: u8,
    placement: Placement,
}

impl WatermarkConfig {
    /// Build a configuration from already-parsed values.
    ///
    /// Validates the watermark's color model, its dimensions against the
    /// base, the weight range, and (for single placement) the position
    /// range. The interactive path in [`WatermarkConfig::from_input`]
    /// funnels through this.
    pub fn new(
        base: &RasterImage,
        mark: RasterImage,
        key: Option<Rgb>,
        use_alpha: bool,
        weight: u8,
        placement: Placement,
    ) -> Result<Self> {
        check_color_model(&mark, ImageRole::Watermark)?;
        if mark.width > base.width || mark.height > base.height {
            return Err(Error::WatermarkTooLarge);
        }
        if weight > 100 {
            return Err(Error::WeightOutOfRange);
        }
        if let Placement::Single { x, y } = placement {
            if x > base.width - mark.width || y > base.height - mark.height {
                return Err(Error::PositionOutOfRange);
            }
        }

        Ok(Self {
            mark,
            key,
            use_alpha,
            weight,
            placement,
        })
    }

    /// Build a configuration by reading raw values from `input` in the
    /// fixed validation order.
    ///
    /// The watermark image must already be decoded; the sequence here
    /// covers everything after that: color model, dimensions,
    /// transparency-key opt-in (24-bit watermarks only), alpha opt-in
    /// (32-bit watermarks only), blend weight, placement.
    pub fn from_input<I: LineInput>(
        base: &RasterImage,
        mark: RasterImage,
        input: &mut I,
    ) -> Result<Self> {
        check_color_model(&mark, ImageRole::Watermark)?;
        if mark.width > base.width || mark.height > base.height {
            return Err(Error::WatermarkTooLarge);
        }

        let key = if mark.format.has_alpha() {
            None
        } else {
            let answer = input.read_line("Do you want to set a transparency color?")?;
            if answer == "yes" {
                let line = input.read_line("Input a transparency color ([Red] [Green] [Blue]):")?;
                Some(parse_transparency_color(&line)?)
            } else {
                None
            }
        };

        let use_alpha = mark.format.has_alpha() && {
            let answer = input.read_line("Do you want to use the watermark's Alpha channel?")?;
            answer.to_lowercase() == "yes"
        };

        let weight = parse_weight(
            &input.read_line("Input the watermark transparency percentage (Integer 0-100):")?,
        )?;

        let diff_x = base.width - mark.width;
        let diff_y = base.height - mark.height;
        let method = input.read_line("Choose the position method (single, grid):")?;
        let placement = match method.as_str() {
            "single" => {
                let prompt =
                    format!("Input the watermark position ([x 0-{diff_x}] [y 0-{diff_y}]):");
                let line = input.read_line(&prompt)?;
                let (x, y) = parse_position(&line, diff_x, diff_y)?;
                Placement::Single { x, y }
            }
            "grid" => Placement::Grid,
            _ => return Err(Error::UnknownPlacementMethod),
        };

        Ok(Self {
            mark,
            key,
            use_alpha,
            weight,
            placement,
        })
    }

    /// The watermark pixel buffer.
    pub fn mark(&self) -> &RasterImage {
        &self.mark
    }

    /// The color treated as fully transparent, if one was set.
    pub fn transparency_key(&self) -> Option<Rgb> {
        self.key
    }

    /// Whether the watermark's own alpha channel suppresses blending.
    pub fn uses_alpha(&self) -> bool {
        self.use_alpha
    }

    /// The watermark's percentage contribution to the output color.
    pub fn weight(&self) -> u8 {
        self.weight
    }

    /// The placement policy.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// The watermark pixel that covers output coordinate `(x, y)`, or
    /// `None` when single placement leaves the coordinate uncovered.
    pub fn candidate_at(&self, x: u32, y: u32) -> Option<Pixel> {
        match self.placement {
            Placement::Grid => Some(self.mark.pixel(x % self.mark.width, y % self.mark.height)),
            Placement::Single { x: px, y: py } => {
                if x >= px && x < px + self.mark.width && y >= py && y < py + self.mark.height {
                    Some(self.mark.pixel(x - px, y - py))
                } else {
                    None
                }
            }
        }
    }

    /// Whether a candidate pixel is excluded from blending.
    ///
    /// Either suppression mechanism alone is sufficient: a zero alpha value
    /// (when alpha handling is on) or an exact match with the transparency
    /// key. The two are evaluated independently.
    pub fn excludes(&self, pixel: Pixel) -> bool {
        (self.use_alpha && pixel.alpha == 0) || self.key == Some(pixel.rgb)
    }
}

/// Check that an image has exactly 3 color components and 24/32-bit pixels.
///
/// Applied to the base image by the CLI and to the watermark during
/// configuration; `role` selects the wording of the failure message.
pub fn check_color_model(image: &RasterImage, role: ImageRole) -> Result<()> {
    if image.format.color_components() != 3 {
        return Err(Error::WrongColorComponents(role));
    }
    if !matches!(image.format.bits_per_pixel(), 24 | 32) {
        return Err(Error::UnsupportedColorDepth(role));
    }
    Ok(())
}

/// Parse "R G B": three space-separated unsigned decimal tokens, each 0-255.
fn parse_transparency_color(line: &str) -> Result<Rgb> {
    let tokens: Vec<&str> = line.split(' ').collect();
    if tokens.len() != 3
        || tokens
            .iter()
            .any(|t| t.is_empty() || !t.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(Error::InvalidColorInput);
    }

    let mut channels = [0u8; 3];
    for (slot, token) in channels.iter_mut().zip(&tokens) {
        let value: u32 = token.parse().map_err(|_| Error::InvalidColorInput)?;
        if value > 255 {
            return Err(Error::InvalidColorInput);
        }
        *slot = value as u8;
    }
    Ok(Rgb::new(channels[0], channels[1], channels[2]))
}

/// Parse the blend weight: an integer in [0, 100].
fn parse_weight(line: &str) -> Result<u8> {
    let weight: i32 = line.parse().map_err(|_| Error::NotAnInteger)?;
    if !(0..=100).contains(&weight) {
        return Err(Error::WeightOutOfRange);
    }
    Ok(weight as u8)
}

/// Parse "x y": two space-separated signed decimal tokens, each within its
/// axis range `[0, diff]`.
fn parse_position(line: &str, diff_x: u32, diff_y: u32) -> Result<(u32, u32)> {
    fn signed_decimal(token: &str) -> bool {
        let digits = token.strip_prefix('-').unwrap_or(token);
        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
    }

    let tokens: Vec<&str> = line.split(' ').collect();
    if tokens.len() != 2 || !tokens.iter().copied().all(signed_decimal) {
        return Err(Error::InvalidPositionInput);
    }

    let x: i64 = tokens[0].parse().map_err(|_| Error::InvalidPositionInput)?;
    let y: i64 = tokens[1].parse().map_err(|_| Error::InvalidPositionInput)?;
    if x < 0 || x > diff_x as i64 || y < 0 || y > diff_y as i64 {
        return Err(Error::PositionOutOfRange);
    }
    Ok((x as u32, y as u32))
}
