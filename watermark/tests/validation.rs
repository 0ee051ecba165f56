//! Construction rejection tests: every validation failure, in prompt order,
//! with the exact message the tool reports.

mod common;

use common::{create_rgb_solid, create_rgba_solid, ScriptedInput};
use watermark::{check_color_model, Error, ImageRole, Rgb, WatermarkConfig};

fn base_10x10() -> watermark::RasterImage {
    create_rgb_solid(10, 10, Rgb::new(50, 50, 50))
}

fn mark_4x4() -> watermark::RasterImage {
    create_rgb_solid(4, 4, Rgb::new(200, 200, 200))
}

#[test]
fn test_rejects_oversized_watermark() {
    let base = create_rgb_solid(5, 5, Rgb::new(0, 0, 0));
    let mark = create_rgb_solid(10, 10, Rgb::new(0, 0, 0));
    let mut input = ScriptedInput::new(&[]);

    let err = WatermarkConfig::from_input(&base, mark, &mut input).unwrap_err();
    assert!(matches!(err, Error::WatermarkTooLarge));
    assert_eq!(err.to_string(), "The watermark's dimensions are larger.");
    // Failed before any prompt was issued
    assert!(input.prompts.is_empty());
}

#[test]
fn test_rejects_taller_watermark() {
    // Wider-or-taller alone is enough to reject
    let base = create_rgb_solid(10, 5, Rgb::new(0, 0, 0));
    let mark = create_rgb_solid(4, 6, Rgb::new(0, 0, 0));
    let mut input = ScriptedInput::new(&[]);

    let err = WatermarkConfig::from_input(&base, mark, &mut input).unwrap_err();
    assert!(matches!(err, Error::WatermarkTooLarge));
}

#[test]
fn test_rejects_invalid_transparency_color() {
    for bad in ["255 255", "255 255 256", "r g b", "-1 0 0"] {
        let mut input = ScriptedInput::new(&["yes", bad]);
        let err = WatermarkConfig::from_input(&base_10x10(), mark_4x4(), &mut input).unwrap_err();
        assert!(
            matches!(err, Error::InvalidColorInput),
            "input {:?} gave {:?}",
            bad,
            err
        );
        assert_eq!(err.to_string(), "The transparency color input is invalid.");
    }
}

#[test]
fn test_rejects_non_integer_weight() {
    let mut input = ScriptedInput::new(&["no", "abc"]);
    let err = WatermarkConfig::from_input(&base_10x10(), mark_4x4(), &mut input).unwrap_err();
    assert!(matches!(err, Error::NotAnInteger));
    assert_eq!(
        err.to_string(),
        "The transparency percentage isn't an integer number."
    );
}

#[test]
fn test_rejects_out_of_range_weight() {
    for bad in ["101", "-1", "1000"] {
        let mut input = ScriptedInput::new(&["no", bad]);
        let err = WatermarkConfig::from_input(&base_10x10(), mark_4x4(), &mut input).unwrap_err();
        assert!(matches!(err, Error::WeightOutOfRange), "input {:?}", bad);
        assert_eq!(err.to_string(), "The transparency percentage is out of range.");
    }
}

#[test]
fn test_rejects_unknown_placement_method() {
    let mut input = ScriptedInput::new(&["no", "50", "tiled"]);
    let err = WatermarkConfig::from_input(&base_10x10(), mark_4x4(), &mut input).unwrap_err();
    assert!(matches!(err, Error::UnknownPlacementMethod));
    assert_eq!(err.to_string(), "The position method input is invalid.");
}

#[test]
fn test_rejects_malformed_position() {
    for bad in ["3", "3 4 5", "a b", "3,4", ""] {
        let mut input = ScriptedInput::new(&["no", "50", "single", bad]);
        let err = WatermarkConfig::from_input(&base_10x10(), mark_4x4(), &mut input).unwrap_err();
        assert!(matches!(err, Error::InvalidPositionInput), "input {:?}", bad);
        assert_eq!(err.to_string(), "The position input is invalid.");
    }
}

#[test]
fn test_rejects_out_of_range_position() {
    // Valid range for a 4x4 mark on a 10x10 base is [0,6]x[0,6]
    for bad in ["7 0", "0 7", "-1 3", "3 -1"] {
        let mut input = ScriptedInput::new(&["no", "50", "single", bad]);
        let err = WatermarkConfig::from_input(&base_10x10(), mark_4x4(), &mut input).unwrap_err();
        assert!(matches!(err, Error::PositionOutOfRange), "input {:?}", bad);
        assert_eq!(err.to_string(), "The position input is out of range.");
    }
}

#[test]
fn test_boundary_position_accepted() {
    let mut input = ScriptedInput::new(&["no", "50", "single", "6 6"]);
    let config = WatermarkConfig::from_input(&base_10x10(), mark_4x4(), &mut input).unwrap();
    assert_eq!(
        config.placement(),
        watermark::Placement::Single { x: 6, y: 6 }
    );
}

#[test]
fn test_color_model_messages_per_role() {
    let gray = watermark::RasterImage::new(4, 4, watermark::PixelFormat::Gray8).unwrap();

    let err = check_color_model(&gray, ImageRole::Base).unwrap_err();
    assert_eq!(
        err.to_string(),
        "The number of image color components isn't 3."
    );

    let err = check_color_model(&gray, ImageRole::Watermark).unwrap_err();
    assert_eq!(
        err.to_string(),
        "The number of watermark color components isn't 3."
    );
}

#[test]
fn test_declining_transparency_color_skips_color_prompt() {
    let mut input = ScriptedInput::new(&["no", "50", "grid"]);
    let config = WatermarkConfig::from_input(&base_10x10(), mark_4x4(), &mut input).unwrap();
    assert_eq!(config.transparency_key(), None);
    assert_eq!(
        input.prompts,
        vec![
            "Do you want to set a transparency color?",
            "Input the watermark transparency percentage (Integer 0-100):",
            "Choose the position method (single, grid):",
        ]
    );
}

#[test]
fn test_alpha_watermark_never_offers_transparency_color() {
    let mark = create_rgba_solid(4, 4, Rgb::new(0, 0, 0), 255);
    let mut input = ScriptedInput::new(&["no", "50", "grid"]);
    let config = WatermarkConfig::from_input(&base_10x10(), mark, &mut input).unwrap();
    assert_eq!(config.transparency_key(), None);
    assert!(!config.uses_alpha());
    assert_eq!(
        input.prompts[0],
        "Do you want to use the watermark's Alpha channel?"
    );
}
