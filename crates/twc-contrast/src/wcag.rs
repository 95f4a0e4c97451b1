//! WCAG 2.0 relative luminance, contrast ratio and grading.
//!
//! See <https://www.w3.org/TR/WCAG20/#contrast-ratiodef>.

use twc_model::{Grade, HexColor, Score};

use crate::normalize::normalize;

/// Minimum ratio for AAA (normal text).
pub const AAA_MIN_RATIO: f64 = 7.0;
/// Minimum ratio for AA (normal text).
pub const AA_MIN_RATIO: f64 = 4.5;
/// Minimum ratio for AA on large text.
pub const AA_LARGE_MIN_RATIO: f64 = 3.0;

/// Ratios shown to users are rounded to two decimals.
pub const RATIO_ROUNDING_FACTOR: f64 = 100.0;

/// sRGB channel (0-255) to linear light.
fn srgb_to_linear(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance: `0.2126 R + 0.7152 G + 0.0722 B` over linear channels.
pub fn relative_luminance(color: HexColor) -> f64 {
    let (r, g, b) = color.rgb();
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

/// `(L_lighter + 0.05) / (L_darker + 0.05)`. Order of arguments does not matter.
pub fn contrast_ratio(foreground: HexColor, background: HexColor) -> f64 {
    let a = relative_luminance(foreground);
    let b = relative_luminance(background);
    let (lighter, darker) = (a.max(b), a.min(b));
    (lighter + 0.05) / (darker + 0.05)
}

pub fn grade(ratio: f64) -> Grade {
    if ratio >= AAA_MIN_RATIO {
        Grade::Aaa
    } else if ratio >= AA_MIN_RATIO {
        Grade::Aa
    } else if ratio >= AA_LARGE_MIN_RATIO {
        Grade::AaLarge
    } else {
        Grade::Fail
    }
}

pub fn score(foreground: HexColor, background: HexColor) -> Score {
    let ratio = contrast_ratio(foreground, background);
    Score {
        ratio,
        grade: grade(ratio),
    }
}

/// Normalizes both strings, then scores them. `None` if either is not a colour.
pub fn score_raw(foreground: &str, background: &str) -> Option<Score> {
    Some(score(normalize(foreground)?, normalize(background)?))
}

pub fn round_ratio(ratio: f64) -> f64 {
    (ratio * RATIO_ROUNDING_FACTOR).round() / RATIO_ROUNDING_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(raw: &str) -> HexColor {
        normalize(raw).unwrap()
    }

    #[test]
    fn black_on_white_is_21() {
        let ratio = contrast_ratio(HexColor::BLACK, HexColor::WHITE);
        assert!((ratio - 21.0).abs() < 1e-9);
        assert_eq!(grade(ratio), Grade::Aaa);
    }

    #[test]
    fn identical_colours_are_1() {
        assert_eq!(contrast_ratio(HexColor::WHITE, HexColor::WHITE), 1.0);
        assert_eq!(contrast_ratio(hex("#64748b"), hex("#64748b")), 1.0);
    }

    #[test]
    fn gray_on_white() {
        let ratio = contrast_ratio(hex("#767676"), HexColor::WHITE);
        assert!((ratio - 4.54).abs() < 0.01);
        assert_eq!(grade(ratio), Grade::Aa);
    }

    #[test]
    fn red_on_white_is_large_text_only() {
        let ratio = contrast_ratio(hex("#ff0000"), HexColor::WHITE);
        assert!((ratio - 4.0).abs() < 0.01);
        assert_eq!(grade(ratio), Grade::AaLarge);
    }

    #[test]
    fn slate_800_on_white() {
        let ratio = contrast_ratio(hex("#1e293b"), HexColor::WHITE);
        assert!((ratio - 14.63).abs() < 0.05);
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(grade(7.0), Grade::Aaa);
        assert_eq!(grade(6.999), Grade::Aa);
        assert_eq!(grade(4.5), Grade::Aa);
        assert_eq!(grade(4.499), Grade::AaLarge);
        assert_eq!(grade(3.0), Grade::AaLarge);
        assert_eq!(grade(2.999), Grade::Fail);
        assert_eq!(grade(1.0), Grade::Fail);
    }

    #[test]
    fn score_raw_requires_two_colours() {
        let score = score_raw("black", "#fff").unwrap();
        assert_eq!(score.grade, Grade::Aaa);
        assert!(score_raw("black", "nope").is_none());
        assert!(score_raw("nope", "#fff").is_none());
    }

    #[test]
    fn rounding_to_two_decimals() {
        assert_eq!(round_ratio(4.5422), 4.54);
        assert_eq!(round_ratio(20.999999999), 21.0);
    }
}
