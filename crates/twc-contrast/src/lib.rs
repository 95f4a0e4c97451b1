#![deny(unsafe_code)]

//! Colour normalization and WCAG contrast scoring.

pub mod normalize;
pub mod wcag;

pub use normalize::{normalize, normalize_to_hex_string};
pub use wcag::{contrast_ratio, grade, relative_luminance, round_ratio, score, score_raw};
