//! Embedded palette data.
//!
//! Palettes are embedded at compile time using `include_str!()` as
//! `scale,shade,color` CSV, one row per shade, in display order.

/// Label used in diagnostics for the embedded Tailwind palette.
pub const TAILWIND_V3_ORIGIN: &str = "<embedded tailwind-v3>";

/// Tailwind CSS v3 default colour scales (`slate` .. `rose`, shades 50-950).
pub const TAILWIND_V3: &str = include_str!("../data/tailwind-v3.csv");
