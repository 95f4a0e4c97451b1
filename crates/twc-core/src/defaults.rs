//! Compile-time defaults for a fresh session.

/// Freeform background used in light mode.
pub const DEFAULT_LIGHT_BACKGROUND: &str = "#ffffff";

/// Freeform background used in dark mode.
pub const DEFAULT_DARK_BACKGROUND: &str = "#000000";

/// Shade used to colour scale headings in light mode.
pub const LIGHT_EMPHASIS_SHADE: u32 = 700;

/// Shade used to colour scale headings in dark mode.
pub const DARK_EMPHASIS_SHADE: u32 = 400;

/// Scale and shade selected when a palette background is first enabled.
pub const DEFAULT_PALETTE_SCALE: &str = "slate";
pub const DEFAULT_PALETTE_SHADE: &str = "50";

/// Palette backgrounds darker than this shade switch page text to white.
pub const LIGHT_TEXT_SHADE_THRESHOLD: u32 = 500;

/// Shade shown as the representative swatch of a scale.
pub const SWATCH_SHADE: &str = "500";
