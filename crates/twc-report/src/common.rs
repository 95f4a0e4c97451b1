//! Labels shared by every renderer.

use twc_contrast::round_ratio;
use twc_core::{BackgroundMode, ContrastGrid};
use twc_model::Score;

pub const PAGE_TITLE: &str = "Colour Accessibility for Tailwind CSS";
pub const HEADLINE: &str = "Colour accessibility test for Tailwind CSS";
pub const WCAG_CONTRAST_URL: &str = "https://www.w3.org/TR/WCAG20/#contrast-ratiodef";

/// Text of the `about` command.
pub const ABOUT: &str = "\
Colour Accessibility for Tailwind CSS

Shows the WCAG 2.0 contrast grade of every shade of every Tailwind CSS colour
against a background of your choice: a light or dark freeform colour, or any
colour from the palette itself.

This tool is in no way connected to or endorsed by Tailwind Labs Inc.";

/// `AA 4.76`, or `-` without a score.
pub fn score_label(score: Option<Score>) -> String {
    match score {
        Some(score) => format!("{} {:.2}", score.grade, round_ratio(score.ratio)),
        None => "-".to_string(),
    }
}

/// One-line description of the active background.
pub fn background_summary(grid: &ContrastGrid) -> String {
    let source = match &grid.mode {
        BackgroundMode::Palette(selection) => {
            format!("palette {} {}", selection.scale, selection.shade)
        }
        BackgroundMode::Freeform if grid.dark_mode => "dark mode".to_string(),
        BackgroundMode::Freeform => "light mode".to_string(),
    };
    match (&grid.background, &grid.background_raw) {
        (Some(color), _) => format!("Background: {color} ({source})"),
        (None, Some(raw)) => format!("Background: {raw:?} is not a colour ({source})"),
        (None, None) => format!("Background: none ({source})"),
    }
}
