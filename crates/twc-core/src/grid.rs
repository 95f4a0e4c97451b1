//! Contrast grid derivation.
//!
//! [`build_grid`] is a pure function of the palette and the selection state.
//! Every call normalizes every palette entry and scores it against the active
//! background; nothing is cached between calls.

use serde::Serialize;
use tracing::{debug, info_span, warn};

use twc_contrast::{normalize, score};
use twc_model::{ColorScale, HexColor, Palette, Score, ShadeKey};

use crate::defaults::SWATCH_SHADE;
use crate::selection::{BackgroundMode, SelectionState};

/// One shade that parsed as a colour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridCell {
    pub shade: ShadeKey,
    pub color: HexColor,
    /// `None` when the active background is not a colour.
    pub score: Option<Score>,
}

/// All parseable shades of one scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridSection {
    pub scale: String,
    /// Colour of the scale at the emphasis shade, used for its heading.
    pub heading_color: Option<HexColor>,
    pub cells: Vec<GridCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastGrid {
    pub mode: BackgroundMode,
    pub dark_mode: bool,
    /// Active background text as entered or as found in the palette.
    pub background_raw: Option<String>,
    pub background: Option<HexColor>,
    pub light_text: bool,
    pub emphasis_shade: ShadeKey,
    pub sections: Vec<GridSection>,
    /// Palette entries left out because they are not colours.
    pub dropped: usize,
}

impl ContrastGrid {
    pub fn section(&self, scale: &str) -> Option<&GridSection> {
        self.sections.iter().find(|section| section.scale == scale)
    }

    pub fn cell(&self, scale: &str, shade: &str) -> Option<&GridCell> {
        self.section(scale)?
            .cells
            .iter()
            .find(|cell| cell.shade.as_str() == shade)
    }

    pub fn cell_count(&self) -> usize {
        self.sections.iter().map(|section| section.cells.len()).sum()
    }

    /// Shade keys present in any section, in first-seen order.
    pub fn shade_columns(&self) -> Vec<ShadeKey> {
        let mut columns: Vec<ShadeKey> = Vec::new();
        for cell in self.sections.iter().flat_map(|section| &section.cells) {
            if !columns.contains(&cell.shade) {
                columns.push(cell.shade.clone());
            }
        }
        columns
    }
}

pub fn build_grid(palette: &Palette, state: &SelectionState) -> ContrastGrid {
    let span = info_span!("build_grid", scales = palette.len());
    let _guard = span.enter();

    let background_raw = state.active_background_raw(palette);
    let background = background_raw.and_then(normalize);
    if background.is_none() {
        warn!(
            background = background_raw.unwrap_or("<none>"),
            "active background is not a colour; scores omitted"
        );
    }

    let mut dropped = 0usize;
    let sections = palette
        .scales()
        .iter()
        .map(|scale| {
            let cells: Vec<GridCell> = scale
                .shades()
                .iter()
                .filter_map(|entry| {
                    let Some(color) = normalize(&entry.raw) else {
                        debug!(
                            scale = scale.name(),
                            shade = %entry.shade,
                            raw = %entry.raw,
                            "skipping unparseable shade"
                        );
                        dropped += 1;
                        return None;
                    };
                    Some(GridCell {
                        shade: entry.shade.clone(),
                        color,
                        score: background.map(|bg| score(color, bg)),
                    })
                })
                .collect();
            GridSection {
                scale: scale.name().to_string(),
                heading_color: scale
                    .raw(state.emphasis_shade().as_str())
                    .and_then(normalize),
                cells,
            }
        })
        .collect();

    let grid = ContrastGrid {
        mode: state.mode().clone(),
        dark_mode: state.is_dark_mode(),
        background_raw: background_raw.map(str::to_string),
        background,
        light_text: state.uses_light_text(),
        emphasis_shade: state.emphasis_shade().clone(),
        sections,
        dropped,
    };
    debug!(cells = grid.cell_count(), dropped = grid.dropped, "grid built");
    grid
}

/// Representative colour of a scale: its `500` shade, or the middle entry when
/// the scale has no `500`.
pub fn scale_swatch(scale: &ColorScale) -> Option<HexColor> {
    if let Some(raw) = scale.raw(SWATCH_SHADE) {
        return normalize(raw);
    }
    let shades = scale.shades();
    shades.get(shades.len() / 2).and_then(|entry| normalize(&entry.raw))
}
