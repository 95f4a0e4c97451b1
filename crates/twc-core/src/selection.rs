//! Background selection state machine.
//!
//! The state has two modes:
//!
//! - **Freeform**: two free-text inputs (light and dark background) and a dark
//!   mode flag choosing which of the two is active. Toggling dark mode also
//!   moves the heading emphasis shade between 700 and 400.
//! - **Palette**: the background is a `(scale, shade)` reference into the
//!   palette, changed through [`SelectionState::select_scale`] and
//!   [`SelectionState::select_shade`].
//!
//! All mutation goes through the named transition methods. A transition that
//! is not valid in the current mode, or that names an unknown scale or shade,
//! returns a [`SelectionError`] and leaves the state as it was. Switching
//! modes never discards the freeform inputs.

use serde::Serialize;
use tracing::debug;

use twc_contrast::normalize;
use twc_model::{ColorScale, HexColor, Palette, ShadeKey};

use crate::defaults::{
    DARK_EMPHASIS_SHADE, DEFAULT_DARK_BACKGROUND, DEFAULT_LIGHT_BACKGROUND, DEFAULT_PALETTE_SCALE,
    DEFAULT_PALETTE_SHADE, LIGHT_EMPHASIS_SHADE, LIGHT_TEXT_SHADE_THRESHOLD,
};
use crate::error::{Result, SelectionError};

/// A `(scale, shade)` reference into the palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteSelection {
    pub scale: String,
    pub shade: ShadeKey,
}

/// Which source supplies the active background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BackgroundMode {
    Freeform,
    Palette(PaletteSelection),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    light_background: String,
    dark_background: String,
    dark_mode: bool,
    emphasis_shade: ShadeKey,
    mode: BackgroundMode,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            light_background: DEFAULT_LIGHT_BACKGROUND.to_string(),
            dark_background: DEFAULT_DARK_BACKGROUND.to_string(),
            dark_mode: false,
            emphasis_shade: ShadeKey::from(LIGHT_EMPHASIS_SHADE),
            mode: BackgroundMode::Freeform,
        }
    }
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Raw text of the light-mode background input.
    pub fn light_background(&self) -> &str {
        &self.light_background
    }

    /// Raw text of the dark-mode background input.
    pub fn dark_background(&self) -> &str {
        &self.dark_background
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Shade whose colour is used for scale headings.
    pub fn emphasis_shade(&self) -> &ShadeKey {
        &self.emphasis_shade
    }

    pub fn mode(&self) -> &BackgroundMode {
        &self.mode
    }

    pub fn palette_selection(&self) -> Option<&PaletteSelection> {
        match &self.mode {
            BackgroundMode::Palette(selection) => Some(selection),
            BackgroundMode::Freeform => None,
        }
    }

    pub fn is_palette_mode(&self) -> bool {
        self.palette_selection().is_some()
    }

    // -------------------------------------------------------------------------
    // Freeform transitions
    // -------------------------------------------------------------------------

    /// Replaces the light-mode input text. Any text is accepted; an input that
    /// is not a colour simply yields no active background.
    pub fn set_light_background(&mut self, raw: impl Into<String>) -> Result<()> {
        self.require_freeform("editing the light background")?;
        self.light_background = raw.into();
        debug!(light_background = %self.light_background, "light background changed");
        Ok(())
    }

    pub fn set_dark_background(&mut self, raw: impl Into<String>) -> Result<()> {
        self.require_freeform("editing the dark background")?;
        self.dark_background = raw.into();
        debug!(dark_background = %self.dark_background, "dark background changed");
        Ok(())
    }

    /// Sets dark mode and moves the emphasis shade (400 dark, 700 light).
    pub fn set_dark_mode(&mut self, enabled: bool) -> Result<()> {
        self.require_freeform("switching dark mode")?;
        self.dark_mode = enabled;
        self.emphasis_shade = ShadeKey::from(if enabled {
            DARK_EMPHASIS_SHADE
        } else {
            LIGHT_EMPHASIS_SHADE
        });
        debug!(dark_mode = enabled, emphasis_shade = %self.emphasis_shade, "dark mode changed");
        Ok(())
    }

    pub fn toggle_dark_mode(&mut self) -> Result<()> {
        self.set_dark_mode(!self.dark_mode)
    }

    /// Switches to a palette background at the default selection
    /// (`slate`/`50`, or the first shade of the first scale when the palette
    /// has no such entry).
    pub fn enable_palette_background(&mut self, palette: &Palette) -> Result<()> {
        self.require_freeform("enabling a palette background")?;
        let selection = default_selection(palette)?;
        debug!(scale = %selection.scale, shade = %selection.shade, "palette background enabled");
        self.mode = BackgroundMode::Palette(selection);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Palette transitions
    // -------------------------------------------------------------------------

    /// Picks another scale. The current shade is kept when the new scale has
    /// it; otherwise the scale's first shade is used.
    pub fn select_scale(&mut self, palette: &Palette, name: &str) -> Result<()> {
        let current = self.require_palette("choosing a scale")?;
        let scale = find_scale(palette, name)?;
        let shade = if scale.contains_shade(current.shade.as_str()) {
            current.shade.clone()
        } else {
            scale
                .first_shade()
                .cloned()
                .ok_or(SelectionError::EmptyPalette)?
        };
        debug!(scale = scale.name(), shade = %shade, "palette scale changed");
        self.mode = BackgroundMode::Palette(PaletteSelection {
            scale: scale.name().to_string(),
            shade,
        });
        Ok(())
    }

    pub fn select_shade(&mut self, palette: &Palette, shade: &str) -> Result<()> {
        let current = self.require_palette("choosing a shade")?;
        let scale = find_scale(palette, &current.scale)?;
        let shade = ShadeKey::new(shade);
        if !scale.contains_shade(shade.as_str()) {
            return Err(SelectionError::UnknownShade {
                scale: scale.name().to_string(),
                shade: shade.to_string(),
            });
        }
        debug!(scale = scale.name(), shade = %shade, "palette shade changed");
        self.mode = BackgroundMode::Palette(PaletteSelection {
            scale: scale.name().to_string(),
            shade,
        });
        Ok(())
    }

    /// Enables a palette background (if needed) and selects `scale`/`shade`
    /// in one step. Nothing changes unless every step succeeds.
    pub fn select_palette_color(&mut self, palette: &Palette, scale: &str, shade: &str) -> Result<()> {
        let mut next = self.clone();
        if !next.is_palette_mode() {
            next.enable_palette_background(palette)?;
        }
        next.select_scale(palette, scale)?;
        next.select_shade(palette, shade)?;
        *self = next;
        Ok(())
    }

    /// Returns to the freeform background. Inputs and dark mode are kept.
    pub fn reset(&mut self) {
        if self.is_palette_mode() {
            debug!("palette background reset");
        }
        self.mode = BackgroundMode::Freeform;
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    /// Raw text of the active background, before normalization.
    ///
    /// `None` only when a palette selection no longer exists in `palette`.
    pub fn active_background_raw<'a>(&'a self, palette: &'a Palette) -> Option<&'a str> {
        match &self.mode {
            BackgroundMode::Palette(selection) => {
                palette.raw(&selection.scale, selection.shade.as_str())
            }
            BackgroundMode::Freeform if self.dark_mode => Some(&self.dark_background),
            BackgroundMode::Freeform => Some(&self.light_background),
        }
    }

    /// The active background, normalized. `None` when it is not a colour.
    pub fn active_background(&self, palette: &Palette) -> Option<HexColor> {
        self.active_background_raw(palette).and_then(normalize)
    }

    /// Whether page text should switch to white: dark mode, or a palette
    /// background darker than shade 500.
    pub fn uses_light_text(&self) -> bool {
        if self.dark_mode {
            return true;
        }
        self.palette_selection()
            .and_then(|selection| selection.shade.numeric())
            .is_some_and(|shade| shade > LIGHT_TEXT_SHADE_THRESHOLD)
    }

    fn require_freeform(&self, action: &'static str) -> Result<()> {
        match self.mode {
            BackgroundMode::Freeform => Ok(()),
            BackgroundMode::Palette(_) => Err(SelectionError::RequiresFreeform { action }),
        }
    }

    fn require_palette(&self, action: &'static str) -> Result<&PaletteSelection> {
        self.palette_selection()
            .ok_or(SelectionError::RequiresPalette { action })
    }
}

fn find_scale<'a>(palette: &'a Palette, name: &str) -> Result<&'a ColorScale> {
    palette
        .scale(name.trim())
        .ok_or_else(|| SelectionError::UnknownScale {
            name: name.trim().to_string(),
        })
}

fn default_selection(palette: &Palette) -> Result<PaletteSelection> {
    if palette
        .scale(DEFAULT_PALETTE_SCALE)
        .is_some_and(|scale| scale.contains_shade(DEFAULT_PALETTE_SHADE))
    {
        return Ok(PaletteSelection {
            scale: DEFAULT_PALETTE_SCALE.to_string(),
            shade: ShadeKey::from(DEFAULT_PALETTE_SHADE),
        });
    }
    palette
        .scales()
        .iter()
        .find_map(|scale| {
            scale.first_shade().map(|shade| PaletteSelection {
                scale: scale.name().to_string(),
                shade: shade.clone(),
            })
        })
        .ok_or(SelectionError::EmptyPalette)
}
