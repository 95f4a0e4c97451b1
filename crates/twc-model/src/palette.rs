//! Palette structure: ordered colour scales, each an ordered list of shades.
//!
//! Raw colour strings are stored exactly as supplied by the palette source.
//! They are not validated here; unparseable values are dropped later by the
//! normalizer when the grid is built.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};

/// Key of a shade within a scale (`"50"`, `"500"`, `"DEFAULT"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShadeKey(String);

impl ShadeKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric tier of the key, when it is one (`"500"` -> `Some(500)`).
    pub fn numeric(&self) -> Option<u32> {
        self.0.parse().ok()
    }
}

impl fmt::Display for ShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u32> for ShadeKey {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for ShadeKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ShadeKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// One shade of a scale with its raw colour string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadeEntry {
    pub shade: ShadeKey,
    pub raw: String,
}

/// A named colour scale such as `slate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScale {
    name: String,
    shades: Vec<ShadeEntry>,
}

impl ColorScale {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(PaletteError::EmptyScaleName);
        }
        Ok(Self {
            name,
            shades: Vec::new(),
        })
    }

    /// Appends a shade, rejecting empty and duplicate keys.
    pub fn push_shade(&mut self, shade: impl Into<ShadeKey>, raw: impl Into<String>) -> Result<()> {
        let shade = shade.into();
        if shade.as_str().is_empty() {
            return Err(PaletteError::EmptyShadeKey {
                scale: self.name.clone(),
            });
        }
        if self.contains_shade(shade.as_str()) {
            return Err(PaletteError::DuplicateShade {
                scale: self.name.clone(),
                shade: shade.to_string(),
            });
        }
        self.shades.push(ShadeEntry {
            shade,
            raw: raw.into(),
        });
        Ok(())
    }

    pub fn with_shade(mut self, shade: impl Into<ShadeKey>, raw: impl Into<String>) -> Result<Self> {
        self.push_shade(shade, raw)?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shades(&self) -> &[ShadeEntry] {
        &self.shades
    }

    pub fn len(&self) -> usize {
        self.shades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }

    /// Raw colour string for a shade key.
    pub fn raw(&self, shade: &str) -> Option<&str> {
        self.shades
            .iter()
            .find(|entry| entry.shade.as_str() == shade)
            .map(|entry| entry.raw.as_str())
    }

    pub fn contains_shade(&self, shade: &str) -> bool {
        self.raw(shade).is_some()
    }

    pub fn first_shade(&self) -> Option<&ShadeKey> {
        self.shades.first().map(|entry| &entry.shade)
    }
}

/// Ordered mapping of scale name to shades. Immutable once handed to the
/// rest of the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    scales: Vec<ColorScale>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a complete scale.
    pub fn push_scale(&mut self, scale: ColorScale) -> Result<()> {
        if self.scale(scale.name()).is_some() {
            return Err(PaletteError::DuplicateScale {
                name: scale.name().to_string(),
            });
        }
        self.scales.push(scale);
        Ok(())
    }

    /// Adds one `(scale, shade, raw)` row, creating the scale on first sight.
    ///
    /// Scales keep the order in which they are first seen.
    pub fn insert(
        &mut self,
        scale: &str,
        shade: impl Into<ShadeKey>,
        raw: impl Into<String>,
    ) -> Result<()> {
        let name = scale.trim();
        let index = match self.scales.iter().position(|s| s.name() == name) {
            Some(index) => index,
            None => {
                self.scales.push(ColorScale::new(name)?);
                self.scales.len() - 1
            }
        };
        self.scales[index].push_shade(shade, raw)
    }

    pub fn scales(&self) -> &[ColorScale] {
        &self.scales
    }

    pub fn scale(&self, name: &str) -> Option<&ColorScale> {
        self.scales.iter().find(|scale| scale.name() == name)
    }

    pub fn raw(&self, scale: &str, shade: &str) -> Option<&str> {
        self.scale(scale).and_then(|s| s.raw(shade))
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    /// Number of `(scale, shade)` entries across the palette.
    pub fn entry_count(&self) -> usize {
        self.scales.iter().map(ColorScale::len).sum()
    }

    /// Every shade key used by any scale, in first-seen order.
    pub fn shade_keys(&self) -> Vec<ShadeKey> {
        let mut keys: Vec<ShadeKey> = Vec::new();
        for scale in &self.scales {
            for entry in scale.shades() {
                if !keys.contains(&entry.shade) {
                    keys.push(entry.shade.clone());
                }
            }
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shade_key_numeric_view() {
        assert_eq!(ShadeKey::from(500u32).numeric(), Some(500));
        assert_eq!(ShadeKey::new(" 950 ").as_str(), "950");
        assert_eq!(ShadeKey::new("DEFAULT").numeric(), None);
    }

    #[test]
    fn insert_keeps_first_seen_order() {
        let mut palette = Palette::new();
        palette.insert("zinc", "50", "#fafafa").unwrap();
        palette.insert("slate", "50", "#f8fafc").unwrap();
        palette.insert("zinc", "100", "#f4f4f5").unwrap();

        let names: Vec<&str> = palette.scales().iter().map(ColorScale::name).collect();
        assert_eq!(names, ["zinc", "slate"]);
        assert_eq!(palette.raw("zinc", "100"), Some("#f4f4f5"));
        assert_eq!(palette.entry_count(), 3);
    }

    #[test]
    fn empty_shade_key_is_rejected() {
        let mut scale = ColorScale::new("red").unwrap();
        let err = scale.push_shade("  ", "#fff").unwrap_err();
        assert_eq!(
            err,
            PaletteError::EmptyShadeKey {
                scale: "red".to_string()
            }
        );
    }
}
