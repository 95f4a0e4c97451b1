//! CSV palette loading.
//!
//! A palette file has a header row and three columns:
//!
//! ```text
//! scale,shade,color
//! slate,50,#f8fafc
//! slate,100,rgb(241 245 249)
//! ```
//!
//! Rows of the same scale do not have to be contiguous; scales keep the order
//! of their first row. Lines starting with `#` are comments. Colour values are
//! kept verbatim; unparseable ones are dropped later, at render time.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::{debug, info};

use twc_model::Palette;

use crate::embedded::{TAILWIND_V3, TAILWIND_V3_ORIGIN};
use crate::error::{PaletteSourceError, Result};

#[derive(Debug, Deserialize)]
struct PaletteRow {
    scale: String,
    shade: String,
    color: String,
}

/// Loads the embedded Tailwind CSS v3 palette.
pub fn load_default_palette() -> Result<Palette> {
    load_palette_from_reader(TAILWIND_V3.as_bytes(), TAILWIND_V3_ORIGIN)
}

/// Loads a palette from a CSV file on disk.
pub fn load_palette_file(path: &Path) -> Result<Palette> {
    let file = File::open(path).map_err(|source| PaletteSourceError::io(path, source))?;
    let palette = load_palette_from_reader(file, &path.display().to_string())?;
    info!(
        path = %path.display(),
        scales = palette.len(),
        entries = palette.entry_count(),
        "loaded palette file"
    );
    Ok(palette)
}

/// Parses palette CSV from any reader. `origin` names the source in errors.
pub fn load_palette_from_reader<R: Read>(reader: R, origin: &str) -> Result<Palette> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);
    let headers = reader
        .headers()
        .map_err(|source| PaletteSourceError::csv(origin, source))?
        .clone();

    let mut palette = Palette::new();
    for record in reader.records() {
        let record = record.map_err(|source| PaletteSourceError::csv(origin, source))?;
        let line = record.position().map_or(0, csv::Position::line);
        let row: PaletteRow = record
            .deserialize(Some(&headers))
            .map_err(|source| PaletteSourceError::csv(origin, source))?;
        palette
            .insert(&row.scale, row.shade, row.color)
            .map_err(|source| PaletteSourceError::Invalid {
                origin: origin.to_string(),
                line,
                source,
            })?;
    }

    if palette.is_empty() {
        return Err(PaletteSourceError::Empty {
            origin: origin.to_string(),
        });
    }
    debug!(
        origin,
        scales = palette.len(),
        entries = palette.entry_count(),
        "parsed palette"
    );
    Ok(palette)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_whitespace_are_ignored() {
        let csv = "scale,shade,color\n# brand colours\n brand , 500 , #ff0066 \n";
        let palette = load_palette_from_reader(csv.as_bytes(), "test").unwrap();
        assert_eq!(palette.raw("brand", "500"), Some("#ff0066"));
    }

    #[test]
    fn quoted_functional_colours_survive() {
        let csv = "scale,shade,color\nbrand,500,\"rgb(255, 0, 102)\"\n";
        let palette = load_palette_from_reader(csv.as_bytes(), "test").unwrap();
        assert_eq!(palette.raw("brand", "500"), Some("rgb(255, 0, 102)"));
    }
}
