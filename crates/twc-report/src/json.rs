use std::io::Write;

use anyhow::{Context, Result};
use serde_json::Value;

use twc_core::ContrastGrid;

/// The grid as a JSON value.
///
/// Ratios are the exact `f64` values; only the table and HTML renderers round
/// them to two decimals for display.
pub fn grid_json(grid: &ContrastGrid) -> Result<Value> {
    serde_json::to_value(grid).context("serialize contrast grid")
}

/// Writes the grid as pretty-printed JSON followed by a newline.
pub fn write_grid_json<W: Write>(grid: &ContrastGrid, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, grid).context("write contrast grid json")?;
    writeln!(writer)?;
    Ok(())
}
