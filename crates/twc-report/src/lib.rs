//! Contrast grid rendering.
//!
//! - **Table**: coloured terminal table (comfy-table)
//! - **JSON**: the grid model, for scripting
//! - **HTML**: a standalone page equivalent to the grid view

mod common;
mod html;
mod json;
mod table;

pub use common::{ABOUT, PAGE_TITLE, background_summary, score_label};
pub use html::write_grid_html;
pub use json::{grid_json, write_grid_json};
pub use table::{apply_table_style, grid_table, pair_table, palette_table, shade_table};
