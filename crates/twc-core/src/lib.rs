//! Selection state and contrast grid derivation.
//!
//! The flow is one-way:
//!
//! ```text
//! Palette ──► normalize ──► score (against SelectionState's background) ──► ContrastGrid
//! ```

pub mod defaults;
pub mod error;
pub mod grid;
pub mod selection;

pub use error::SelectionError;
pub use grid::{ContrastGrid, GridCell, GridSection, build_grid, scale_swatch};
pub use selection::{BackgroundMode, PaletteSelection, SelectionState};
