#![deny(unsafe_code)]

//! Palette source for the contrast grid.

pub mod embedded;
pub mod error;
pub mod loader;

pub use crate::error::PaletteSourceError;
pub use crate::loader::{load_default_palette, load_palette_file, load_palette_from_reader};
