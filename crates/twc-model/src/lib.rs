//! Shared types for the Tailwind contrast grid.

pub mod color;
pub mod error;
pub mod palette;
pub mod score;

pub use color::HexColor;
pub use error::{PaletteError, Result};
pub use palette::{ColorScale, Palette, ShadeEntry, ShadeKey};
pub use score::{Grade, Score};
