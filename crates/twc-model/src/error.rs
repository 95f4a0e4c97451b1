use thiserror::Error;

/// Errors raised while assembling a [`crate::Palette`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("colour scale name must not be empty")]
    EmptyScaleName,
    #[error("shade key must not be empty (scale {scale})")]
    EmptyShadeKey { scale: String },
    #[error("duplicate colour scale: {name}")]
    DuplicateScale { name: String },
    #[error("duplicate shade {shade} in scale {scale}")]
    DuplicateShade { scale: String, shade: String },
}

pub type Result<T> = std::result::Result<T, PaletteError>;
