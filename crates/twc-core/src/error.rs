use thiserror::Error;

/// A transition that cannot be applied to the current selection state.
///
/// The state is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("{action} is only available with a freeform background")]
    RequiresFreeform { action: &'static str },
    #[error("{action} is only available with a palette background")]
    RequiresPalette { action: &'static str },
    #[error("unknown colour scale: {name}")]
    UnknownScale { name: String },
    #[error("scale {scale} has no shade {shade}")]
    UnknownShade { scale: String, shade: String },
    #[error("palette has no colours to choose from")]
    EmptyPalette,
}

pub type Result<T> = std::result::Result<T, SelectionError>;
