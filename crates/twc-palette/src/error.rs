use std::path::PathBuf;

use twc_model::PaletteError;

#[derive(Debug, thiserror::Error)]
pub enum PaletteSourceError {
    #[error("failed to read palette file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse palette CSV {origin}: {source}")]
    Csv {
        origin: String,
        #[source]
        source: csv::Error,
    },

    #[error("invalid palette {origin} (line {line}): {source}")]
    Invalid {
        origin: String,
        line: u64,
        #[source]
        source: PaletteError,
    },

    #[error("palette {origin} contains no colours")]
    Empty { origin: String },
}

impl PaletteSourceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(origin: &str, source: csv::Error) -> Self {
        Self::Csv {
            origin: origin.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PaletteSourceError>;
