use crate::record::RecordError;
use crate::theme::ConfigError;
use std::path::PathBuf;
use thiserror::Error;
use vitae_layout::LayoutError;
use vitae_render_core::RenderError;

/// Failure of one export call. No partial output accompanies any variant.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Rendering failed: {0}")]
    RenderingFailed(#[from] RenderError),

    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid theme: {0}")]
    InvalidTheme(#[from] ConfigError),

    #[error("Could not save PDF to '{}': {source}", path.display())]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<LayoutError> for ExportError {
    fn from(e: LayoutError) -> Self {
        ExportError::RenderingFailed(RenderError::Layout(e))
    }
}

/// A comprehensive error type for loading a record and producing a PDF.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Record could not be loaded: {0}")]
    Record(#[from] RecordError),

    #[error("Configuration is invalid: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
