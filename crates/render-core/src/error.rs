use thiserror::Error;
use vitae_layout::LayoutError;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("Text layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("Image could not be decoded: {0}")]
    Image(String),
    #[error("Page canvas is unusable: {0}")]
    InvalidCanvas(String),
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}
