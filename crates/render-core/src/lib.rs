//! Core rendering abstractions for single-page output.
//!
//! This crate provides the seam between layout and output backends:
//! - `PageWriter` trait with the drawing primitives section renderers use
//! - `DisplayList`, a recording writer used for measurement and tests
//! - Error types for rendering operations
//! - Shared utility functions for font naming, text encoding and coordinates

mod display_list;
mod error;
mod traits;
mod types;
pub mod utils;

pub use display_list::{DisplayList, DrawCommand};
pub use error::RenderError;
pub use traits::PageWriter;
pub use types::TextRun;
