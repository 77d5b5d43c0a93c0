//! Measurement and placement primitives for the single-page CV layout.
//!
//! Everything in this crate is pure: given the same text, font and width the
//! same lines, truncations and chip rows come out. Drawing lives in the
//! render crates; this crate only answers "how big" and "where".

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid font data: {0}")]
    InvalidFont(String),
    #[error("Font '{0}' cannot be shaped")]
    UnshapeableFont(String),
}

pub mod chips;
pub mod fonts;
pub mod metrics;
pub mod standard;
pub mod text;
pub mod truncate;

pub use self::chips::{ChipPacker, ChipRow, PackedChip};
pub use self::fonts::{FontFace, FontSet};
pub use self::metrics::{LINE_SPACING, LineBox, TextMetrics};
pub use self::standard::StandardFontMetrics;
pub use self::text::shaper::ShapedFontMetrics;
pub use self::text::wrapper::wrap_lines;
pub use self::truncate::{ELLIPSIS, truncate};

pub use vitae_style::FontDescriptor;
pub use vitae_types::geometry::{Rect, Size};

#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod text_test;
