pub mod font;

pub use font::{FontDescriptor, FontStyle, FontWeight, DEFAULT_FONT_FAMILY};
