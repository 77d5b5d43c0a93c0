//! PDF output for a single composed page using lopdf.
//!
//! [`LopdfPageWriter`] implements the drawing primitives from
//! `vitae-render-core` as PDF content-stream operators and serializes the
//! finished page with a deterministic object writer: no timestamps, sorted
//! dictionary keys, objects in id order. The same drawing calls always
//! produce the same bytes.

mod fonts;
mod page;
mod paths;
mod writer;

pub use fonts::PdfFonts;
pub use page::LopdfPageWriter;
pub use writer::PdfObjectWriter;
