use crate::fonts::{FontFace, FontSet};
use crate::metrics::TextMetrics;
use rustybuzz::{Feature, UnicodeBuffer};
use std::cell::RefCell;
use ttf_parser::Tag;
use vitae_style::FontDescriptor;

// Reuse buffer to avoid allocations in the tight loop
thread_local! {
    static SCRATCH_BUFFER: RefCell<Option<UnicodeBuffer>> = RefCell::new(Some(UnicodeBuffer::new()));
}

fn features() -> &'static [Feature] {
    static FEATURES: std::sync::OnceLock<Vec<Feature>> = std::sync::OnceLock::new();
    FEATURES.get_or_init(|| {
        vec![
            Feature::new(Tag::from_bytes(b"liga"), 1, ..),
            Feature::new(Tag::from_bytes(b"kern"), 1, ..),
        ]
    })
}

/// Text metrics backed by HarfBuzz-style shaping of caller-supplied fonts.
///
/// Widths include kerning and ligatures, so they match what the embedded
/// font draws. Bold descriptors use the bold face when the set has one.
#[derive(Debug, Clone)]
pub struct ShapedFontMetrics {
    fonts: FontSet,
}

impl ShapedFontMetrics {
    pub fn new(fonts: FontSet) -> Self {
        Self { fonts }
    }

    fn shape_width(face: &FontFace, text: &str, size: f32) -> f32 {
        let Some(shaping_face) = face.as_face() else {
            // FontFace::parse already proved the bytes shape; stay total anyway.
            return 0.0;
        };

        let mut buffer =
            SCRATCH_BUFFER.with(|b| b.borrow_mut().take().unwrap_or_else(UnicodeBuffer::new));
        buffer.push_str(text);
        buffer.guess_segment_properties();

        let glyph_buffer = rustybuzz::shape(&shaping_face, features(), buffer);
        let advance: i64 = glyph_buffer
            .glyph_positions()
            .iter()
            .map(|p| p.x_advance as i64)
            .sum();

        let recycled_buffer = glyph_buffer.clear();
        SCRATCH_BUFFER.with(|b| *b.borrow_mut() = Some(recycled_buffer));

        face.scale(advance as f32, size)
    }
}

impl TextMetrics for ShapedFontMetrics {
    fn line_width(&self, text: &str, font: &FontDescriptor) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        Self::shape_width(self.fonts.face_for(font), text, font.size)
    }

    fn line_height(&self, font: &FontDescriptor) -> f32 {
        let face = self.fonts.face_for(font);
        let units = face.ascender as f32 - face.descender as f32 + face.line_gap as f32;
        face.scale(units, font.size)
    }

    fn ascent(&self, font: &FontDescriptor) -> f32 {
        let face = self.fonts.face_for(font);
        face.scale(face.ascender as f32 + face.line_gap as f32 / 2.0, font.size)
    }
}
