//! Caller-supplied font faces.
//!
//! The engine never discovers or installs fonts. A [`FontSet`] wraps font
//! binaries handed in by the caller so that [`ShapedFontMetrics`] can measure
//! with them and the PDF writer can embed them.
//!
//! [`ShapedFontMetrics`]: crate::ShapedFontMetrics

use crate::LayoutError;
use std::sync::Arc;
use vitae_style::FontDescriptor;

/// A parsed TrueType/OpenType face plus the metadata needed for PDF embedding.
#[derive(Clone)]
pub struct FontFace {
    data: Arc<Vec<u8>>,
    pub postscript_name: String,
    pub units_per_em: u16,
    pub ascender: i16,
    pub descender: i16,
    pub line_gap: i16,
    pub cap_height: i16,
    pub italic_angle: f32,
    /// `[x_min, y_min, x_max, y_max]` in font units.
    pub bbox: [i16; 4],
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("postscript_name", &self.postscript_name)
            .field("data_len", &self.data.len())
            .finish()
    }
}

impl FontFace {
    /// Parses font bytes, rejecting anything ttf-parser or rustybuzz cannot read.
    pub fn parse(data: Vec<u8>) -> Result<Self, LayoutError> {
        let face = ttf_parser::Face::parse(&data, 0)
            .map_err(|e| LayoutError::InvalidFont(e.to_string()))?;

        let postscript_name = extract_postscript_name(&face)
            .ok_or_else(|| LayoutError::InvalidFont("font has no usable name".to_string()))?;
        let bbox = face.global_bounding_box();

        let parsed = Self {
            postscript_name,
            units_per_em: face.units_per_em(),
            ascender: face.ascender(),
            descender: face.descender(),
            line_gap: face.line_gap(),
            cap_height: face.capital_height().unwrap_or_else(|| face.ascender()),
            italic_angle: face.italic_angle(),
            bbox: [bbox.x_min, bbox.y_min, bbox.x_max, bbox.y_max],
            data: Arc::new(Vec::new()),
        };
        drop(face);

        if rustybuzz::Face::from_slice(&data, 0).is_none() {
            return Err(LayoutError::UnshapeableFont(parsed.postscript_name));
        }
        log::debug!(
            "Parsed font '{}' ({} bytes, {} units/em)",
            parsed.postscript_name,
            data.len(),
            parsed.units_per_em
        );
        Ok(Self {
            data: Arc::new(data),
            ..parsed
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Creates a lightweight shaping view over the font data.
    pub fn as_face(&self) -> Option<rustybuzz::Face<'_>> {
        rustybuzz::Face::from_slice(&self.data, 0)
    }

    /// Converts a value in font units to points at `size`.
    pub fn scale(&self, units: f32, size: f32) -> f32 {
        units * size / self.units_per_em as f32
    }

    /// Horizontal advance of `c` in 1/1000 em, as PDF `Widths` arrays expect.
    pub fn advance_per_mille(&self, c: char) -> Option<f32> {
        let face = ttf_parser::Face::parse(&self.data, 0).ok()?;
        let glyph = face.glyph_index(c)?;
        let advance = face.glyph_hor_advance(glyph)?;
        Some(advance as f32 * 1000.0 / self.units_per_em as f32)
    }
}

/// Regular face plus an optional bold face; bold text falls back to regular.
#[derive(Debug, Clone)]
pub struct FontSet {
    pub regular: FontFace,
    pub bold: Option<FontFace>,
}

impl FontSet {
    pub fn new(regular: FontFace) -> Self {
        Self {
            regular,
            bold: None,
        }
    }

    pub fn from_bytes(regular: Vec<u8>, bold: Option<Vec<u8>>) -> Result<Self, LayoutError> {
        Ok(Self {
            regular: FontFace::parse(regular)?,
            bold: bold.map(FontFace::parse).transpose()?,
        })
    }

    pub fn face_for(&self, font: &FontDescriptor) -> &FontFace {
        match (&self.bold, font.is_bold()) {
            (Some(bold), true) => bold,
            _ => &self.regular,
        }
    }
}

/// Extracts the PostScript name, falling back to the full and family names.
fn extract_postscript_name(face: &ttf_parser::Face<'_>) -> Option<String> {
    let lookup = |id: u16| {
        face.names()
            .into_iter()
            .find(|n| n.name_id == id)
            .and_then(|n| n.to_string())
    };

    lookup(ttf_parser::name_id::POST_SCRIPT_NAME)
        .or_else(|| lookup(ttf_parser::name_id::FULL_NAME))
        .or_else(|| lookup(ttf_parser::name_id::FAMILY))
        .map(|name| name.replace(' ', ""))
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_garbage_bytes() {
        let err = FontFace::parse(vec![0, 1, 2, 3]).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidFont(_)));
    }

    #[test]
    fn font_set_propagates_bold_parse_errors() {
        assert!(FontSet::from_bytes(vec![0; 8], Some(vec![1; 8])).is_err());
    }
}
