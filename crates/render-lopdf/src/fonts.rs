use crate::writer::PdfObjectWriter;
use lopdf::{Dictionary, Object, Stream, dictionary};
use std::io::{Seek, Write};
use vitae_layout::{FontFace, FontSet};
use vitae_render_core::utils::{from_win_ansi, styled_font_name};
use vitae_style::FontDescriptor;

const FIRST_CHAR: u8 = 32;
const LAST_CHAR: u8 = 255;

/// Fonts referenced by the page content.
///
/// `Standard` uses the base-14 Helvetica family, which every viewer provides.
/// `Embedded` writes the caller's TrueType faces into the file so the output
/// matches what `ShapedFontMetrics` measured.
#[derive(Debug, Clone, Default)]
pub enum PdfFonts {
    #[default]
    Standard,
    Embedded(FontSet),
}

impl PdfFonts {
    /// Resource name used by `Tf` for the given descriptor.
    pub fn resource_name(&self, font: &FontDescriptor) -> &'static str {
        match self {
            PdfFonts::Standard if font.is_bold() => "F2",
            PdfFonts::Standard if font.style.is_slanted() => "F3",
            PdfFonts::Standard => "F1",
            PdfFonts::Embedded(set) if font.is_bold() && set.bold.is_some() => "F2",
            PdfFonts::Embedded(_) => "F1",
        }
    }

    /// Writes the font objects and returns the `/Font` resource dictionary.
    pub(crate) fn write_resources<W: Write + Seek>(
        &self,
        writer: &mut PdfObjectWriter<W>,
    ) -> Dictionary {
        let mut fonts = Dictionary::new();
        match self {
            PdfFonts::Standard => {
                for (name, descriptor) in [
                    ("F1", FontDescriptor::regular(10.0)),
                    ("F2", FontDescriptor::bold(10.0)),
                    ("F3", FontDescriptor::italic(10.0)),
                ] {
                    let font = dictionary! {
                        "Type" => "Font",
                        "Subtype" => "Type1",
                        "BaseFont" => styled_font_name(&descriptor),
                        "Encoding" => "WinAnsiEncoding",
                    };
                    fonts.set(name, Object::Dictionary(font));
                }
            }
            PdfFonts::Embedded(set) => {
                fonts.set("F1", embed_truetype(writer, &set.regular));
                if let Some(bold) = &set.bold {
                    fonts.set("F2", embed_truetype(writer, bold));
                }
            }
        }
        fonts
    }
}

fn embed_truetype<W: Write + Seek>(writer: &mut PdfObjectWriter<W>, face: &FontFace) -> Object {
    let data = face.data().to_vec();
    let file_id = writer.buffer_object(Object::Stream(Stream::new(
        dictionary! { "Length1" => data.len() as i64 },
        data,
    )));

    let per_mille = |units: i16| (units as f32 * 1000.0 / face.units_per_em as f32).round() as i64;
    let descriptor_id = writer.buffer_object(
        dictionary! {
            "Type" => "FontDescriptor",
            "FontName" => face.postscript_name.clone(),
            "Flags" => 32,
            "FontBBox" => face.bbox.iter().map(|v| Object::Integer(per_mille(*v))).collect::<Vec<_>>(),
            "ItalicAngle" => face.italic_angle,
            "Ascent" => per_mille(face.ascender),
            "Descent" => per_mille(face.descender),
            "CapHeight" => per_mille(face.cap_height),
            "StemV" => 80,
            "FontFile2" => file_id,
        }
        .into(),
    );

    let widths: Vec<Object> = (FIRST_CHAR..=LAST_CHAR)
        .map(|code| {
            let c = from_win_ansi(&[code]).chars().next().unwrap_or(' ');
            Object::Integer(face.advance_per_mille(c).unwrap_or(0.0).round() as i64)
        })
        .collect();

    log::debug!(
        "Embedding TrueType font '{}' ({} bytes)",
        face.postscript_name,
        face.data().len()
    );
    let font_id = writer.buffer_object(
        dictionary! {
            "Type" => "Font",
            "Subtype" => "TrueType",
            "BaseFont" => face.postscript_name.clone(),
            "FirstChar" => FIRST_CHAR as i64,
            "LastChar" => LAST_CHAR as i64,
            "Widths" => widths,
            "FontDescriptor" => descriptor_id,
            "Encoding" => "WinAnsiEncoding",
        }
        .into(),
    );
    Object::Reference(font_id)
}
