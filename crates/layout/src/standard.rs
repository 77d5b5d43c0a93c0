//! Metrics for the PDF standard Helvetica faces.
//!
//! The advance widths come from the Adobe Font Metrics shipped with the base-14
//! fonts, in 1/1000 em. Using them means measurement needs no font files and
//! agrees with what a viewer draws for a `Type1` `Helvetica` reference.

use crate::metrics::TextMetrics;
use vitae_style::FontDescriptor;

/// Widths for code points 32..=126.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Ascender and descender of Helvetica, in 1/1000 em.
const ASCENDER: f32 = 718.0;
const DESCENDER: f32 = 207.0;

/// Line box height as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Built-in metrics for Helvetica and Helvetica-Bold (oblique faces share widths).
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFontMetrics;

impl StandardFontMetrics {
    pub fn new() -> Self {
        Self
    }

    fn char_width(c: char, bold: bool) -> u16 {
        let code = c as u32;
        if (32..=126).contains(&code) {
            let table = if bold { &HELVETICA_BOLD } else { &HELVETICA };
            return table[(code - 32) as usize];
        }
        match c {
            '\u{2026}' | '\u{2014}' | '\u{2030}' => 1000,
            '\u{2022}' => 350,
            '\u{2013}' => 556,
            '\u{00B7}' => 278,
            '\u{2018}' | '\u{2019}' => {
                if bold {
                    278
                } else {
                    222
                }
            }
            '\u{201C}' | '\u{201D}' => {
                if bold {
                    500
                } else {
                    333
                }
            }
            '\u{00A0}' => 278,
            // Accented Latin-1 letters are close enough to the lowercase average.
            _ => {
                if bold {
                    611
                } else {
                    556
                }
            }
        }
    }
}

impl TextMetrics for StandardFontMetrics {
    fn line_width(&self, text: &str, font: &FontDescriptor) -> f32 {
        let bold = font.is_bold();
        let units: u32 = text
            .chars()
            .filter(|c| !c.is_control())
            .map(|c| Self::char_width(c, bold) as u32)
            .sum();
        units as f32 * font.size / 1000.0
    }

    fn line_height(&self, font: &FontDescriptor) -> f32 {
        font.size * LINE_HEIGHT_FACTOR
    }

    fn ascent(&self, font: &FontDescriptor) -> f32 {
        let half_leading = (LINE_HEIGHT_FACTOR * 1000.0 - ASCENDER - DESCENDER) / 2.0;
        (half_leading + ASCENDER) * font.size / 1000.0
    }
}
