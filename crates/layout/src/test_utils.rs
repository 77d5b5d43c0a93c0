use crate::metrics::TextMetrics;
use vitae_style::FontDescriptor;

/// Every character advances by the same amount, which keeps expected
/// line breaks easy to compute by hand.
pub struct MonospaceMetrics {
    pub advance: f32,
    pub line_height: f32,
}

impl MonospaceMetrics {
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl TextMetrics for MonospaceMetrics {
    fn line_width(&self, text: &str, _font: &FontDescriptor) -> f32 {
        text.chars().count() as f32 * self.advance
    }

    fn line_height(&self, _font: &FontDescriptor) -> f32 {
        self.line_height
    }

    fn ascent(&self, _font: &FontDescriptor) -> f32 {
        self.line_height * 0.8
    }
}

/// A deterministic filler paragraph of exactly `len` characters.
pub fn filler_text(len: usize) -> String {
    let words = ["layout", "engine", "wraps", "text", "across", "narrow", "columns"];
    let mut out = String::new();
    let mut i = 0;
    while out.len() < len {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(words[i % words.len()]);
        i += 1;
    }
    out.truncate(len);
    out
}
