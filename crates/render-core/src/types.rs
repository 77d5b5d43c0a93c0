use vitae_style::FontDescriptor;
use vitae_types::{Color, Point, Rect};

/// A single line of text positioned on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Top-left corner of the line box.
    pub origin: Point,
    /// Distance from the top of the line box to the baseline.
    pub ascent: f32,
    pub width: f32,
    pub height: f32,
    pub font: FontDescriptor,
    pub color: Color,
}

impl TextRun {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.origin.x, self.origin.y, self.width, self.height)
    }

    pub fn baseline(&self) -> f32 {
        self.origin.y + self.ascent
    }
}
