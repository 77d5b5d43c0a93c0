//! The text metrics provider interface.

use crate::text::wrapper::wrap_lines;
use vitae_style::FontDescriptor;
use vitae_types::Size;

/// Vertical gap inserted between consecutive wrapped lines.
pub const LINE_SPACING: f32 = 3.0;

/// One wrapped line of text and its measured box.
#[derive(Debug, Clone, PartialEq)]
pub struct LineBox {
    pub text: String,
    pub width: f32,
    pub height: f32,
}

/// Measures text for layout.
///
/// Implementations must be pure: identical inputs give identical outputs and
/// nothing is cached in a way that changes results. An empty string measures
/// as zero so that optional sections collapse without special cases.
pub trait TextMetrics: Send + Sync {
    /// Advance width of `text` laid out on a single line.
    fn line_width(&self, text: &str, font: &FontDescriptor) -> f32;

    /// Height of one line box, excluding [`LINE_SPACING`].
    fn line_height(&self, font: &FontDescriptor) -> f32;

    /// Distance from the top of a line box to its baseline.
    fn ascent(&self, font: &FontDescriptor) -> f32;

    /// Greedy word wrap of `text` into lines no wider than `max_width`.
    fn wrap(&self, text: &str, font: &FontDescriptor, max_width: f32) -> Vec<LineBox> {
        wrap_lines(self, text, font, max_width)
    }

    /// Wrapped bounding size of `text` within `max_width`.
    fn measure(&self, text: &str, font: &FontDescriptor, max_width: f32) -> Size {
        let lines = self.wrap(text, font, max_width);
        block_size(&lines)
    }

    /// Single-line bounding size, used for labels that are never wrapped.
    fn measure_line(&self, text: &str, font: &FontDescriptor) -> Size {
        if text.is_empty() {
            return Size::zero();
        }
        Size::new(self.line_width(text, font), self.line_height(font))
    }
}

/// Bounding size of an already wrapped block of lines.
pub fn block_size(lines: &[LineBox]) -> Size {
    if lines.is_empty() {
        return Size::zero();
    }
    let width = lines.iter().fold(0.0f32, |acc, l| acc.max(l.width));
    let height: f32 = lines.iter().map(|l| l.height).sum::<f32>()
        + LINE_SPACING * (lines.len() - 1) as f32;
    Size::new(width, height)
}
