use crate::theme::Theme;
use vitae_layout::{TextMetrics, truncate};
use vitae_render_core::{PageWriter, RenderError, TextRun};
use vitae_style::FontDescriptor;
use vitae_types::{Color, Point};

/// Everything a section needs to draw: the page, the measurer and the theme.
///
/// Built once per render and passed down explicitly.
pub struct RenderContext<'a> {
    pub writer: &'a mut dyn PageWriter,
    pub metrics: &'a dyn TextMetrics,
    pub theme: &'a Theme,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        writer: &'a mut dyn PageWriter,
        metrics: &'a dyn TextMetrics,
        theme: &'a Theme,
    ) -> Self {
        Self {
            writer,
            metrics,
            theme,
        }
    }

    /// Measures `text` as a single line with its top-left corner at `origin`.
    pub fn text_run(
        &self,
        text: impl Into<String>,
        origin: Point,
        font: &FontDescriptor,
        color: &Color,
    ) -> TextRun {
        let text = text.into();
        TextRun {
            width: self.metrics.line_width(&text, font),
            height: self.metrics.line_height(font),
            ascent: self.metrics.ascent(font),
            text,
            origin,
            font: font.clone(),
            color: color.clone(),
        }
    }

    /// Shortens `text` so it fits on one line of `max_width`.
    pub fn fit(&self, text: &str, font: &FontDescriptor, max_width: f32) -> String {
        truncate(self.metrics, text, font, max_width)
    }

    pub fn draw(&mut self, run: &TextRun) -> Result<(), RenderError> {
        self.writer.draw_text(run)
    }
}
