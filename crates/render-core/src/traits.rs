use crate::error::RenderError;
use crate::types::TextRun;
use vitae_types::{Color, Point, Rect, Size};

/// Drawing primitives for one fixed-size page.
///
/// Coordinates use a top-left origin in points. A writer is owned by a single
/// render call; implementations are not expected to be shared across threads
/// while drawing.
pub trait PageWriter {
    fn page_size(&self) -> Size;

    fn draw_text(&mut self, run: &TextRun) -> Result<(), RenderError>;

    fn fill_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        color: &Color,
    ) -> Result<(), RenderError>;

    fn fill_circle(&mut self, center: Point, radius: f32, color: &Color)
    -> Result<(), RenderError>;

    /// Draws encoded image bytes (PNG/JPEG) clipped to a circle.
    fn draw_circular_image(
        &mut self,
        center: Point,
        radius: f32,
        image: &[u8],
    ) -> Result<(), RenderError>;

    fn stroke_line(
        &mut self,
        from: Point,
        to: Point,
        width: f32,
        color: &Color,
    ) -> Result<(), RenderError>;
}
