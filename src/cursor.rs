use crate::context::RenderContext;
use vitae_layout::{ELLIPSIS, LINE_SPACING, LineBox, truncate};
use vitae_render_core::{RenderError, TextRun};
use vitae_style::FontDescriptor;
use vitae_types::{Color, Point, Rect};

/// Vertical advance taken by a section title, independent of its font size.
pub const SECTION_TITLE_ADVANCE: f32 = 18.0;
/// Space left below a wrapped text block.
pub const WRAPPED_TEXT_GAP: f32 = 5.0;

/// Write head for one column.
///
/// `y` only moves down. Every element drawn through the cursor is recorded so
/// callers can inspect the column afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutCursor {
    x: f32,
    y: f32,
    width: f32,
    placed: Vec<Rect>,
}

impl LayoutCursor {
    pub fn new(x: f32, y: f32, width: f32) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            placed: Vec::new(),
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Bounding boxes of everything drawn so far, in drawing order.
    pub fn placed(&self) -> &[Rect] {
        &self.placed
    }

    pub fn into_placed(self) -> Vec<Rect> {
        self.placed
    }

    /// Moves down by `height`; negative heights are ignored.
    pub fn advance_by(&mut self, height: f32) -> f32 {
        if height > 0.0 {
            self.y += height;
        }
        self.y
    }

    /// Records `rect` and moves below it, plus `gap`.
    pub fn commit(&mut self, rect: Rect, gap: f32) -> f32 {
        self.placed.push(rect);
        let bottom = rect.bottom().max(self.y);
        self.advance_by(bottom - self.y + gap)
    }

    /// Draws a bold title and advances by [`SECTION_TITLE_ADVANCE`], or by the
    /// title's line height when a theme's title font is taller than that.
    pub fn draw_section_title(
        &mut self,
        ctx: &mut RenderContext<'_>,
        title: &str,
    ) -> Result<f32, RenderError> {
        let font = ctx.theme.bold(ctx.theme.section_title_size);
        let text = ctx.fit(title, &font, self.width);
        let run = ctx.text_run(text, self.position(), &font, &ctx.theme.accent_color);
        ctx.draw(&run)?;
        self.placed.push(run.bounds());
        Ok(self.advance_by(SECTION_TITLE_ADVANCE.max(run.height)))
    }

    /// Draws one truncated line and moves below it.
    pub fn draw_line(
        &mut self,
        ctx: &mut RenderContext<'_>,
        text: &str,
        font: &FontDescriptor,
        color: &Color,
    ) -> Result<f32, RenderError> {
        if text.trim().is_empty() {
            return Ok(self.y);
        }
        let text = ctx.fit(text.trim(), font, self.width);
        let run = ctx.text_run(text, self.position(), font, color);
        ctx.draw(&run)?;
        Ok(self.commit(run.bounds(), LINE_SPACING))
    }

    pub fn draw_wrapped_text(
        &mut self,
        ctx: &mut RenderContext<'_>,
        text: &str,
        font: &FontDescriptor,
        color: &Color,
    ) -> Result<f32, RenderError> {
        self.draw_wrapped_text_limited(ctx, text, font, color, usize::MAX)
    }

    /// Wraps `text` to the column width, keeping at most `max_lines` lines.
    ///
    /// When lines are dropped the last kept line is truncated with an
    /// ellipsis. Empty text draws nothing and does not move the cursor.
    pub fn draw_wrapped_text_limited(
        &mut self,
        ctx: &mut RenderContext<'_>,
        text: &str,
        font: &FontDescriptor,
        color: &Color,
        max_lines: usize,
    ) -> Result<f32, RenderError> {
        let mut lines = ctx.metrics.wrap(text, font, self.width);
        if lines.is_empty() {
            return Ok(self.y);
        }
        clamp_lines(ctx, &mut lines, font, self.width, max_lines.max(1));

        let ascent = ctx.metrics.ascent(font);
        let top = self.y;
        let mut line_y = top;
        let mut block_width = 0.0f32;
        for line in &lines {
            let run = TextRun {
                text: line.text.clone(),
                origin: Point::new(self.x, line_y),
                ascent,
                width: line.width,
                height: line.height,
                font: font.clone(),
                color: color.clone(),
            };
            ctx.draw(&run)?;
            block_width = block_width.max(line.width);
            line_y += line.height + LINE_SPACING;
        }

        let block_height = line_y - LINE_SPACING - top;
        log::debug!(
            "wrapped block of {} lines, height {:.1} at y {:.1}",
            lines.len(),
            block_height,
            top
        );
        Ok(self.commit(
            Rect::new(self.x, top, block_width, block_height),
            WRAPPED_TEXT_GAP,
        ))
    }
}

/// Drops lines past `max_lines`, folding the remainder into an ellipsized last line.
fn clamp_lines(
    ctx: &RenderContext<'_>,
    lines: &mut Vec<LineBox>,
    font: &FontDescriptor,
    width: f32,
    max_lines: usize,
) {
    if lines.len() <= max_lines {
        return;
    }
    let next = lines[max_lines].text.clone();
    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        let joined = format!("{} {}{}", last.text, next, ELLIPSIS);
        let text = truncate(ctx.metrics, &joined, font, width);
        last.width = ctx.metrics.line_width(&text, font);
        last.text = text;
    }
}
