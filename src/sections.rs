//! Section content strategies.
//!
//! Each body section is a title plus one [`SectionContent`] implementation.
//! The composer keeps an ordered list of sections per column and asks each
//! one whether it has anything to draw.

use crate::context::RenderContext;
use crate::cursor::LayoutCursor;
use crate::model::{PersonalFacet, SkillChip, TimelineEntry, sorted_by_order};
use vitae_layout::{ChipPacker, LINE_SPACING};
use vitae_render_core::RenderError;
use vitae_types::{Point, Rect};

/// Drawable body of a section.
pub trait SectionContent {
    /// False when the section should be skipped entirely, title included.
    fn is_present(&self) -> bool;

    /// Draws the content below the title, advancing `cursor`.
    fn draw(
        &self,
        ctx: &mut RenderContext<'_>,
        cursor: &mut LayoutCursor,
    ) -> Result<(), RenderError>;
}

/// A titled block in one column.
pub struct Section<'d> {
    pub title: String,
    pub content: Box<dyn SectionContent + 'd>,
}

impl<'d> Section<'d> {
    pub fn new(title: impl Into<String>, content: impl SectionContent + 'd) -> Self {
        Self {
            title: title.into(),
            content: Box::new(content),
        }
    }
}

/// Draws `title` and `content` if the content is present; returns the new cursor y.
pub fn render_section(
    ctx: &mut RenderContext<'_>,
    title: &str,
    content: &dyn SectionContent,
    cursor: &mut LayoutCursor,
) -> Result<f32, RenderError> {
    if !content.is_present() {
        log::debug!("skipping empty section '{}'", title);
        return Ok(cursor.y());
    }
    cursor.draw_section_title(ctx, title)?;
    content.draw(ctx, cursor)?;
    Ok(cursor.advance_by(ctx.theme.section_gap))
}

/// A paragraph of body text, wrapped and capped at `max_lines`.
pub struct FreeText<'a> {
    pub text: &'a str,
    pub max_lines: usize,
}

impl SectionContent for FreeText<'_> {
    fn is_present(&self) -> bool {
        !self.text.trim().is_empty()
    }

    fn draw(
        &self,
        ctx: &mut RenderContext<'_>,
        cursor: &mut LayoutCursor,
    ) -> Result<(), RenderError> {
        let font = ctx.theme.regular(ctx.theme.body_size);
        let color = ctx.theme.text_color.clone();
        cursor.draw_wrapped_text_limited(ctx, self.text.trim(), &font, &color, self.max_lines)?;
        Ok(())
    }
}

/// Experience or education entries, drawn in `sort_order`.
pub struct EntryList<'a> {
    entries: Vec<&'a TimelineEntry>,
}

impl<'a> EntryList<'a> {
    pub fn new(entries: &'a [TimelineEntry]) -> Self {
        Self {
            entries: sorted_by_order(entries, |e| e.sort_order),
        }
    }

    /// Bold title on the left and the date range right-aligned on the same baseline.
    ///
    /// No room is reserved for the date: a long title may run underneath it.
    fn draw_heading(
        ctx: &mut RenderContext<'_>,
        cursor: &mut LayoutCursor,
        entry: &TimelineEntry,
    ) -> Result<(), RenderError> {
        let theme = ctx.theme;
        let title_font = theme.bold(theme.entry_title_size);
        let date_font = theme.regular(theme.detail_size);
        let (title, date) = (entry.title.trim(), entry.date_range.trim());
        if title.is_empty() && date.is_empty() {
            return Ok(());
        }

        let top = cursor.y();
        let baseline = top + ctx.metrics.ascent(&title_font).max(ctx.metrics.ascent(&date_font));
        let mut bounds: Option<Rect> = None;
        let mut title_right = cursor.x();

        if !title.is_empty() {
            let text = ctx.fit(title, &title_font, cursor.width());
            let ascent = ctx.metrics.ascent(&title_font);
            let run = ctx.text_run(
                text,
                Point::new(cursor.x(), baseline - ascent),
                &title_font,
                &theme.text_color,
            );
            ctx.draw(&run)?;
            title_right = run.bounds().right();
            bounds = Some(run.bounds());
        }

        if !date.is_empty() {
            let text = ctx.fit(date, &date_font, cursor.width());
            let width = ctx.metrics.line_width(&text, &date_font);
            let ascent = ctx.metrics.ascent(&date_font);
            let date_x = cursor.x() + cursor.width() - width;
            if !title.is_empty() && title_right > date_x {
                log::warn!(
                    "entry title '{}' runs into its date '{}' by {:.1}pt",
                    title,
                    date,
                    title_right - date_x
                );
            }
            let run = ctx.text_run(
                text,
                Point::new(date_x, baseline - ascent),
                &date_font,
                &theme.muted_color,
            );
            ctx.draw(&run)?;
            bounds = Some(match bounds {
                Some(b) => b.union(&run.bounds()),
                None => run.bounds(),
            });
        }

        if let Some(rect) = bounds {
            cursor.commit(rect, LINE_SPACING);
        }
        Ok(())
    }
}

impl SectionContent for EntryList<'_> {
    fn is_present(&self) -> bool {
        !self.entries.is_empty()
    }

    fn draw(
        &self,
        ctx: &mut RenderContext<'_>,
        cursor: &mut LayoutCursor,
    ) -> Result<(), RenderError> {
        let theme = ctx.theme;
        let detail = theme.regular(theme.detail_size);
        let body = theme.regular(theme.body_size);

        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                cursor.advance_by(theme.entry_gap);
            }
            Self::draw_heading(ctx, cursor, entry)?;
            cursor.draw_line(ctx, &entry.organization, &detail, &theme.accent_color)?;
            cursor.draw_line(ctx, &entry.location, &detail, &theme.muted_color)?;
            cursor.draw_wrapped_text_limited(
                ctx,
                entry.description.trim(),
                &body,
                &theme.text_color,
                theme.description_max_lines,
            )?;
        }
        Ok(())
    }
}

/// Skill chips packed into rows, drawn in `sort_order`.
pub struct ChipCollection<'a> {
    chips: Vec<&'a SkillChip>,
}

impl<'a> ChipCollection<'a> {
    pub fn new(chips: &'a [SkillChip]) -> Self {
        Self {
            chips: sorted_by_order(chips, |c| c.sort_order)
                .into_iter()
                .filter(|c| !c.text.trim().is_empty())
                .collect(),
        }
    }
}

impl SectionContent for ChipCollection<'_> {
    fn is_present(&self) -> bool {
        !self.chips.is_empty()
    }

    fn draw(
        &self,
        ctx: &mut RenderContext<'_>,
        cursor: &mut LayoutCursor,
    ) -> Result<(), RenderError> {
        let theme = ctx.theme;
        let chip_theme = &theme.chips;
        let font = theme.regular(chip_theme.font_size);
        let packer = ChipPacker::new(cursor.width(), chip_theme.spacing)
            .with_padding(chip_theme.padding_x, chip_theme.padding_y);

        let label_width = cursor.width() - 2.0 * chip_theme.padding_x;
        let labels: Vec<String> = self
            .chips
            .iter()
            .map(|c| ctx.fit(c.text.trim(), &font, label_width))
            .collect();
        let rows = packer.pack_labels(ctx.metrics, &labels, &font);

        for (row_index, row) in rows.iter().enumerate() {
            if row_index > 0 {
                cursor.advance_by(chip_theme.row_gap);
            }
            let top = cursor.y();
            let mut row_bounds: Option<Rect> = None;
            for chip in &row.chips {
                let rect = Rect::new(cursor.x() + chip.x, top, chip.size.width, chip.size.height);
                let style = theme.chip_style(self.chips[chip.index].category.as_deref());
                ctx.writer
                    .fill_rounded_rect(rect, rect.height / 2.0, &style.background)?;
                let run = ctx.text_run(
                    labels[chip.index].clone(),
                    Point::new(rect.x + chip_theme.padding_x, rect.y + chip_theme.padding_y),
                    &font,
                    &style.text,
                );
                ctx.draw(&run)?;
                row_bounds = Some(row_bounds.map_or(rect, |b| b.union(&rect)));
            }
            if let Some(bounds) = row_bounds {
                cursor.commit(Rect::new(bounds.x, top, bounds.width, row.height), 0.0);
            }
        }
        Ok(())
    }
}

/// Personal details that pass the visibility rule, as label/value pairs.
pub struct FacetList<'a> {
    facets: Vec<&'a PersonalFacet>,
}

impl<'a> FacetList<'a> {
    pub fn new(facets: &'a [PersonalFacet]) -> Self {
        Self {
            facets: facets.iter().filter(|f| f.is_drawn()).collect(),
        }
    }
}

impl SectionContent for FacetList<'_> {
    fn is_present(&self) -> bool {
        !self.facets.is_empty()
    }

    fn draw(
        &self,
        ctx: &mut RenderContext<'_>,
        cursor: &mut LayoutCursor,
    ) -> Result<(), RenderError> {
        let theme = ctx.theme;
        let label_font = theme.regular(theme.detail_size);
        let value_font = theme.regular(theme.body_size);
        for facet in &self.facets {
            cursor.draw_line(ctx, &facet.label, &label_font, &theme.muted_color)?;
            cursor.draw_line(ctx, &facet.value, &value_font, &theme.text_color)?;
            cursor.advance_by(LINE_SPACING);
        }
        Ok(())
    }
}
