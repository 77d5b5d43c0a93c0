use crate::context::RenderContext;
use crate::cursor::LayoutCursor;
use crate::geometry::{ColumnLayout, PageGeometry};
use crate::model::RenderableDocument;
use crate::sections::{ChipCollection, EntryList, FacetList, FreeText, Section, render_section};
use crate::theme::Theme;
use itertools::Itertools;
use vitae_layout::TextMetrics;
use vitae_render_core::{PageWriter, RenderError};
use vitae_types::{Point, Rect};

/// Stages of one page composition, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerState {
    Header,
    Divider,
    TwoColumnBody,
    Watermark,
    Done,
}

impl ComposerState {
    fn next(self) -> Self {
        match self {
            ComposerState::Header => ComposerState::Divider,
            ComposerState::Divider => ComposerState::TwoColumnBody,
            ComposerState::TwoColumnBody => ComposerState::Watermark,
            ComposerState::Watermark | ComposerState::Done => ComposerState::Done,
        }
    }
}

/// Where one column put its content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnReport {
    pub x: f32,
    pub width: f32,
    pub top: f32,
    /// Element boxes in drawing order.
    pub elements: Vec<Rect>,
    /// Cursor position after the last section.
    pub bottom: f32,
}

impl ColumnReport {
    fn from_cursor(cursor: LayoutCursor, x: f32, width: f32, top: f32) -> Self {
        let bottom = cursor.y();
        Self {
            x,
            width,
            top,
            elements: cursor.into_placed(),
            bottom,
        }
    }

    /// Lowest edge of anything drawn, or `top` when the column is empty.
    pub fn content_bottom(&self) -> f32 {
        self.elements
            .iter()
            .map(Rect::bottom)
            .fold(self.top, f32::max)
    }
}

/// Measured result of a composition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutReport {
    pub header: Rect,
    pub divider_y: f32,
    pub body_top: f32,
    pub main: ColumnReport,
    pub side: ColumnReport,
    pub watermark: Option<Rect>,
    /// True when a column ran past the bottom margin and was clipped.
    pub overflowed: bool,
}

/// Lays out a [`RenderableDocument`] on one page.
pub struct DocumentComposer<'a> {
    document: &'a RenderableDocument,
    geometry: PageGeometry,
    columns: ColumnLayout,
    theme: &'a Theme,
    metrics: &'a dyn TextMetrics,
    watermark: Option<&'a str>,
}

impl<'a> DocumentComposer<'a> {
    pub fn new(
        document: &'a RenderableDocument,
        columns: ColumnLayout,
        geometry: PageGeometry,
        theme: &'a Theme,
        metrics: &'a dyn TextMetrics,
    ) -> Self {
        Self {
            document,
            geometry,
            columns,
            theme,
            metrics,
            watermark: None,
        }
    }

    pub fn with_watermark(mut self, watermark: Option<&'a str>) -> Self {
        self.watermark = watermark.filter(|w| !w.trim().is_empty());
        self
    }

    /// Main column sections, top to bottom.
    pub fn main_sections(&self) -> Vec<Section<'a>> {
        let (doc, theme) = (self.document, self.theme);
        vec![
            Section::new(
                theme.titles.profile.clone(),
                FreeText {
                    text: &doc.summary,
                    max_lines: theme.summary_max_lines,
                },
            ),
            Section::new(theme.titles.experience.clone(), EntryList::new(&doc.experience)),
            Section::new(theme.titles.education.clone(), EntryList::new(&doc.education)),
        ]
    }

    /// Side column sections, top to bottom.
    pub fn side_sections(&self) -> Vec<Section<'a>> {
        let (doc, theme) = (self.document, self.theme);
        vec![
            Section::new(theme.titles.personal.clone(), FacetList::new(&doc.facets)),
            Section::new(
                theme.titles.links.clone(),
                FreeText {
                    text: &doc.links,
                    max_lines: theme.links_max_lines,
                },
            ),
            Section::new(theme.titles.skills.clone(), ChipCollection::new(&doc.skills)),
        ]
    }

    /// Runs every stage against `writer`. Any drawing error aborts the page.
    pub fn compose(&self, writer: &mut dyn PageWriter) -> Result<LayoutReport, RenderError> {
        let mut ctx = RenderContext::new(writer, self.metrics, self.theme);
        let mut report = LayoutReport::default();
        let mut state = ComposerState::Header;

        while state != ComposerState::Done {
            log::trace!("composer entering {:?}", state);
            match state {
                ComposerState::Header => {
                    report.header = self.draw_header(&mut ctx)?;
                }
                ComposerState::Divider => {
                    report.divider_y = report.header.bottom() + self.theme.header_gap;
                    self.draw_divider(&mut ctx, report.divider_y)?;
                    report.body_top = report.divider_y + self.theme.divider_width + self.theme.body_gap;
                }
                ComposerState::TwoColumnBody => {
                    let (main, side) = self.draw_body(&mut ctx, report.body_top)?;
                    report.main = main;
                    report.side = side;
                }
                ComposerState::Watermark => {
                    if let Some(text) = self.watermark {
                        report.watermark = Some(self.draw_watermark(&mut ctx, text)?);
                    }
                }
                ComposerState::Done => {}
            }
            state = state.next();
        }

        let limit = self.geometry.content_bottom();
        let lowest = report.main.content_bottom().max(report.side.content_bottom());
        if lowest > limit {
            report.overflowed = true;
            log::warn!(
                "content reaches y={:.1}, {:.1}pt past the bottom margin; the overflow is clipped",
                lowest,
                lowest - limit
            );
        }
        Ok(report)
    }

    fn draw_header(&self, ctx: &mut RenderContext<'_>) -> Result<Rect, RenderError> {
        let theme = self.theme;
        let doc = self.document;
        let content = self.columns.content;
        let mut text_x = content.x;
        let mut header = Rect::new(content.x, content.y, 0.0, 0.0);

        if let Some(photo) = doc.photo.as_deref().filter(|p| !p.is_empty()) {
            let radius = theme.photo_diameter / 2.0;
            let center = Point::new(content.x + radius, content.y + radius);
            ctx.writer.draw_circular_image(center, radius, photo)?;
            header = Rect::new(content.x, content.y, theme.photo_diameter, theme.photo_diameter);
            text_x += theme.photo_diameter + theme.photo_gap;
        }

        let text_width = content.right() - text_x;
        let mut cursor = LayoutCursor::new(text_x, content.y, text_width);
        let contact = doc.contact_parts().join(&theme.contact_separator);

        cursor.draw_line(ctx, &doc.name, &theme.bold(theme.name_size), &theme.text_color)?;
        cursor.draw_line(
            ctx,
            &doc.job_title,
            &theme.regular(theme.job_title_size),
            &theme.accent_color,
        )?;
        cursor.draw_line(
            ctx,
            &contact,
            &theme.regular(theme.contact_size),
            &theme.muted_color,
        )?;

        for rect in cursor.placed() {
            header = if header.is_empty() { *rect } else { header.union(rect) };
        }
        log::debug!(
            "header occupies {:.1}x{:.1} at ({:.1}, {:.1})",
            header.width,
            header.height,
            header.x,
            header.y
        );
        Ok(header)
    }

    fn draw_divider(&self, ctx: &mut RenderContext<'_>, y: f32) -> Result<(), RenderError> {
        let content = self.columns.content;
        let y = y + self.theme.divider_width / 2.0;
        ctx.writer.stroke_line(
            Point::new(content.x, y),
            Point::new(content.right(), y),
            self.theme.divider_width,
            &self.theme.divider_color,
        )
    }

    fn draw_body(
        &self,
        ctx: &mut RenderContext<'_>,
        top: f32,
    ) -> Result<(ColumnReport, ColumnReport), RenderError> {
        let columns = &self.columns;

        let mut main = LayoutCursor::new(columns.main_x, top, columns.main_width);
        for section in self.main_sections() {
            render_section(ctx, &section.title, section.content.as_ref(), &mut main)?;
        }

        let mut side = LayoutCursor::new(columns.side_x, top, columns.side_width);
        for section in self.side_sections() {
            render_section(ctx, &section.title, section.content.as_ref(), &mut side)?;
        }

        log::debug!(
            "columns end at main y={:.1}, side y={:.1}",
            main.y(),
            side.y()
        );
        Ok((
            ColumnReport::from_cursor(main, columns.main_x, columns.main_width, top),
            ColumnReport::from_cursor(side, columns.side_x, columns.side_width, top),
        ))
    }

    /// Bottom-right corner, vertically centred in the bottom margin.
    ///
    /// A margin shorter than the line moves the mark up into the content box,
    /// and the mark never extends past the page edge.
    fn draw_watermark(&self, ctx: &mut RenderContext<'_>, text: &str) -> Result<Rect, RenderError> {
        let theme = self.theme;
        let content = self.columns.content;
        let font = theme.regular(theme.watermark_size);
        let text = ctx.fit(text.trim(), &font, content.width);
        let width = ctx.metrics.line_width(&text, &font);
        let height = ctx.metrics.line_height(&font);
        let margin = self.geometry.margin;
        let y = if margin >= height {
            content.bottom() + (margin - height) / 2.0
        } else {
            content.bottom() - height
        };
        let y = y.min(self.geometry.height - height).max(0.0);
        let run = ctx.text_run(
            text,
            Point::new(content.right() - width, y),
            &font,
            &theme.watermark_color,
        );
        ctx.draw(&run)?;
        Ok(run.bounds())
    }
}
