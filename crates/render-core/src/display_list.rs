use crate::error::RenderError;
use crate::traits::PageWriter;
use crate::types::TextRun;
use std::sync::Arc;
use vitae_types::{Color, Point, Rect, Size};

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Text(TextRun),
    RoundedRect {
        rect: Rect,
        radius: f32,
        color: Color,
    },
    Circle {
        center: Point,
        radius: f32,
        color: Color,
    },
    Image {
        center: Point,
        radius: f32,
        data: Arc<[u8]>,
    },
    Line {
        from: Point,
        to: Point,
        width: f32,
        color: Color,
    },
}

impl DrawCommand {
    /// Area of the page touched by the command.
    pub fn bounds(&self) -> Rect {
        match self {
            DrawCommand::Text(run) => run.bounds(),
            DrawCommand::RoundedRect { rect, .. } => *rect,
            DrawCommand::Circle { center, radius, .. }
            | DrawCommand::Image { center, radius, .. } => Rect::new(
                center.x - radius,
                center.y - radius,
                2.0 * radius,
                2.0 * radius,
            ),
            DrawCommand::Line { from, to, width, .. } => {
                let half = width / 2.0;
                let x = from.x.min(to.x);
                let y = from.y.min(to.y);
                Rect::new(
                    x,
                    y - half,
                    (from.x - to.x).abs(),
                    (from.y - to.y).abs() + *width,
                )
            }
        }
    }
}

/// A [`PageWriter`] that records commands instead of producing output.
///
/// The composer draws into a display list when the caller only wants the
/// layout, and tests inspect it to check positions without parsing a PDF.
/// Replaying a list onto another writer reproduces the same page.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(run) => Some(run),
            _ => None,
        })
    }

    /// First text run whose content equals `text`.
    pub fn find_text(&self, text: &str) -> Option<&TextRun> {
        self.texts().find(|run| run.text == text)
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|run| run.text.contains(needle))
    }

    /// Union of every command's bounds, `None` for an empty list.
    pub fn bounds(&self) -> Option<Rect> {
        self.commands
            .iter()
            .map(DrawCommand::bounds)
            .reduce(|acc, r| acc.union(&r))
    }

    /// Issues every recorded command, in order, to `writer`.
    pub fn replay(&self, writer: &mut dyn PageWriter) -> Result<(), RenderError> {
        for command in &self.commands {
            match command {
                DrawCommand::Text(run) => writer.draw_text(run)?,
                DrawCommand::RoundedRect {
                    rect,
                    radius,
                    color,
                } => writer.fill_rounded_rect(*rect, *radius, color)?,
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => writer.fill_circle(*center, *radius, color)?,
                DrawCommand::Image {
                    center,
                    radius,
                    data,
                } => writer.draw_circular_image(*center, *radius, data)?,
                DrawCommand::Line {
                    from,
                    to,
                    width,
                    color,
                } => writer.stroke_line(*from, *to, *width, color)?,
            }
        }
        Ok(())
    }
}

impl PageWriter for DisplayList {
    fn page_size(&self) -> Size {
        self.size
    }

    fn draw_text(&mut self, run: &TextRun) -> Result<(), RenderError> {
        if !run.text.is_empty() {
            self.commands.push(DrawCommand::Text(run.clone()));
        }
        Ok(())
    }

    fn fill_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        color: &Color,
    ) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::RoundedRect {
            rect,
            radius,
            color: color.clone(),
        });
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: Point,
        radius: f32,
        color: &Color,
    ) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: color.clone(),
        });
        Ok(())
    }

    fn draw_circular_image(
        &mut self,
        center: Point,
        radius: f32,
        image: &[u8],
    ) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Image {
            center,
            radius,
            data: Arc::from(image),
        });
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Point,
        to: Point,
        width: f32,
        color: &Color,
    ) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color: color.clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_style::FontDescriptor;

    fn run(text: &str, x: f32, y: f32) -> TextRun {
        TextRun {
            text: text.to_string(),
            origin: Point::new(x, y),
            ascent: 8.0,
            width: 40.0,
            height: 12.0,
            font: FontDescriptor::regular(10.0),
            color: Color::default(),
        }
    }

    #[test]
    fn records_commands_in_order() {
        let mut list = DisplayList::new(Size::new(595.0, 842.0));
        list.draw_text(&run("Ada", 36.0, 36.0)).unwrap();
        list.stroke_line(Point::new(36.0, 60.0), Point::new(559.0, 60.0), 1.0, &Color::gray(200))
            .unwrap();
        list.fill_rounded_rect(Rect::new(400.0, 80.0, 50.0, 16.0), 8.0, &Color::gray(230))
            .unwrap();

        assert_eq!(list.len(), 3);
        assert!(matches!(list.commands()[0], DrawCommand::Text(_)));
        assert!(matches!(list.commands()[2], DrawCommand::RoundedRect { .. }));
        assert!(list.contains_text("Ad"));
        assert_eq!(list.find_text("Ada").map(|r| r.baseline()), Some(44.0));
    }

    #[test]
    fn empty_text_is_not_recorded() {
        let mut list = DisplayList::new(Size::new(100.0, 100.0));
        list.draw_text(&run("", 0.0, 0.0)).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.bounds(), None);
    }

    #[test]
    fn bounds_cover_every_command() {
        let mut list = DisplayList::new(Size::new(595.0, 842.0));
        list.draw_text(&run("a", 10.0, 10.0)).unwrap();
        list.fill_circle(Point::new(100.0, 100.0), 20.0, &Color::white())
            .unwrap();
        let bounds = list.bounds().unwrap();
        assert_eq!(bounds.x, 10.0);
        assert_eq!(bounds.y, 10.0);
        assert_eq!(bounds.right(), 120.0);
        assert_eq!(bounds.bottom(), 120.0);
    }

    #[test]
    fn replay_reproduces_the_list() {
        let mut list = DisplayList::new(Size::new(200.0, 200.0));
        list.draw_text(&run("x", 1.0, 2.0)).unwrap();
        list.draw_circular_image(Point::new(50.0, 50.0), 10.0, &[1, 2, 3])
            .unwrap();

        let mut copy = DisplayList::new(Size::new(200.0, 200.0));
        list.replay(&mut copy).unwrap();
        assert_eq!(copy, list);
    }
}
