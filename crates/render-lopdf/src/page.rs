use crate::fonts::PdfFonts;
use crate::paths;
use crate::writer::PdfObjectWriter;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Object, StringFormat, Stream, dictionary};
use std::io::Cursor;
use vitae_render_core::utils::{flip_y, to_win_ansi};
use vitae_render_core::{PageWriter, RenderError, TextRun};
use vitae_types::{Color, Point, Rect, Size};

const PDF_VERSION: &str = "1.7";

struct ImageXObject {
    name: String,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// Writes one page of PDF content with lopdf operators.
///
/// Drawing calls append to a single content stream; [`finish`](Self::finish)
/// serializes the document. Output carries no creation date, so identical
/// drawing calls give identical bytes.
pub struct LopdfPageWriter {
    size: Size,
    fonts: PdfFonts,
    operations: Vec<Operation>,
    images: Vec<ImageXObject>,
    title: Option<String>,
}

impl LopdfPageWriter {
    pub fn new(size: Size, fonts: PdfFonts) -> Result<Self, RenderError> {
        if !(size.width > 0.0 && size.height > 0.0 && size.width.is_finite() && size.height.is_finite()) {
            return Err(RenderError::InvalidCanvas(format!(
                "page size {}x{} is not drawable",
                size.width, size.height
            )));
        }
        Ok(Self {
            size,
            fonts,
            operations: Vec::new(),
            images: Vec::new(),
            title: None,
        })
    }

    /// Sets the document title stored in the info dictionary.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn set_fill(&mut self, color: &Color) {
        let [r, g, b] = color.components();
        self.operations
            .push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
    }

    fn set_stroke(&mut self, color: &Color) {
        let [r, g, b] = color.components();
        self.operations
            .push(Operation::new("RG", vec![r.into(), g.into(), b.into()]));
    }

    /// Serializes the page into a complete PDF file.
    pub fn finish(self) -> Result<Vec<u8>, RenderError> {
        let mut writer = PdfObjectWriter::new(Cursor::new(Vec::new()), PDF_VERSION)?;
        let page_id = writer.new_object_id();

        let font_dict = self.fonts.write_resources(&mut writer);
        let mut resources = dictionary! { "Font" => font_dict };
        if !self.images.is_empty() {
            let mut xobjects = Dictionary::new();
            for image in self.images {
                let stream = Stream::new(
                    dictionary! {
                        "Type" => "XObject",
                        "Subtype" => "Image",
                        "Width" => image.width as i64,
                        "Height" => image.height as i64,
                        "ColorSpace" => "DeviceRGB",
                        "BitsPerComponent" => 8,
                    },
                    image.pixels,
                );
                let id = writer.buffer_object(Object::Stream(stream));
                xobjects.set(image.name, id);
            }
            resources.set("XObject", xobjects);
        }

        let operation_count = self.operations.len();
        let content = Content {
            operations: self.operations,
        }
        .encode()?;
        let content_id = writer.buffer_object(Object::Stream(Stream::new(dictionary! {}, content)));

        let page = dictionary! {
            "Type" => "Page",
            "Parent" => writer.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), self.size.width.into(), self.size.height.into()],
            "Contents" => content_id,
            "Resources" => resources,
        };
        writer.buffer_object_at_id(page_id, page.into());

        let mut info = dictionary! { "Producer" => Object::string_literal("vitae") };
        if let Some(title) = self.title {
            info.set("Title", Object::String(to_win_ansi(&title), StringFormat::Literal));
        }
        writer.set_info(info);

        let bytes = writer.finish(&[page_id])?.into_inner();
        log::debug!(
            "Wrote {} content operations into a {} byte PDF",
            operation_count,
            bytes.len()
        );
        Ok(bytes)
    }
}

impl PageWriter for LopdfPageWriter {
    fn page_size(&self) -> Size {
        self.size
    }

    fn draw_text(&mut self, run: &TextRun) -> Result<(), RenderError> {
        if run.text.is_empty() {
            return Ok(());
        }
        let font_name = self.fonts.resource_name(&run.font);
        self.operations.push(Operation::new("BT", vec![]));
        self.set_fill(&run.color);
        self.operations.push(Operation::new(
            "Tf",
            vec![font_name.into(), run.font.size.into()],
        ));
        self.operations.push(Operation::new(
            "Td",
            vec![
                run.origin.x.into(),
                flip_y(run.baseline(), self.size.height).into(),
            ],
        ));
        self.operations.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(&run.text), StringFormat::Literal)],
        ));
        self.operations.push(Operation::new("ET", vec![]));
        Ok(())
    }

    fn fill_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        color: &Color,
    ) -> Result<(), RenderError> {
        if rect.is_empty() {
            return Ok(());
        }
        self.set_fill(color);
        self.operations
            .extend(paths::rounded_rect(rect, radius, self.size.height));
        self.operations.push(Operation::new("f", vec![]));
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: Point,
        radius: f32,
        color: &Color,
    ) -> Result<(), RenderError> {
        self.set_fill(color);
        self.operations
            .extend(paths::circle(center, radius, self.size.height));
        self.operations.push(Operation::new("f", vec![]));
        Ok(())
    }

    fn draw_circular_image(
        &mut self,
        center: Point,
        radius: f32,
        image: &[u8],
    ) -> Result<(), RenderError> {
        let decoded = image::load_from_memory(image)
            .map_err(|e| RenderError::Image(e.to_string()))?
            .to_rgb8();
        let (width, height) = decoded.dimensions();
        let name = format!("Im{}", self.images.len() + 1);
        self.images.push(ImageXObject {
            name: name.clone(),
            width,
            height,
            pixels: decoded.into_raw(),
        });

        let diameter = 2.0 * radius;
        let left = center.x - radius;
        let bottom = flip_y(center.y + radius, self.size.height);
        self.operations.push(Operation::new("q", vec![]));
        self.operations
            .extend(paths::circle(center, radius, self.size.height));
        self.operations.push(Operation::new("W", vec![]));
        self.operations.push(Operation::new("n", vec![]));
        self.operations.push(Operation::new(
            "cm",
            vec![
                diameter.into(),
                0.into(),
                0.into(),
                diameter.into(),
                left.into(),
                bottom.into(),
            ],
        ));
        self.operations
            .push(Operation::new("Do", vec![Object::Name(name.into_bytes())]));
        self.operations.push(Operation::new("Q", vec![]));
        log::debug!("Placed {}x{} photo clipped to radius {:.1}", width, height, radius);
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Point,
        to: Point,
        width: f32,
        color: &Color,
    ) -> Result<(), RenderError> {
        self.set_stroke(color);
        self.operations.push(Operation::new("w", vec![width.into()]));
        self.operations.push(Operation::new(
            "m",
            vec![from.x.into(), flip_y(from.y, self.size.height).into()],
        ));
        self.operations.push(Operation::new(
            "l",
            vec![to.x.into(), flip_y(to.y, self.size.height).into()],
        ));
        self.operations.push(Operation::new("S", vec![]));
        Ok(())
    }
}
