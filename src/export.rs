//! The export entry point: validate, compose, finish.

use crate::composer::{DocumentComposer, LayoutReport};
use crate::error::{Error, ExportError};
use crate::geometry::PageGeometry;
use crate::model::RenderableDocument;
use crate::theme::Theme;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use vitae_layout::{FontSet, ShapedFontMetrics, StandardFontMetrics, TextMetrics};
use vitae_render_core::DisplayList;
use vitae_render_lopdf::{LopdfPageWriter, PdfFonts};

/// Text placed in the bottom-right corner when a watermark is requested
/// without custom text.
pub const DEFAULT_WATERMARK: &str = "Created with vitae";

/// Renders documents to single-page PDFs.
///
/// An exporter is immutable and can be shared between threads; every call
/// builds its own page writer, cursors and output buffer.
#[derive(Clone)]
pub struct Exporter {
    geometry: PageGeometry,
    theme: Theme,
    metrics: Arc<dyn TextMetrics>,
    fonts: PdfFonts,
    watermark: Option<String>,
}

impl std::fmt::Debug for Exporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exporter")
            .field("geometry", &self.geometry)
            .field("watermark", &self.watermark)
            .finish_non_exhaustive()
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self {
            geometry: PageGeometry::a4(),
            theme: Theme::default(),
            metrics: Arc::new(StandardFontMetrics::new()),
            fonts: PdfFonts::Standard,
            watermark: None,
        }
    }
}

impl Exporter {
    pub fn builder() -> ExporterBuilder {
        ExporterBuilder::new()
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    fn composer<'a>(
        &'a self,
        document: &'a RenderableDocument,
    ) -> Result<DocumentComposer<'a>, ExportError> {
        let columns = self.geometry.columns()?;
        Ok(
            DocumentComposer::new(document, columns, self.geometry, &self.theme, self.metrics.as_ref())
                .with_watermark(self.watermark.as_deref()),
        )
    }

    /// Renders `document` into PDF bytes.
    pub fn export(&self, document: &RenderableDocument) -> Result<Vec<u8>, ExportError> {
        let composer = self.composer(document)?;
        log::info!("Exporting CV for '{}'", document.name);

        let mut writer = LopdfPageWriter::new(self.geometry.size(), self.fonts.clone())?
            .with_title(document.name.trim());
        let report = composer.compose(&mut writer)?;
        let bytes = writer.finish()?;

        log::info!(
            "Exported {} bytes (main column to y={:.1}, side column to y={:.1}{})",
            bytes.len(),
            report.main.bottom,
            report.side.bottom,
            if report.overflowed { ", clipped" } else { "" }
        );
        Ok(bytes)
    }

    /// Runs the layout without producing PDF bytes.
    pub fn layout(
        &self,
        document: &RenderableDocument,
    ) -> Result<(DisplayList, LayoutReport), ExportError> {
        let composer = self.composer(document)?;
        let mut list = DisplayList::new(self.geometry.size());
        let report = composer.compose(&mut list)?;
        Ok((list, report))
    }

    /// Renders `document` and writes the PDF to `path`.
    pub fn export_to_file<P: AsRef<Path>>(
        &self,
        document: &RenderableDocument,
        path: P,
    ) -> Result<(), ExportError> {
        let path = path.as_ref();
        let bytes = self.export(document)?;
        fs::write(path, &bytes).map_err(|source| ExportError::SaveFailed {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Saved {}", path.display());
        Ok(())
    }
}

/// Renders `document` on `geometry` with the default theme and built-in metrics.
pub fn export(
    document: &RenderableDocument,
    geometry: PageGeometry,
    include_watermark: bool,
) -> Result<Vec<u8>, ExportError> {
    let mut builder = Exporter::builder().with_geometry(geometry);
    if include_watermark {
        builder = builder.with_watermark(DEFAULT_WATERMARK);
    }
    builder.build()?.export(document)
}

/// Builder for [`Exporter`].
#[derive(Default)]
pub struct ExporterBuilder {
    geometry: Option<PageGeometry>,
    theme: Option<Theme>,
    metrics: Option<Arc<dyn TextMetrics>>,
    fonts: PdfFonts,
    watermark: Option<String>,
}

impl ExporterBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Loads a JSON theme file.
    pub fn with_theme_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, Error> {
        self.theme = Some(Theme::from_file(path)?);
        Ok(self)
    }

    /// Adds a bottom-right watermark with the given text.
    pub fn with_watermark(mut self, text: impl Into<String>) -> Self {
        self.watermark = Some(text.into());
        self
    }

    /// Uses a custom measurer. Text is still drawn with the standard PDF fonts.
    pub fn with_metrics(mut self, metrics: Arc<dyn TextMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Measures with and embeds the given TrueType faces.
    ///
    /// Bytes that do not parse as a font fail with
    /// [`ExportError::RenderingFailed`].
    pub fn with_font_set(
        mut self,
        regular: Vec<u8>,
        bold: Option<Vec<u8>>,
    ) -> Result<Self, ExportError> {
        let fonts = FontSet::from_bytes(regular, bold)?;
        log::info!("Using embedded font '{}'", fonts.regular.postscript_name);
        self.metrics = Some(Arc::new(ShapedFontMetrics::new(fonts.clone())));
        self.fonts = PdfFonts::Embedded(fonts);
        Ok(self)
    }

    pub fn build(self) -> Result<Exporter, ExportError> {
        let geometry = self.geometry.unwrap_or_default();
        geometry.validate()?;
        let theme = self.theme.unwrap_or_default();
        theme.validate()?;
        Ok(Exporter {
            geometry,
            theme,
            metrics: self
                .metrics
                .unwrap_or_else(|| Arc::new(StandardFontMetrics::new())),
            fonts: self.fonts,
            watermark: self.watermark.filter(|w| !w.trim().is_empty()),
        })
    }
}
