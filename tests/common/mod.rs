pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use vitae::{DisplayList, ExportError, Exporter, LayoutReport, RenderableDocument};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Every string shown with `Tj`, in content-stream order.
    pub fn text_runs(&self) -> Vec<String> {
        pdf_assertions::extract_text_runs(&self.doc)
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Export with the default exporter and parse the result.
#[allow(dead_code)]
pub fn export_pdf(document: &RenderableDocument) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    export_pdf_with(&Exporter::default(), document)
}

#[allow(dead_code)]
pub fn export_pdf_with(
    exporter: &Exporter,
    document: &RenderableDocument,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = exporter.export(document)?;
    GeneratedPdf::from_bytes(bytes)
}

/// Layout-only render with the default exporter.
#[allow(dead_code)]
pub fn layout(document: &RenderableDocument) -> Result<(DisplayList, LayoutReport), ExportError> {
    Exporter::default().layout(document)
}
