#![allow(dead_code)]

use lopdf::Document as LopdfDocument;
use lopdf::content::Content;
use std::collections::BTreeSet;
use vitae_render_core::utils::from_win_ansi;

/// Decode every `Tj` operand on every page.
pub fn extract_text_runs(doc: &LopdfDocument) -> Vec<String> {
    let mut runs = Vec::new();
    for (_page_num, page_id) in doc.get_pages() {
        let Ok(data) = doc.get_page_content(page_id) else {
            continue;
        };
        let Ok(content) = Content::decode(&data) else {
            continue;
        };
        for op in content.operations.iter().filter(|op| op.operator == "Tj") {
            if let Some(Ok(bytes)) = op.operands.first().map(|o| o.as_str()) {
                runs.push(from_win_ansi(bytes));
            }
        }
    }
    runs
}

/// All text runs joined by newlines.
pub fn extract_text(doc: &LopdfDocument) -> String {
    extract_text_runs(doc).join("\n")
}

/// Follow a reference if needed and view the object as a dictionary.
fn resolve_dict<'a>(doc: &'a LopdfDocument, obj: &'a lopdf::Object) -> Option<&'a lopdf::Dictionary> {
    match obj.as_reference() {
        Ok(id) => doc.get_object(id).and_then(|o| o.as_dict()).ok(),
        Err(_) => obj.as_dict().ok(),
    }
}

/// Extract font names from the PDF (both embedded and referenced fonts)
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = BTreeSet::new();
    for (_page_num, page_id) in doc.get_pages() {
        let Some(page) = doc.get_object(page_id).and_then(|o| o.as_dict()).ok() else {
            continue;
        };
        let font_dict = page
            .get(b"Resources")
            .ok()
            .and_then(|r| resolve_dict(doc, r))
            .and_then(|r| r.get(b"Font").ok())
            .and_then(|f| resolve_dict(doc, f));
        let Some(font_dict) = font_dict else {
            continue;
        };
        for (_name, value) in font_dict.iter() {
            if let Some(name) = resolve_dict(doc, value)
                .and_then(|f| f.get(b"BaseFont").ok())
                .and_then(|b| b.as_name().ok())
            {
                fonts.insert(String::from_utf8_lossy(name).to_string());
            }
        }
    }
    fonts.into_iter().collect()
}

/// `[width, height]` of the page's MediaBox.
pub fn page_size(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let page_id = *doc.get_pages().get(&page_num)?;
    let page = doc.get_object(page_id).ok()?.as_dict().ok()?;
    let media_box = page.get(b"MediaBox").ok()?.as_array().ok()?;
    let value = |i: usize| match media_box.get(i)? {
        lopdf::Object::Integer(v) => Some(*v as f32),
        lopdf::Object::Real(v) => Some(*v as f32),
        _ => None,
    };
    Some((value(2)? - value(0)?, value(3)? - value(1)?))
}

/// Count `Do` operators, i.e. placed images.
pub fn count_images(doc: &LopdfDocument) -> usize {
    doc.get_pages()
        .values()
        .filter_map(|id| doc.get_page_content(*id).ok())
        .filter_map(|data| Content::decode(&data).ok())
        .map(|c| c.operations.iter().filter(|op| op.operator == "Do").count())
        .sum()
}

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert the MediaBox size of a page
#[macro_export]
macro_rules! assert_pdf_page_size {
    ($pdf:expr, $page:expr, $width:expr, $height:expr) => {
        let (w, h) = $crate::common::pdf_assertions::page_size(&$pdf.doc, $page)
            .expect("page should have a MediaBox");
        assert!(
            (w - $width).abs() < 0.01 && (h - $height).abs() < 0.01,
            "Expected page {} to be {}x{}, got {}x{}",
            $page,
            $width,
            $height,
            w,
            h
        );
    };
}

/// Assert that PDF contains a font matching a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($pattern)),
            "PDF should contain font matching '{}', fonts found: {:?}",
            $pattern,
            fonts
        );
    };
}
