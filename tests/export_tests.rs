mod common;

use common::fixtures::*;
use common::{GeneratedPdf, TestResult, export_pdf, export_pdf_with};
use vitae::{
    DEFAULT_WATERMARK, ExportError, Exporter, PageGeometry, RenderError, RenderableDocument,
};

#[test]
fn test_full_document_is_a_single_a4_page() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = export_pdf(&full_document())?;

    assert_pdf_page_count!(pdf, 1);
    assert_pdf_page_size!(pdf, 1, 595.0, 842.0);
    assert_pdf_has_font!(pdf, "Helvetica");
    assert_pdf_has_font!(pdf, "Helvetica-Bold");
    assert_pdf_contains_text!(pdf, "Experience");
    assert_pdf_contains_text!(pdf, "COBOL");
    assert_pdf_contains_text!(pdf, "Yale University");
    Ok(())
}

#[test]
fn test_letter_geometry_sets_media_box() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let exporter = Exporter::builder()
        .with_geometry(PageGeometry::letter())
        .build()?;
    let pdf = export_pdf_with(&exporter, &name_only())?;

    assert_pdf_page_size!(pdf, 1, 612.0, 792.0);
    Ok(())
}

#[test]
fn test_two_renders_are_byte_identical() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut doc = full_document();
    doc.photo = Some(tiny_png());
    let exporter = Exporter::builder().with_watermark("Draft").build()?;

    let first = exporter.export(&doc)?;
    let second = exporter.export(&doc)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_contact_line_joins_present_fields() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut doc = RenderableDocument::new("Ada Lovelace");
    doc.email = "ada@example.com".into();
    doc.location = "London".into();
    let pdf = export_pdf(&doc)?;

    assert!(pdf.text_runs().iter().any(|t| t == "ada@example.com \u{00B7} London"));
    Ok(())
}

#[test]
fn test_watermark_only_when_requested() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = name_only();
    let without = GeneratedPdf::from_bytes(vitae::export(&doc, PageGeometry::a4(), false)?)?;
    let with = GeneratedPdf::from_bytes(vitae::export(&doc, PageGeometry::a4(), true)?)?;

    assert_pdf_not_contains_text!(without, DEFAULT_WATERMARK);
    assert_pdf_contains_text!(with, DEFAULT_WATERMARK);
    Ok(())
}

#[test]
fn test_photo_is_placed_once() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut doc = name_only();
    doc.photo = Some(tiny_png());
    let pdf = export_pdf(&doc)?;

    assert_eq!(common::pdf_assertions::count_images(&pdf.doc), 1);
    Ok(())
}

#[test]
fn test_undecodable_photo_fails_the_render() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut doc = name_only();
    doc.photo = Some(b"definitely not a png".to_vec());
    let err = Exporter::default().export(&doc).unwrap_err();

    assert!(matches!(err, ExportError::RenderingFailed(RenderError::Image(_))));
}

#[test]
fn test_invalid_geometry_is_rejected_up_front() {
    let _ = env_logger::builder().is_test(true).try_init();

    let too_wide_margin = PageGeometry::a4().with_margin(400.0);
    assert!(matches!(
        vitae::export(&full_document(), too_wide_margin, false),
        Err(ExportError::InvalidGeometry(_))
    ));

    let zero_height = PageGeometry {
        width: 595.0,
        height: 0.0,
        margin: 10.0,
    };
    assert!(matches!(
        Exporter::builder().with_geometry(zero_height).build(),
        Err(ExportError::InvalidGeometry(_))
    ));
}

#[test]
fn test_malformed_font_is_a_rendering_failure() {
    let _ = env_logger::builder().is_test(true).try_init();

    let result = Exporter::builder().with_font_set(b"not a font at all".to_vec(), None);
    assert!(matches!(
        result,
        Err(ExportError::RenderingFailed(RenderError::Layout(_)))
    ));
}

#[test]
fn test_export_to_file_writes_the_pdf() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("cv.pdf");
    Exporter::default().export_to_file(&full_document(), &path)?;

    let pdf = GeneratedPdf::from_bytes(std::fs::read(&path)?)?;
    assert_pdf_page_count!(pdf, 1);
    Ok(())
}

#[test]
fn test_unwritable_path_is_save_failed() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("missing").join("cv.pdf");
    let err = Exporter::default()
        .export_to_file(&name_only(), &path)
        .unwrap_err();

    match err {
        ExportError::SaveFailed { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("expected SaveFailed, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_overflow_is_clipped_to_one_page() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = overflowing_document();
    let (_, report) = Exporter::default().layout(&doc)?;
    assert!(report.overflowed);

    let pdf = export_pdf(&doc)?;
    assert_pdf_page_count!(pdf, 1);
    Ok(())
}

#[test]
fn test_custom_theme_titles_are_used() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let theme = vitae::Theme::from_json(r#"{ "titles": { "skills": "Kompetanse" } }"#)?;
    let exporter = Exporter::builder().with_theme(theme).build()?;
    let pdf = export_pdf_with(&exporter, &full_document())?;

    assert_pdf_contains_text!(pdf, "Kompetanse");
    assert_pdf_not_contains_text!(pdf, "Skills");
    Ok(())
}

#[test]
fn test_invalid_theme_is_rejected_by_build() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut theme = vitae::Theme::default();
    theme.chips.palette.clear();
    assert!(matches!(
        Exporter::builder().with_theme(theme).build(),
        Err(ExportError::InvalidTheme(_))
    ));

    let mut theme = vitae::Theme::default();
    theme.body_size = -1.0;
    assert!(matches!(
        Exporter::builder().with_theme(theme).build(),
        Err(ExportError::InvalidTheme(_))
    ));
}

#[test]
fn test_theme_file_round_trip() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("theme.json");
    std::fs::write(&path, r##"{ "accentColor": "#0A7E8C", "summaryMaxLines": 2 }"##)?;

    let exporter = Exporter::builder().with_theme_file(&path)?.build()?;
    assert_eq!(exporter.theme().summary_max_lines, 2);
    assert_eq!(exporter.theme().accent_color, vitae::Color::rgb(0x0A, 0x7E, 0x8C));
    Ok(())
}

#[test]
fn test_exporter_is_shareable_across_threads() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let exporter = std::sync::Arc::new(Exporter::default());
    let doc = std::sync::Arc::new(full_document());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let (exporter, doc) = (exporter.clone(), doc.clone());
            std::thread::spawn(move || exporter.export(&doc).map_err(|e| e.to_string()))
        })
        .collect();

    let outputs = handles
        .into_iter()
        .map(|h| h.join().expect("export thread panicked"))
        .collect::<Result<Vec<_>, _>>()?;
    assert!(outputs.windows(2).all(|w| w[0] == w[1]));
    Ok(())
}
