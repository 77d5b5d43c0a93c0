#![cfg(test)]

use crate::metrics::{LINE_SPACING, TextMetrics, block_size};
use crate::standard::StandardFontMetrics;
use crate::test_utils::{MonospaceMetrics, filler_text};
use vitae_style::FontDescriptor;

#[test]
fn test_text_wrapping_breaks_between_words() {
    // 10 units per char, 100 units wide -> at most 10 chars per line.
    let metrics = MonospaceMetrics::new(10.0, 12.0);
    let font = FontDescriptor::regular(10.0);
    let lines = metrics.wrap("alpha beta gamma delta", &font, 100.0);

    let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["alpha beta", "gamma", "delta"]);
    assert_eq!(lines[0].width, 100.0);
}

#[test]
fn test_explicit_newlines_force_breaks() {
    let metrics = MonospaceMetrics::new(5.0, 10.0);
    let font = FontDescriptor::regular(10.0);
    let lines = metrics.wrap("first\n\nthird", &font, 500.0);

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1].text, "");
    assert_eq!(lines[1].height, 10.0, "blank lines keep their height");
}

#[test]
fn test_long_word_is_split_by_characters() {
    let metrics = MonospaceMetrics::new(10.0, 12.0);
    let font = FontDescriptor::regular(10.0);
    let lines = metrics.wrap("abcdefghijklmnopqrstuvwxy", &font, 100.0);

    let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["abcdefghij", "klmnopqrst", "uvwxy"]);
    assert!(lines.iter().all(|l| l.width <= 100.0));
}

#[test]
fn test_zero_width_still_terminates() {
    let metrics = MonospaceMetrics::new(10.0, 12.0);
    let font = FontDescriptor::regular(10.0);
    let lines = metrics.wrap("abc", &font, 0.0);
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_wrapped_height_is_sum_of_line_heights() {
    // A 500-character job description in a 300-unit column.
    let metrics = StandardFontMetrics::new();
    let font = FontDescriptor::regular(9.5);
    let text = filler_text(500);
    assert_eq!(text.len(), 500);

    let lines = metrics.wrap(&text, &font, 300.0);
    let size = metrics.measure(&text, &font, 300.0);

    assert!(lines.len() > 1, "500 characters cannot fit on one line");
    let per_line_sum: f32 = lines.iter().map(|l| l.height).sum();
    let expected = per_line_sum + LINE_SPACING * (lines.len() - 1) as f32;
    assert!((size.height - expected).abs() < 1e-3);
    assert!(size.height > metrics.line_height(&font));
    assert!(lines.iter().all(|l| l.width <= 300.0));
    assert_eq!(size, block_size(&lines));
}

#[test]
fn test_measurement_is_deterministic() {
    let metrics = StandardFontMetrics::new();
    let font = FontDescriptor::bold(11.0);
    let text = filler_text(240);
    assert_eq!(
        metrics.measure(&text, &font, 180.0),
        metrics.measure(&text, &font, 180.0)
    );
}

#[test]
fn test_whitespace_only_text_collapses() {
    let metrics = StandardFontMetrics::new();
    let font = FontDescriptor::regular(10.0);
    assert!(metrics.wrap("   \n  ", &font, 100.0).is_empty());
    assert!(metrics.measure(" \n", &font, 100.0).is_zero());
}
