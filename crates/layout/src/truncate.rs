use crate::metrics::TextMetrics;
use vitae_style::FontDescriptor;

/// Marker appended to shortened text.
pub const ELLIPSIS: char = '\u{2026}';

/// Characters removed from the end of the text per shortening step.
const DROP_STEP: usize = 4;

/// Once the retained prefix is this short the ellipsis form is returned as is.
const MIN_PREFIX: usize = 3;

/// Shortens `text` until its single-line width fits `max_width`.
///
/// Text that already fits is returned unchanged. Otherwise the last four
/// characters are dropped and [`ELLIPSIS`] appended, repeatedly, until the
/// result fits or the kept prefix is three characters or fewer, in which case
/// that prefix plus the ellipsis is returned even if it still overflows.
///
/// A trailing ellipsis in the input is treated as a previous truncation
/// marker, so applying the function to its own output with the same width
/// returns that output unchanged.
pub fn truncate<M: TextMetrics + ?Sized>(
    metrics: &M,
    text: &str,
    font: &FontDescriptor,
    max_width: f32,
) -> String {
    if metrics.line_width(text, font) <= max_width {
        return text.to_string();
    }

    let mut kept: Vec<char> = text.chars().collect();
    if kept.last() == Some(&ELLIPSIS) {
        kept.pop();
    }

    let mut candidate = with_ellipsis(&kept);
    while kept.len() > MIN_PREFIX {
        kept.truncate(kept.len().saturating_sub(DROP_STEP));
        candidate = with_ellipsis(&kept);
        if metrics.line_width(&candidate, font) <= max_width {
            break;
        }
    }

    log::debug!(
        "truncated {:?} to {:?} for width {:.1}",
        text,
        candidate,
        max_width
    );
    candidate
}

fn with_ellipsis(chars: &[char]) -> String {
    let mut s: String = chars.iter().collect();
    s.push(ELLIPSIS);
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standard::StandardFontMetrics;

    fn font() -> FontDescriptor {
        FontDescriptor::regular(10.0)
    }

    #[test]
    fn fitting_text_is_returned_unchanged() {
        let m = StandardFontMetrics::new();
        assert_eq!(truncate(&m, "Hi", &font(), 80.0), "Hi");
        assert_eq!(truncate(&m, "", &font(), 0.0), "");
    }

    #[test]
    fn long_text_fits_after_truncation() {
        let m = StandardFontMetrics::new();
        let text = "Senior Platform Engineer, Distributed Storage";
        let out = truncate(&m, text, &font(), 90.0);
        assert!(out.ends_with(ELLIPSIS));
        assert!(m.line_width(&out, &font()) <= 90.0);
        let prefix: String = out.chars().take(out.chars().count() - 1).collect();
        assert!(text.starts_with(&prefix));
        // Each step drops four characters.
        assert_eq!((text.chars().count() - prefix.chars().count()) % DROP_STEP, 0);
    }

    #[test]
    fn tiny_budget_stops_at_short_prefix() {
        let m = StandardFontMetrics::new();
        let out = truncate(&m, "Mmmmmmmmmmmm", &font(), 1.0);
        let prefix_len = out.chars().count() - 1;
        assert!(prefix_len <= MIN_PREFIX);
        assert!(out.ends_with(ELLIPSIS));
    }

    #[test]
    fn truncation_is_idempotent_for_same_width() {
        let m = StandardFontMetrics::new();
        for width in [1.0, 20.0, 45.0, 90.0, 400.0] {
            let once = truncate(&m, "Curriculum vitae of a very long name", &font(), width);
            let twice = truncate(&m, &once, &font(), width);
            assert_eq!(once, twice, "width {width}");
        }
    }
}
