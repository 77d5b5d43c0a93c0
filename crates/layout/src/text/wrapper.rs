use crate::metrics::{LineBox, TextMetrics};
use vitae_style::FontDescriptor;

/// Breaks `text` into lines no wider than `max_width`.
///
/// Words are separated by spaces and packed greedily; `\n` forces a break and a
/// blank paragraph keeps its line height. A word wider than the whole line is
/// split between characters, always keeping at least one character per line
/// so the loop terminates for any width.
pub fn wrap_lines<M: TextMetrics + ?Sized>(
    metrics: &M,
    text: &str,
    font: &FontDescriptor,
    max_width: f32,
) -> Vec<LineBox> {
    let text = text.trim_end();
    if text.trim().is_empty() {
        return Vec::new();
    }

    let line_height = metrics.line_height(font);
    let space_width = metrics.line_width(" ", font);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0.0f32;

        for word in paragraph.split_whitespace() {
            let word_width = metrics.line_width(word, font);

            if !current.is_empty() {
                if current_width + space_width + word_width <= max_width {
                    current.push(' ');
                    current.push_str(word);
                    current_width += space_width + word_width;
                    continue;
                }
                lines.push(LineBox {
                    text: std::mem::take(&mut current),
                    width: current_width,
                    height: line_height,
                });
                current_width = 0.0;
            }

            if word_width <= max_width {
                current.push_str(word);
                current_width = word_width;
            } else {
                let (rest, rest_width) =
                    split_long_word(metrics, word, font, max_width, line_height, &mut lines);
                current = rest;
                current_width = rest_width;
            }
        }

        lines.push(LineBox {
            text: current,
            width: current_width,
            height: line_height,
        });
    }

    log::trace!(
        "wrapped {} chars into {} lines at width {:.1}",
        text.len(),
        lines.len(),
        max_width
    );
    lines
}

/// Emits full lines for an over-wide word and returns the trailing fragment.
fn split_long_word<M: TextMetrics + ?Sized>(
    metrics: &M,
    word: &str,
    font: &FontDescriptor,
    max_width: f32,
    line_height: f32,
    lines: &mut Vec<LineBox>,
) -> (String, f32) {
    let mut fragment = String::new();
    let mut fragment_width = 0.0f32;

    for c in word.chars() {
        let mut buf = [0u8; 4];
        let char_width = metrics.line_width(c.encode_utf8(&mut buf), font);
        if fragment_width + char_width > max_width && !fragment.is_empty() {
            lines.push(LineBox {
                text: std::mem::take(&mut fragment),
                width: fragment_width,
                height: line_height,
            });
            fragment_width = 0.0;
        }
        fragment.push(c);
        fragment_width += char_width;
    }
    (fragment, fragment_width)
}
