use vitae_style::FontDescriptor;

/// PDF base font name for a descriptor, e.g. `Helvetica-BoldOblique`.
pub fn styled_font_name(font: &FontDescriptor) -> String {
    let mut name = font.family.clone();
    let bold = font.is_bold();
    let slanted = font.style.is_slanted();
    if bold || slanted {
        name.push('-');
        if bold {
            name.push_str("Bold");
        }
        if slanted {
            name.push_str("Oblique");
        }
    }
    name
}

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Encodes text for a simple font using `WinAnsiEncoding`.
///
/// Latin-1 maps directly; the typographic punctuation the layout emits
/// (ellipsis, dashes, quotes, bullet) maps to its code in the 0x80..0x9F
/// range. Anything else becomes `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .filter(|c| !c.is_control())
        .map(|c| match c {
            '\u{2026}' => 0x85,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2030}' => 0x89,
            '\u{20AC}' => 0x80,
            c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}

/// Inverse of [`to_win_ansi`] for the characters it produces.
pub fn from_win_ansi(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0x85 => '\u{2026}',
            0x95 => '\u{2022}',
            0x96 => '\u{2013}',
            0x97 => '\u{2014}',
            0x91 => '\u{2018}',
            0x92 => '\u{2019}',
            0x93 => '\u{201C}',
            0x94 => '\u{201D}',
            0x89 => '\u{2030}',
            0x80 => '\u{20AC}',
            b => b as char,
        })
        .collect()
}
