//! Visual configuration for the page.
//!
//! A [`Theme`] is plain data passed explicitly into every render; there is no
//! process-wide theme. All fields default, so a theme file only needs the
//! values it changes.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use vitae_style::{DEFAULT_FONT_FAMILY, FontDescriptor};
use vitae_types::Color;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read theme from '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Theme JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Theme value out of range: {0}")]
    Invalid(String),
}

/// Background and label color of one chip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChipStyle {
    pub background: Color,
    pub text: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChipTheme {
    pub font_size: f32,
    pub padding_x: f32,
    pub padding_y: f32,
    /// Horizontal gap between chips in a row.
    pub spacing: f32,
    /// Vertical gap between rows.
    pub row_gap: f32,
    pub palette: Vec<ChipStyle>,
}

impl Default for ChipTheme {
    fn default() -> Self {
        let style = |bg: Color, text: Color| ChipStyle {
            background: bg,
            text,
        };
        Self {
            font_size: 8.5,
            padding_x: 6.0,
            padding_y: 3.0,
            spacing: 4.0,
            row_gap: 4.0,
            palette: vec![
                style(Color::rgb(0xE8, 0xF0, 0xFE), Color::rgb(0x1A, 0x4B, 0x9C)),
                style(Color::rgb(0xE6, 0xF4, 0xEA), Color::rgb(0x1E, 0x6B, 0x37)),
                style(Color::rgb(0xFD, 0xF0, 0xE1), Color::rgb(0x8A, 0x4B, 0x08)),
                style(Color::rgb(0xF3, 0xE8, 0xFD), Color::rgb(0x5B, 0x2A, 0x86)),
                style(Color::rgb(0xFC, 0xE8, 0xEC), Color::rgb(0x9B, 0x1C, 0x31)),
            ],
        }
    }
}

/// Headings of the six body sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionTitles {
    pub profile: String,
    pub experience: String,
    pub education: String,
    pub personal: String,
    pub links: String,
    pub skills: String,
}

impl Default for SectionTitles {
    fn default() -> Self {
        Self {
            profile: "Profile".into(),
            experience: "Experience".into(),
            education: "Education".into(),
            personal: "Personal details".into(),
            links: "Links".into(),
            skills: "Skills".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    pub font_family: String,

    pub text_color: Color,
    pub muted_color: Color,
    pub accent_color: Color,
    pub divider_color: Color,
    pub watermark_color: Color,

    pub name_size: f32,
    pub job_title_size: f32,
    pub contact_size: f32,
    pub section_title_size: f32,
    pub entry_title_size: f32,
    pub detail_size: f32,
    pub body_size: f32,
    pub watermark_size: f32,

    pub photo_diameter: f32,
    /// Space between the photo and the header text.
    pub photo_gap: f32,
    /// Space between the header block and the divider.
    pub header_gap: f32,
    pub divider_width: f32,
    /// Space between the divider and the top of both columns.
    pub body_gap: f32,
    /// Space after every rendered section.
    pub section_gap: f32,
    /// Space between two entries of a list.
    pub entry_gap: f32,

    pub summary_max_lines: usize,
    /// Unlimited by default, so entry descriptions keep every wrapped line.
    pub description_max_lines: usize,
    pub links_max_lines: usize,

    pub contact_separator: String,
    pub chips: ChipTheme,
    pub titles: SectionTitles,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            text_color: Color::rgb(0x22, 0x22, 0x22),
            muted_color: Color::rgb(0x66, 0x66, 0x66),
            accent_color: Color::rgb(0x1F, 0x6F, 0xEB),
            divider_color: Color::rgb(0xD0, 0xD7, 0xDE),
            watermark_color: Color::gray(0xB0),
            name_size: 24.0,
            job_title_size: 13.0,
            contact_size: 9.0,
            section_title_size: 11.0,
            entry_title_size: 10.0,
            detail_size: 8.5,
            body_size: 9.5,
            watermark_size: 8.0,
            photo_diameter: 64.0,
            photo_gap: 14.0,
            header_gap: 12.0,
            divider_width: 1.0,
            body_gap: 14.0,
            section_gap: 10.0,
            entry_gap: 6.0,
            summary_max_lines: 8,
            description_max_lines: usize::MAX,
            links_max_lines: 6,
            contact_separator: " \u{00B7} ".to_string(),
            chips: ChipTheme::default(),
            titles: SectionTitles::default(),
        }
    }
}

impl Theme {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let theme: Theme = serde_json::from_str(json)?;
        theme.validate()?;
        Ok(theme)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|source| ConfigError::Io {
            path: path_ref.display().to_string(),
            source,
        })?;
        log::debug!("Loaded theme from {}", path_ref.display());
        Self::from_json(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let sizes = [
            ("nameSize", self.name_size),
            ("jobTitleSize", self.job_title_size),
            ("contactSize", self.contact_size),
            ("sectionTitleSize", self.section_title_size),
            ("entryTitleSize", self.entry_title_size),
            ("detailSize", self.detail_size),
            ("bodySize", self.body_size),
            ("watermarkSize", self.watermark_size),
            ("chips.fontSize", self.chips.font_size),
        ];
        if let Some((name, size)) = sizes.iter().find(|(_, s)| !(s.is_finite() && *s > 0.0)) {
            return Err(ConfigError::Invalid(format!("{name} must be positive, got {size}")));
        }
        if self.chips.palette.is_empty() {
            return Err(ConfigError::Invalid("chips.palette must not be empty".into()));
        }
        if self.summary_max_lines == 0 || self.description_max_lines == 0 || self.links_max_lines == 0 {
            return Err(ConfigError::Invalid("max line counts must be at least 1".into()));
        }
        Ok(())
    }

    pub fn regular(&self, size: f32) -> FontDescriptor {
        FontDescriptor::regular(size).with_family(self.font_family.clone())
    }

    pub fn bold(&self, size: f32) -> FontDescriptor {
        FontDescriptor::bold(size).with_family(self.font_family.clone())
    }

    /// Chip colors for a category. The same category always maps to the same
    /// palette entry; chips without a category use the first entry. An empty
    /// palette falls back to [`FALLBACK_CHIP_STYLE`].
    pub fn chip_style(&self, category: Option<&str>) -> &ChipStyle {
        let palette = &self.chips.palette;
        if palette.is_empty() {
            return &FALLBACK_CHIP_STYLE;
        }
        let index = match category.map(str::trim).filter(|c| !c.is_empty()) {
            Some(category) => (fnv1a(category) % palette.len() as u64) as usize,
            None => 0,
        };
        palette.get(index).unwrap_or(&FALLBACK_CHIP_STYLE)
    }
}

/// Neutral gray chip used when a theme has no palette.
pub static FALLBACK_CHIP_STYLE: ChipStyle = ChipStyle {
    background: Color::gray(0xEE),
    text: Color::gray(0x33),
};

/// 64-bit FNV-1a, stable across runs and platforms.
fn fnv1a(s: &str) -> u64 {
    s.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ byte as u64).wrapping_mul(0x0000_0100_0000_01b3)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_theme_json_keeps_defaults() {
        let theme = Theme::from_json(r##"{ "accentColor": "#C2185B", "nameSize": 28 }"##).unwrap();
        assert_eq!(theme.accent_color, Color::rgb(0xC2, 0x18, 0x5B));
        assert_eq!(theme.name_size, 28.0);
        assert_eq!(theme.body_size, Theme::default().body_size);
        assert_eq!(theme.titles.skills, "Skills");
    }

    #[test]
    fn colors_accept_maps() {
        let theme = Theme::from_json(r#"{ "textColor": { "r": 10, "g": 20, "b": 30 } }"#).unwrap();
        assert_eq!(theme.text_color, Color::rgb(10, 20, 30));
    }

    #[test]
    fn rejects_non_positive_sizes_and_empty_palette() {
        assert!(matches!(
            Theme::from_json(r#"{ "bodySize": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Theme::from_json(r#"{ "chips": { "palette": [] } }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(Theme::from_json("{ nope"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn chip_style_is_stable_per_category() {
        let theme = Theme::default();
        let a = theme.chip_style(Some("languages"));
        let b = theme.chip_style(Some("languages"));
        assert_eq!(a, b);
        assert_eq!(theme.chip_style(None), &theme.chips.palette[0]);
        assert_eq!(theme.chip_style(Some("  ")), &theme.chips.palette[0]);
    }

    #[test]
    fn empty_palette_falls_back_instead_of_panicking() {
        let mut theme = Theme::default();
        theme.chips.palette.clear();
        assert_eq!(theme.chip_style(Some("languages")), &FALLBACK_CHIP_STYLE);
        assert_eq!(theme.chip_style(None), &FALLBACK_CHIP_STYLE);
    }

    #[test]
    fn missing_theme_file_is_an_io_error() {
        let err = Theme::from_file("/definitely/not/here/theme.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
