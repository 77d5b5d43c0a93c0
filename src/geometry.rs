use crate::error::ExportError;
use serde::{Deserialize, Serialize};
use vitae_types::{Rect, Size};

/// Share of the content width given to the main column.
pub const MAIN_COLUMN_SHARE: f32 = 0.62;
/// Share of the content width left empty between the columns.
pub const GUTTER_SHARE: f32 = 0.05;
/// Share of the content width given to the side column.
pub const SIDE_COLUMN_SHARE: f32 = 0.33;

/// Page size and margin in points (1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// Column boxes derived from a validated [`PageGeometry`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnLayout {
    /// Everything inside the margins.
    pub content: Rect,
    pub main_x: f32,
    pub main_width: f32,
    pub side_x: f32,
    pub side_width: f32,
}

impl PageGeometry {
    pub fn a4() -> Self {
        Self {
            width: 595.0,
            height: 842.0,
            margin: 36.0,
        }
    }

    pub fn letter() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            margin: 36.0,
        }
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Lowest y a column may draw to before the content overflows the page.
    pub fn content_bottom(&self) -> f32 {
        self.height - self.margin
    }

    /// Rejects sizes that cannot hold a positive-width column.
    pub fn validate(&self) -> Result<(), ExportError> {
        let invalid = |reason: String| Err(ExportError::InvalidGeometry(reason));
        if !(self.width.is_finite() && self.height.is_finite() && self.margin.is_finite()) {
            return invalid(format!(
                "dimensions must be finite, got {}x{} with margin {}",
                self.width, self.height, self.margin
            ));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return invalid(format!(
                "page must have a positive size, got {}x{}",
                self.width, self.height
            ));
        }
        if self.margin < 0.0 {
            return invalid(format!("margin must not be negative, got {}", self.margin));
        }
        if self.margin >= self.width / 2.0 || self.margin >= self.height / 2.0 {
            return invalid(format!(
                "margin {} leaves no content area on a {}x{} page",
                self.margin, self.width, self.height
            ));
        }
        Ok(())
    }

    /// Splits the content area into main column, gutter and side column.
    pub fn columns(&self) -> Result<ColumnLayout, ExportError> {
        self.validate()?;
        let content_width = self.content_width();
        let main_width = content_width * MAIN_COLUMN_SHARE;
        let gutter = content_width * GUTTER_SHARE;
        let side_width = content_width * SIDE_COLUMN_SHARE;
        Ok(ColumnLayout {
            content: Rect::new(
                self.margin,
                self.margin,
                content_width,
                self.height - 2.0 * self.margin,
            ),
            main_x: self.margin,
            main_width,
            side_x: self.margin + main_width + gutter,
            side_width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_columns_fit_inside_the_margins() {
        let geometry = PageGeometry::a4();
        let columns = geometry.columns().unwrap();
        assert_eq!(columns.main_x, 36.0);
        assert!((columns.main_width - 523.0 * 0.62).abs() < 1e-3);
        assert!(columns.main_x + columns.main_width < columns.side_x);
        assert!(columns.side_x + columns.side_width <= geometry.width - geometry.margin + 1e-3);
    }

    #[test]
    fn rejects_degenerate_geometry() {
        let cases = [
            PageGeometry { width: 0.0, height: 842.0, margin: 36.0 },
            PageGeometry { width: 595.0, height: -1.0, margin: 36.0 },
            PageGeometry::a4().with_margin(-2.0),
            PageGeometry::a4().with_margin(297.5),
            PageGeometry { width: 595.0, height: 60.0, margin: 30.0 },
            PageGeometry { width: f32::INFINITY, height: 842.0, margin: 36.0 },
            PageGeometry::a4().with_margin(f32::NAN),
        ];
        for geometry in cases {
            assert!(
                matches!(geometry.validate(), Err(ExportError::InvalidGeometry(_))),
                "{geometry:?} should be rejected"
            );
        }
    }

    #[test]
    fn zero_margin_is_allowed() {
        assert!(PageGeometry::a4().with_margin(0.0).validate().is_ok());
        assert!(PageGeometry::letter().validate().is_ok());
    }
}
