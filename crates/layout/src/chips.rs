//! Greedy row packing for pill-shaped labels.

use crate::metrics::TextMetrics;
use vitae_style::FontDescriptor;
use vitae_types::Size;

/// A chip placed on a row, `x` relative to the row start.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedChip {
    /// Position of the chip in the input slice.
    pub index: usize,
    pub x: f32,
    pub size: Size,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChipRow {
    pub chips: Vec<PackedChip>,
    /// Tallest chip in the row.
    pub height: f32,
}

impl ChipRow {
    /// Horizontal extent of the row from its first chip's left edge to the last chip's right edge.
    pub fn used_width(&self) -> f32 {
        self.chips
            .last()
            .map(|c| c.x + c.size.width)
            .unwrap_or(0.0)
    }
}

/// First-fit, order-preserving packer.
///
/// Chips are never reordered and never dropped: a chip wider than the row is
/// placed alone on its own row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChipPacker {
    pub row_width: f32,
    /// Horizontal gap between neighbouring chips.
    pub spacing: f32,
    /// Padding added on each side of the label text.
    pub padding_x: f32,
    pub padding_y: f32,
}

impl ChipPacker {
    pub fn new(row_width: f32, spacing: f32) -> Self {
        Self {
            row_width,
            spacing,
            padding_x: 0.0,
            padding_y: 0.0,
        }
    }

    pub fn with_padding(mut self, padding_x: f32, padding_y: f32) -> Self {
        self.padding_x = padding_x;
        self.padding_y = padding_y;
        self
    }

    /// Rendered size of a chip: label box plus padding on every side.
    pub fn chip_size<M: TextMetrics + ?Sized>(
        &self,
        metrics: &M,
        label: &str,
        font: &FontDescriptor,
    ) -> Size {
        Size::new(
            metrics.line_width(label, font) + 2.0 * self.padding_x,
            metrics.line_height(font) + 2.0 * self.padding_y,
        )
    }

    /// Measures and packs text labels in the given order.
    pub fn pack_labels<M: TextMetrics + ?Sized, S: AsRef<str>>(
        &self,
        metrics: &M,
        labels: &[S],
        font: &FontDescriptor,
    ) -> Vec<ChipRow> {
        let sizes: Vec<Size> = labels
            .iter()
            .map(|l| self.chip_size(metrics, l.as_ref(), font))
            .collect();
        self.pack(&sizes)
    }

    /// Packs already measured chip sizes into rows.
    pub fn pack(&self, chips: &[Size]) -> Vec<ChipRow> {
        let mut rows = Vec::new();
        let mut row = ChipRow::default();
        let mut cursor_x = 0.0f32;

        for (index, size) in chips.iter().enumerate() {
            if cursor_x + size.width > self.row_width && cursor_x > 0.0 {
                rows.push(std::mem::take(&mut row));
                cursor_x = 0.0;
            }
            row.height = row.height.max(size.height);
            row.chips.push(PackedChip {
                index,
                x: cursor_x,
                size: *size,
            });
            cursor_x += size.width + self.spacing;
        }

        if !row.chips.is_empty() {
            rows.push(row);
        }
        log::debug!(
            "packed {} chips into {} rows of width {:.1}",
            chips.len(),
            rows.len(),
            self.row_width
        );
        rows
    }
}
