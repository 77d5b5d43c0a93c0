//! Path construction for the filled shapes the page uses.
//!
//! All inputs are in top-left page coordinates; the emitted operands are in
//! PDF user space.

use lopdf::content::Operation;
use vitae_render_core::utils::flip_y;
use vitae_types::{Point, Rect};

/// Bézier control distance for a quarter circle of radius 1.
const KAPPA: f32 = 0.552_284_8;

fn op(operator: &str, operands: &[f32]) -> Operation {
    Operation::new(operator, operands.iter().map(|v| (*v).into()).collect())
}

/// Closed rounded-rectangle path. The radius is clamped to half the shorter side.
pub(crate) fn rounded_rect(rect: Rect, radius: f32, page_height: f32) -> Vec<Operation> {
    let r = radius.max(0.0).min(rect.width / 2.0).min(rect.height / 2.0);
    let left = rect.x;
    let right = rect.right();
    let top = flip_y(rect.y, page_height);
    let bottom = flip_y(rect.bottom(), page_height);

    if r <= 0.0 {
        return vec![op("re", &[left, bottom, rect.width, rect.height])];
    }

    let k = r * KAPPA;
    vec![
        op("m", &[left + r, bottom]),
        op("l", &[right - r, bottom]),
        op("c", &[right - r + k, bottom, right, bottom + r - k, right, bottom + r]),
        op("l", &[right, top - r]),
        op("c", &[right, top - r + k, right - r + k, top, right - r, top]),
        op("l", &[left + r, top]),
        op("c", &[left + r - k, top, left, top - r + k, left, top - r]),
        op("l", &[left, bottom + r]),
        op("c", &[left, bottom + r - k, left + r - k, bottom, left + r, bottom]),
        Operation::new("h", vec![]),
    ]
}

/// Closed circle path built from four cubic curves.
pub(crate) fn circle(center: Point, radius: f32, page_height: f32) -> Vec<Operation> {
    let cx = center.x;
    let cy = flip_y(center.y, page_height);
    let r = radius.max(0.0);
    let k = r * KAPPA;
    vec![
        op("m", &[cx + r, cy]),
        op("c", &[cx + r, cy + k, cx + k, cy + r, cx, cy + r]),
        op("c", &[cx - k, cy + r, cx - r, cy + k, cx - r, cy]),
        op("c", &[cx - r, cy - k, cx - k, cy - r, cx, cy - r]),
        op("c", &[cx + k, cy - r, cx + r, cy - k, cx + r, cy]),
        Operation::new("h", vec![]),
    ]
}
