// File: crates/chart-core/src/geometry.rs
// Summary: Plot-area rectangle and data-to-pixel mapping.

use skia_safe as skia;

use crate::axis::Axis;
use crate::types::Insets;

/// Pixel rectangle the series are drawn into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotArea {
    /// Shrink a `width` x `height` surface by `insets`. The result keeps at least one pixel
    /// in each direction even when the insets overrun the surface.
    pub fn inset(width: i32, height: i32, insets: &Insets) -> Self {
        let (w, h) = (width as f32, height as f32);
        let left = insets.left.min(w - 1.0).max(0.0);
        let top = insets.top.min(h - 1.0).max(0.0);
        let right = (w - insets.right).max(left + 1.0);
        let bottom = (h - insets.bottom).max(top + 1.0);
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    pub fn to_rect(&self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }

    /// Map a data x value to a pixel column.
    #[inline]
    pub fn map_x(&self, x: f64, axis: &Axis) -> f32 {
        self.left + (axis.fraction(x) as f32) * self.width()
    }

    /// Map a data y value to a pixel row (y grows upwards in data space).
    #[inline]
    pub fn map_y(&self, y: f64, axis: &Axis) -> f32 {
        self.bottom - (axis.fraction(y) as f32) * self.height()
    }
}
