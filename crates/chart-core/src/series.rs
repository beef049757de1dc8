// File: crates/chart-core/src/series.rs
// Summary: Line series model: (x, y) points plus the legend label and stroke used to draw them.

use skia_safe as skia;

#[derive(Clone, Debug)]
pub struct Series {
    /// Legend entry; empty labels are left out of the legend.
    pub label: String,
    pub color: skia::Color,
    /// Stroke width in points (scaled by the theme DPI when drawn).
    pub width_pt: f32,
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn line(label: impl Into<String>, color: skia::Color, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), color, width_pt: 1.0, data_xy: data }
    }

    pub fn with_width(mut self, width_pt: f32) -> Self {
        self.width_pt = width_pt.max(0.0);
        self
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// Keep every `stride`-th point, starting with the first.
    pub fn downsample_every(&self, stride: usize) -> Self {
        use crate::downsample::every_nth;
        let data = if stride > 1 { every_nth(&self.data_xy, stride) } else { self.data_xy.clone() };
        Series { label: self.label.clone(), color: self.color, width_pt: self.width_pt, data_xy: data }
    }
}
