// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (figure sizes, paddings).

/// Default figure width in inches.
pub const FIGURE_WIDTH_IN: f32 = 14.0;
/// Default figure height in inches.
pub const FIGURE_HEIGHT_IN: f32 = 8.0;
/// Default output resolution in dots per inch.
pub const DPI: f32 = 150.0;

/// Default surface width in pixels (14in at 150 DPI).
pub const WIDTH: i32 = 2100;
/// Default surface height in pixels (8in at 150 DPI).
pub const HEIGHT: i32 = 1200;

/// Distance in pixels from each surface edge to the plot area.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    /// Create new insets; negative values are clamped to zero.
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left: left.max(0.0), right: right.max(0.0), top: top.max(0.0), bottom: bottom.max(0.0) }
    }
    /// Same inset on all four sides.
    pub fn uniform(v: f32) -> Self { Self::new(v, v, v, v) }
}
