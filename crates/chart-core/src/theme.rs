// File: crates/chart-core/src/theme.rs
// Summary: Immutable chart styling (figure size, fonts, grid, palette) shared by every render call.

use skia_safe as skia;

use crate::types::{DPI, FIGURE_HEIGHT_IN, FIGURE_WIDTH_IN};

/// All sizes are in points (1/72 inch) and converted to pixels with [`Theme::px`].
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub font_families: &'static [&'static str],

    pub dpi: f32,
    pub figure_in: (f32, f32),
    /// Whitespace kept around the content when tightly framing the figure, in inches.
    pub pad_in: f32,

    pub title_pt: f32,
    pub label_pt: f32,
    pub tick_pt: f32,
    pub legend_pt: f32,
    pub title_pad_pt: f32,
    pub label_pad_pt: f32,
    pub tick_len_pt: f32,
    pub tick_pad_pt: f32,
    pub line_pt: f32,

    pub grid_pt: f32,
    pub grid_dash_pt: (f32, f32),
    pub grid_alpha: f32,

    pub max_x_ticks: usize,
    pub max_y_ticks: usize,
    /// Fraction of the data span added on each side of both axes.
    pub axis_margin: f64,

    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,

    pub insertion: skia::Color,
    pub deletion: skia::Color,
}

impl Theme {
    /// White figure, dark-blue insertion and neon-yellow deletion lines, dashed faint grid.
    pub fn benchmark() -> Self {
        Self {
            font_families: &["DejaVu Sans", "Arial", "Helvetica", "Roboto", "Segoe UI", "sans-serif"],

            dpi: DPI,
            figure_in: (FIGURE_WIDTH_IN, FIGURE_HEIGHT_IN),
            pad_in: 0.1,

            title_pt: 14.0,
            label_pt: 12.0,
            tick_pt: 10.0,
            legend_pt: 10.0,
            title_pad_pt: 20.0,
            label_pad_pt: 15.0,
            tick_len_pt: 3.5,
            tick_pad_pt: 3.5,
            line_pt: 1.0,

            grid_pt: 0.8,
            grid_dash_pt: (2.96, 1.28),
            grid_alpha: 0.3,

            max_x_ticks: 9,
            max_y_ticks: 9,
            axis_margin: 0.05,

            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 176, 176, 176),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),

            insertion: skia::Color::from_argb(255, 0x07, 0x3d, 0x64),
            deletion: skia::Color::from_argb(255, 0xa6, 0xac, 0x03),
        }
    }

    /// Convert points to pixels at this theme's DPI.
    #[inline]
    pub fn px(&self, pt: f32) -> f32 {
        pt * self.dpi / 72.0
    }

    /// Surface size in pixels for the configured figure size and DPI.
    pub fn size_px(&self) -> (i32, i32) {
        (
            (self.figure_in.0 * self.dpi).round() as i32,
            (self.figure_in.1 * self.dpi).round() as i32,
        )
    }

    /// Grid color with the grid opacity applied.
    pub fn grid_color(&self) -> skia::Color {
        self.grid.with_a((self.grid_alpha.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::benchmark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HEIGHT, WIDTH};

    #[test]
    fn default_figure_is_14_by_8_inches_at_150_dpi() {
        let theme = Theme::default();
        assert_eq!(theme.size_px(), (WIDTH, HEIGHT));
        assert_eq!(theme.size_px(), (2100, 1200));
    }

    #[test]
    fn points_scale_with_dpi() {
        let theme = Theme::default();
        assert!((theme.px(72.0) - 150.0).abs() < 1e-4);
    }

    #[test]
    fn grid_is_faint() {
        assert_eq!(Theme::default().grid_color().a(), 77);
    }
}
