// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::path::Path;

use skia_safe as skia;

use crate::error::RenderError;
use crate::geometry::PlotArea;
use crate::grid::{nice_ticks, Ticks};
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::Axis;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Draw title, axis labels, tick labels and legend text.
    pub draw_labels: bool,
}

impl RenderOptions {
    /// Surface size taken from the theme's figure size and DPI.
    pub fn for_theme(theme: &Theme) -> Self {
        let (width, height) = theme.size_px();
        Self { width, height, draw_labels: true }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, draw_labels: true }
    }
}

pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::new() }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axis ranges to the data, padded by `margin` of each span.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories as needed.
    pub fn render_to_png(
        &self,
        theme: &Theme,
        opts: &RenderOptions,
        output_png_path: impl AsRef<Path>,
    ) -> Result<(), RenderError> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(theme, opts)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|source| RenderError::Io { path: parent.to_path_buf(), source })?;
        }
        std::fs::write(path, &bytes).map_err(|source| RenderError::Io { path: path.to_path_buf(), source })?;
        log::debug!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    /// Render the chart to in-memory PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, theme: &Theme, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface { width: opts.width, height: opts.height })?;

        self.draw(surface.canvas(), theme, opts);

        // Snapshot and encode PNG
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    fn draw(&self, canvas: &skia::Canvas, theme: &Theme, opts: &RenderOptions) {
        canvas.clear(theme.background);

        let shaper = TextShaper::new(theme.font_families);
        let x_ticks = nice_ticks(self.x_axis.min, self.x_axis.max, theme.max_x_ticks);
        let y_ticks = nice_ticks(self.y_axis.min, self.y_axis.max, theme.max_y_ticks);

        let insets = layout_insets(&shaper, theme, opts, &self.title, &x_ticks, &y_ticks);
        let plot = PlotArea::inset(opts.width, opts.height, &insets);

        draw_grid(canvas, theme, &plot, &self.x_axis, &self.y_axis, &x_ticks, &y_ticks);
        for s in &self.series {
            draw_line_series(canvas, theme, &plot, &self.x_axis, &self.y_axis, s);
        }
        draw_frame(canvas, theme, &plot, &self.x_axis, &self.y_axis, &x_ticks, &y_ticks);

        if opts.draw_labels {
            draw_labels(canvas, &shaper, theme, &plot, self, &x_ticks, &y_ticks);
        }
        draw_legend(canvas, &shaper, theme, opts, &plot, &self.series);
    }
}

// ---- layout -----------------------------------------------------------------

/// Insets that leave exactly enough room for the title, axis labels and tick labels,
/// plus the theme padding, so the figure is framed tightly around its content.
fn layout_insets(
    shaper: &TextShaper,
    theme: &Theme,
    opts: &RenderOptions,
    title: &str,
    x_ticks: &Ticks,
    y_ticks: &Ticks,
) -> Insets {
    let pad = theme.pad_in * theme.dpi;
    let tick_len = theme.px(theme.tick_len_pt);
    if !opts.draw_labels {
        return Insets::uniform(pad + tick_len);
    }

    let tick_px = theme.px(theme.tick_pt);
    let label_px = theme.px(theme.label_pt);
    let tick_gap = theme.px(theme.tick_pad_pt);
    let label_pad = theme.px(theme.label_pad_pt);

    let tick_h = shaper.line_height(tick_px);
    let label_h = shaper.line_height(label_px);
    let y_tick_w = y_ticks
        .labels()
        .iter()
        .map(|t| shaper.measure_width(t, tick_px))
        .fold(0.0f32, f32::max);
    let last_x_w = x_ticks
        .labels()
        .last()
        .map(|t| shaper.measure_width(t, tick_px))
        .unwrap_or(0.0);

    let title_h = if title.is_empty() {
        0.0
    } else {
        shaper.line_height(theme.px(theme.title_pt)) + theme.px(theme.title_pad_pt)
    };

    let left = pad + label_h + label_pad + y_tick_w + tick_gap + tick_len;
    let bottom = pad + label_h + label_pad + tick_h + tick_gap + tick_len;
    // topmost y tick label overhangs the plot by half its height
    let top = pad + title_h.max(tick_h * 0.5);
    let right = pad + last_x_w * 0.5;
    Insets::new(left, right, top, bottom)
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(
    canvas: &skia::Canvas,
    theme: &Theme,
    plot: &PlotArea,
    x_axis: &Axis,
    y_axis: &Axis,
    x_ticks: &Ticks,
    y_ticks: &Ticks,
) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(theme.px(theme.grid_pt));
    paint.set_color(theme.grid_color());
    let (on, off) = theme.grid_dash_pt;
    paint.set_path_effect(skia::PathEffect::dash(&[theme.px(on), theme.px(off)], 0.0));

    // verticals
    for &x in &x_ticks.values {
        let px = plot.map_x(x, x_axis);
        canvas.draw_line((px, plot.top), (px, plot.bottom), &paint);
    }
    // horizontals
    for &y in &y_ticks.values {
        let py = plot.map_y(y, y_axis);
        canvas.draw_line((plot.left, py), (plot.right, py), &paint);
    }
}

/// Box around the plot area plus outward tick marks on the left and bottom edges.
fn draw_frame(
    canvas: &skia::Canvas,
    theme: &Theme,
    plot: &PlotArea,
    x_axis: &Axis,
    y_axis: &Axis,
    x_ticks: &Ticks,
    y_ticks: &Ticks,
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(theme.px(0.8));
    canvas.draw_rect(plot.to_rect(), &axis_paint);

    let mut tick_paint = axis_paint.clone();
    tick_paint.set_color(theme.tick);
    let len = theme.px(theme.tick_len_pt);
    for &x in &x_ticks.values {
        let px = plot.map_x(x, x_axis);
        canvas.draw_line((px, plot.bottom), (px, plot.bottom + len), &tick_paint);
    }
    for &y in &y_ticks.values {
        let py = plot.map_y(y, y_axis);
        canvas.draw_line((plot.left - len, py), (plot.left, py), &tick_paint);
    }
}

fn draw_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    theme: &Theme,
    plot: &PlotArea,
    chart: &Chart,
    x_ticks: &Ticks,
    y_ticks: &Ticks,
) {
    let tick_px = theme.px(theme.tick_pt);
    let label_px = theme.px(theme.label_pt);
    let title_px = theme.px(theme.title_pt);
    let tick_len = theme.px(theme.tick_len_pt);
    let tick_gap = theme.px(theme.tick_pad_pt);
    let label_pad = theme.px(theme.label_pad_pt);

    // Tick labels
    let x_label_top = plot.bottom + tick_len + tick_gap;
    for (v, text) in x_ticks.values.iter().zip(x_ticks.labels()) {
        shaper.draw_centered(canvas, &text, plot.map_x(*v, &chart.x_axis), x_label_top, tick_px, theme.tick);
    }
    let y_label_right = plot.left - tick_len - tick_gap;
    let mut y_tick_w = 0.0f32;
    for (v, text) in y_ticks.values.iter().zip(y_ticks.labels()) {
        y_tick_w = y_tick_w.max(shaper.measure_width(&text, tick_px));
        shaper.draw_right(canvas, &text, y_label_right, plot.map_y(*v, &chart.y_axis), tick_px, theme.tick);
    }

    // Axis labels
    let tick_h = shaper.line_height(tick_px);
    let label_h = shaper.line_height(label_px);
    let cx = (plot.left + plot.right) * 0.5;
    let cy = (plot.top + plot.bottom) * 0.5;
    shaper.draw_centered(canvas, &chart.x_axis.label, cx, x_label_top + tick_h + label_pad, label_px, theme.axis_label);
    let y_label_cx = y_label_right - y_tick_w - label_pad - label_h * 0.5;
    shaper.draw_vertical(canvas, &chart.y_axis.label, y_label_cx, cy, label_px, theme.axis_label);

    // Title
    if !chart.title.is_empty() {
        let title_h = shaper.line_height(title_px);
        let top = plot.top - theme.px(theme.title_pad_pt) - title_h;
        shaper.draw_centered(canvas, &chart.title, cx, top, title_px, theme.axis_label);
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    theme: &Theme,
    plot: &PlotArea,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((plot.map_x(x0, x_axis), plot.map_y(y0, y_axis)));

    for &(x, y) in data.iter().skip(1) {
        path.line_to((plot.map_x(x, x_axis), plot.map_y(y, y_axis)));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_stroke_width(theme.px(series.width_pt));
    stroke.set_color(series.color);

    canvas.save();
    canvas.clip_rect(plot.to_rect(), skia::ClipOp::Intersect, true);
    canvas.draw_path(&path, &stroke);
    canvas.restore();
}

/// Legend box in the upper-right corner of the plot, one row per labelled series.
fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    theme: &Theme,
    opts: &RenderOptions,
    plot: &PlotArea,
    series: &[Series],
) {
    let entries: Vec<&Series> = series.iter().filter(|s| !s.label.is_empty()).collect();
    if entries.is_empty() {
        return;
    }

    let size = theme.px(theme.legend_pt);
    let row_h = shaper.line_height(size).max(size * 1.2);
    let handle = theme.px(2.0 * theme.legend_pt);
    let gap = theme.px(0.8 * theme.legend_pt);
    let inner = theme.px(0.4 * theme.legend_pt);
    let outer = theme.px(0.5 * theme.legend_pt);

    let text_w = if opts.draw_labels {
        entries.iter().map(|s| shaper.measure_width(&s.label, size)).fold(0.0f32, f32::max)
    } else {
        0.0
    };
    let box_w = inner * 2.0 + handle + gap + text_w;
    let box_h = inner * 2.0 + row_h * entries.len() as f32;
    let right = plot.right - outer;
    let top = plot.top + outer;
    let rect = skia::Rect::from_ltrb(right - box_w, top, right, top + box_h);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.legend_background);
    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(theme.px(0.8));
    border.set_color(theme.legend_border);
    let radius = theme.px(2.0);
    canvas.draw_round_rect(rect, radius, radius, &fill);
    canvas.draw_round_rect(rect, radius, radius, &border);

    let mut line = skia::Paint::default();
    line.set_anti_alias(true);
    line.set_style(skia::paint::Style::Stroke);
    for (i, s) in entries.iter().enumerate() {
        let cy = top + inner + row_h * (i as f32 + 0.5);
        let x0 = rect.left() + inner;
        line.set_color(s.color);
        line.set_stroke_width(theme.px(s.width_pt));
        canvas.draw_line((x0, cy), (x0 + handle, cy), &line);
        if opts.draw_labels {
            let h = shaper.line_height(size);
            shaper.draw_left(canvas, &s.label, x0 + handle + gap, cy - h * 0.5, size, theme.axis_label);
        }
    }
}
