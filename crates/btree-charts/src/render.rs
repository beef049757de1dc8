// File: crates/btree-charts/src/render.rs
// Summary: The three chart renderers: single series, insertion/deletion comparison, cumulative time.

use std::fmt;
use std::path::{Path, PathBuf};

use chart_core::downsample::stride_for;
use chart_core::{Chart, Color, RenderOptions, Series, Theme};

use crate::error::{Error, Result};
use crate::measurement::MeasurementSeries;

pub const X_LABEL: &str = "Number of Nodes in Tree";
pub const Y_LABEL_PER_OP: &str = "Time per Operation (µs)";
pub const Y_LABEL_CUMULATIVE: &str = "Total Cumulative Time (µs)";

pub const INSERTION_LABEL: &str = "Insertion";
pub const DELETION_LABEL: &str = "Deletion";

pub const COMPARISON_TITLE: &str = "B-Tree Operation Performance Comparison";
pub const CUMULATIVE_TITLE: &str = "Cumulative Operation Time";

pub const COMPARISON_FILE: &str = "performance_comparison.png";
pub const CUMULATIVE_FILE: &str = "cumulative_time.png";

/// A chart written to disk and the series it drew, after downsampling.
#[derive(Clone, Debug)]
pub struct Rendered {
    pub path: PathBuf,
    pub series: Vec<Series>,
}

impl Rendered {
    pub fn points_per_series(&self) -> Vec<usize> {
        self.series.iter().map(Series::len).collect()
    }

    /// Y values of the `index`-th series as drawn.
    pub fn y_values(&self, index: usize) -> Vec<f64> {
        self.series.get(index).map(|s| s.data_xy.iter().map(|&(_, y)| y).collect()).unwrap_or_default()
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chart {} generated", self.path.display())
    }
}

/// One line of a chart before downsampling.
struct Line<'a> {
    label: &'a str,
    color: Color,
    data: Vec<(f64, f64)>,
}

/// Per-operation time of one series against node count.
pub fn render_single(
    series: &MeasurementSeries,
    title: &str,
    output: impl AsRef<Path>,
    color: Color,
    label: &str,
    theme: &Theme,
) -> Result<Rendered> {
    render_chart(single_chart(series, title, color, label, theme), output.as_ref(), theme)
}

/// Insertion and deletion per-operation times on shared axes, written to
/// `out_dir/performance_comparison.png`.
pub fn render_comparison(
    insert: &MeasurementSeries,
    delete: &MeasurementSeries,
    out_dir: impl AsRef<Path>,
    theme: &Theme,
) -> Result<Rendered> {
    let output = out_dir.as_ref().join(COMPARISON_FILE);
    render_chart(comparison_chart(insert, delete, theme), &output, theme)
}

/// Running total of operation time for both series, written to `out_dir/cumulative_time.png`.
pub fn render_cumulative(
    insert: &MeasurementSeries,
    delete: &MeasurementSeries,
    out_dir: impl AsRef<Path>,
    theme: &Theme,
) -> Result<Rendered> {
    let output = out_dir.as_ref().join(CUMULATIVE_FILE);
    render_chart(cumulative_chart(insert, delete, theme), &output, theme)
}

pub fn single_chart(series: &MeasurementSeries, title: &str, color: Color, label: &str, theme: &Theme) -> Chart {
    let stride = stride_for(series.len());
    let lines = vec![Line { label, color, data: series.xy() }];
    build_chart(title, Y_LABEL_PER_OP, lines, stride, theme)
}

/// The stride comes from the insertion series and is applied to both.
pub fn comparison_chart(insert: &MeasurementSeries, delete: &MeasurementSeries, theme: &Theme) -> Chart {
    let stride = stride_for(insert.len());
    let lines = vec![
        Line { label: INSERTION_LABEL, color: theme.insertion, data: insert.xy() },
        Line { label: DELETION_LABEL, color: theme.deletion, data: delete.xy() },
    ];
    build_chart(COMPARISON_TITLE, Y_LABEL_PER_OP, lines, stride, theme)
}

/// Downsampling follows [`comparison_chart`].
pub fn cumulative_chart(insert: &MeasurementSeries, delete: &MeasurementSeries, theme: &Theme) -> Chart {
    let stride = stride_for(insert.len());
    let lines = vec![
        Line { label: INSERTION_LABEL, color: theme.insertion, data: insert.cumulative().xy() },
        Line { label: DELETION_LABEL, color: theme.deletion, data: delete.cumulative().xy() },
    ];
    build_chart(CUMULATIVE_TITLE, Y_LABEL_CUMULATIVE, lines, stride, theme)
}

fn build_chart(title: &str, y_label: &str, lines: Vec<Line<'_>>, stride: usize, theme: &Theme) -> Chart {
    let mut chart = Chart::with_title(title);
    chart.x_axis.label = X_LABEL.to_string();
    chart.y_axis.label = y_label.to_string();

    for line in lines {
        let series = Series::line(line.label, line.color, line.data)
            .with_width(theme.line_pt)
            .downsample_every(stride);
        chart.add_series(series);
    }
    if stride > 1 {
        let kept: Vec<usize> = chart.series.iter().map(Series::len).collect();
        log::debug!("{title}: drawing every {stride}th point ({kept:?} kept)");
    }
    chart.autoscale_axes(theme.axis_margin);
    chart
}

fn render_chart(chart: Chart, output: &Path, theme: &Theme) -> Result<Rendered> {
    let opts = RenderOptions::for_theme(theme);
    chart
        .render_to_png(theme, &opts, output)
        .map_err(|source| Error::Render { path: output.to_path_buf(), source })?;

    Ok(Rendered { path: output.to_path_buf(), series: chart.series })
}
