//! Server-side chart rendering with plotters.
//!
//! Every chart is drawn into an in-memory SVG document. Categorical x axes
//! use segmented coordinates so bars and line points sit at the center of
//! their label's segment.

use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;

use crate::api::{BinnedCategory, Covariate, MonthlyAggregate, UsageShare};
use crate::error::{DashboardError, DashboardResult};
use crate::render::format::format_axis_tick;

pub const USAGE_CHART_SIZE: (u32, u32) = (1000, 500);
pub const MONTHLY_CHART_SIZE: (u32, u32) = (1000, 500);
pub const BINS_CHART_SIZE: (u32, u32) = (1500, 600);

const FONT: &str = "sans-serif";

const CASUAL_BAR: RGBColor = RGBColor(0x43, 0x79, 0xF2);
const REGISTERED_BAR: RGBColor = RGBColor(0xFF, 0xEB, 0x00);

const CASUAL_LINE: RGBColor = RGBColor(0x72, 0xBC, 0xD4);
const REGISTERED_LINE: RGBColor = RGBColor(0xFF, 0x63, 0x47);
const TOTAL_LINE: RGBColor = RGBColor(0x42, 0xFF, 0xBF);

fn usage_color(user_type: &str) -> RGBColor {
    match user_type {
        "casual" => CASUAL_BAR,
        _ => REGISTERED_BAR,
    }
}

fn covariate_color(covariate: Covariate) -> RGBColor {
    match covariate {
        Covariate::Temperature => RED,
        Covariate::Humidity => BLUE,
        Covariate::Windspeed => GREEN,
    }
}

/// Upper bound of a count axis: 10% headroom for the value labels, and a
/// unit range when everything is zero.
fn y_axis_max(values: impl Iterator<Item = u64>) -> f64 {
    let max = values.max().unwrap_or(0) as f64;
    if max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

/// Segmented x range with exactly `n` segments (at least one).
/// Integer ranges in plotters include their end point.
fn segments(n: usize) -> std::ops::Range<usize> {
    0..n.saturating_sub(1)
}

fn segment_label(value: &SegmentValue<usize>, labels: &[String]) -> String {
    match value {
        SegmentValue::CenterOf(idx) => labels.get(*idx).cloned().unwrap_or_default(),
        _ => String::new(),
    }
}

fn bar(idx: usize, height: f64, color: RGBColor, margin: u32) -> Rectangle<(SegmentValue<usize>, f64)> {
    let mut rect = Rectangle::new(
        [
            (SegmentValue::Exact(idx), 0.0),
            (SegmentValue::Exact(idx + 1), height),
        ],
        color.filled(),
    );
    rect.set_margin(0, 0, margin, margin);
    rect
}

/// Draw the casual-vs-registered bars, each annotated with its value.
pub fn draw_usage_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    shares: &[UsageShare],
) -> DashboardResult<()> {
    root.fill(&WHITE).map_err(DashboardError::render)?;

    let labels: Vec<String> = shares.iter().map(|s| s.user_type.clone()).collect();
    let y_max = y_axis_max(shares.iter().map(|s| s.sum));

    let mut chart = ChartBuilder::on(root)
        .caption("Total Casual and Registered Counts", (FONT, 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(100)
        .build_cartesian_2d(segments(shares.len()).into_segmented(), 0f64..y_max)
        .map_err(DashboardError::render)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len().max(1))
        .x_label_formatter(&|v| segment_label(v, &labels))
        .y_label_formatter(&|v| format_axis_tick(*v))
        .draw()
        .map_err(DashboardError::render)?;

    let value_style = (FONT, 16)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));

    for (idx, share) in shares.iter().enumerate() {
        let height = share.sum as f64;
        chart
            .draw_series(std::iter::once(bar(idx, height, usage_color(&share.user_type), 60)))
            .map_err(DashboardError::render)?;
        chart
            .draw_series(std::iter::once(Text::new(
                share.formatted.clone(),
                (SegmentValue::CenterOf(idx), height),
                value_style.clone(),
            )))
            .map_err(DashboardError::render)?;
    }

    Ok(())
}

/// Draw the three monthly series with markers, legend and grid.
pub fn draw_monthly_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    months: &[MonthlyAggregate],
) -> DashboardResult<()> {
    root.fill(&WHITE).map_err(DashboardError::render)?;

    let labels: Vec<String> = months.iter().map(|m| m.month_name.clone()).collect();
    let y_max = y_axis_max(months.iter().map(|m| m.total.max(m.casual).max(m.registered)));

    let mut chart = ChartBuilder::on(root)
        .caption("Number of Cyclists Over Last 10 Months", (FONT, 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(100)
        .build_cartesian_2d(segments(months.len()).into_segmented(), 0f64..y_max)
        .map_err(DashboardError::render)?;

    chart
        .configure_mesh()
        .x_labels(labels.len().max(1))
        .x_label_formatter(&|v| segment_label(v, &labels))
        .y_label_formatter(&|v| format_axis_tick(*v))
        .x_desc("Months")
        .y_desc("Number of Cyclists")
        .label_style((FONT, 13))
        .draw()
        .map_err(DashboardError::render)?;

    let series: [(&str, RGBColor, fn(&MonthlyAggregate) -> u64); 3] = [
        ("Casual Cyclist", CASUAL_LINE, |m| m.casual),
        ("Registered Cyclist", REGISTERED_LINE, |m| m.registered),
        ("Total Casual & Registered Cyclist", TOTAL_LINE, |m| m.total),
    ];

    for (name, color, value) in series {
        let points: Vec<(SegmentValue<usize>, f64)> = months
            .iter()
            .enumerate()
            .map(|(idx, m)| (SegmentValue::CenterOf(idx), value(m) as f64))
            .collect();

        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
            .map_err(DashboardError::render)?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        chart
            .draw_series(points.into_iter().map(|p| Circle::new(p, 4, color.filled())))
            .map_err(DashboardError::render)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(DashboardError::render)?;

    Ok(())
}

/// Draw one covariate's bin counts into its panel.
fn draw_bin_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    category: &BinnedCategory,
) -> DashboardResult<()> {
    let labels: Vec<String> = category.bins.iter().map(|b| b.label.clone()).collect();
    let y_max = y_axis_max(category.bins.iter().map(|b| b.count as u64));
    let color = covariate_color(category.covariate);

    let mut chart = ChartBuilder::on(area)
        .caption(category.covariate.title(), (FONT, 22))
        .margin(15)
        .x_label_area_size(130)
        .y_label_area_size(60)
        .build_cartesian_2d(segments(labels.len()).into_segmented(), 0f64..y_max)
        .map_err(DashboardError::render)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len().max(1))
        .x_label_formatter(&|v| segment_label(v, &labels))
        .x_label_style((FONT, 14).into_font().transform(FontTransform::Rotate90))
        .y_label_formatter(&|v| format_axis_tick(*v))
        .draw()
        .map_err(DashboardError::render)?;

    chart
        .draw_series(
            category
                .bins
                .iter()
                .enumerate()
                .map(|(idx, bin)| bar(idx, bin.count as f64, color, 8)),
        )
        .map_err(DashboardError::render)?;

    Ok(())
}

/// Draw the bin charts side by side, one panel per covariate.
pub fn draw_bins_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    categories: &[BinnedCategory],
) -> DashboardResult<()> {
    root.fill(&WHITE).map_err(DashboardError::render)?;

    let panels = root.split_evenly((1, categories.len().max(1)));
    for (area, category) in panels.iter().zip(categories) {
        draw_bin_panel(area, category)?;
    }

    Ok(())
}

fn render_svg<F>(size: (u32, u32), draw: F) -> DashboardResult<String>
where
    F: FnOnce(&DrawingArea<SVGBackend<'_>, Shift>) -> DashboardResult<()>,
{
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        draw(&root)?;
        root.present().map_err(DashboardError::render)?;
    }
    Ok(svg)
}

/// Render the casual-vs-registered bar chart to an SVG document.
pub fn render_usage_chart(shares: &[UsageShare]) -> DashboardResult<String> {
    render_svg(USAGE_CHART_SIZE, |root| draw_usage_chart(root, shares))
}

/// Render the monthly line chart to an SVG document.
pub fn render_monthly_chart(months: &[MonthlyAggregate]) -> DashboardResult<String> {
    render_svg(MONTHLY_CHART_SIZE, |root| draw_monthly_chart(root, months))
}

/// Render the three-panel bin chart row to an SVG document.
pub fn render_bins_chart(categories: &[BinnedCategory]) -> DashboardResult<String> {
    render_svg(BINS_CHART_SIZE, |root| draw_bins_chart(root, categories))
}
