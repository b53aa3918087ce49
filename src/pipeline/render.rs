use std::fmt::Write;

use crate::error::RenderError;
use crate::pipeline::ticks::{axis_max, y_ticks};
use crate::types::chart::ChartOptions;
use crate::types::filter::Metric;
use crate::types::palette::Palette;
use crate::types::weekly::{AxisTick, WeeklyAggregate};

const AXIS_COLOR: &str = "#9AA0A6";
const GRID_COLOR: &str = "#ECEFF1";
const TEXT_COLOR: &str = "#37474F";
const FONT_FAMILY: &str = "DejaVu Sans, Helvetica, Arial, sans-serif";
const SELECTED_SHADE: f64 = 0.35;

#[derive(Clone, Copy)]
struct Plot {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Plot {
    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }
}

struct PlottedWeek<'a> {
    week: &'a WeeklyAggregate,
    x: f64,
    y: f64,
    value: f64,
}

/// Renders the weekly series for `metric` as a standalone SVG document.
///
/// Draws, back to front: grid and ticks, the area fill down to zero, a dotted
/// drop line under every point, the series line, and the point markers.
pub fn render_chart_svg(
    weeks: &[WeeklyAggregate],
    metric: Metric,
    options: &ChartOptions,
) -> Result<String, RenderError> {
    let width = options.width as f64;
    let height = options.height as f64;
    let plot = Plot {
        left: options.padding_left as f64,
        top: options.padding_top as f64,
        width: width - (options.padding_left + options.padding_right) as f64,
        height: height - (options.padding_top + options.padding_bottom) as f64,
    };
    if plot.width <= 0.0 || plot.height <= 0.0 {
        return Err(RenderError::SvgError("Invalid viewport size".to_string()));
    }

    let palette = metric.palette();
    let ticks = y_ticks(weeks, metric);
    let y_max = axis_max(&ticks, metric);
    let points = plot_weeks(weeks, metric, plot, y_max);
    let coords: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{font}">"#,
        w = options.width,
        h = options.height,
        font = FONT_FAMILY
    );
    let _ = write!(
        svg,
        r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
        options.width,
        options.height,
        escape(&options.background)
    );

    svg.push_str(&build_y_axis(&ticks, plot, y_max));
    svg.push_str(&build_axis_titles(metric, plot, height));

    if points.is_empty() {
        let _ = write!(
            svg,
            r#"<text x="{:.2}" y="{:.2}" fill="{}" font-size="14" text-anchor="middle">No activities in this period</text>"#,
            plot.left + plot.width / 2.0,
            plot.top + plot.height / 2.0,
            AXIS_COLOR
        );
    } else {
        svg.push_str(&build_area(&coords, plot.bottom(), &palette));
        svg.push_str(&build_drop_lines(&coords, plot.bottom(), &palette));
        let _ = write!(
            svg,
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{:.1}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            build_polyline_path(&coords),
            palette.line,
            options.line_width
        );
        svg.push_str(&build_x_labels(&points, plot));
        svg.push_str(&build_markers(&points, metric, &palette, options));
    }

    svg.push_str("</svg>");
    Ok(svg)
}

fn plot_weeks(weeks: &[WeeklyAggregate], metric: Metric, plot: Plot, y_max: f64) -> Vec<PlottedWeek<'_>> {
    let slot = plot.width / weeks.len().max(1) as f64;
    weeks
        .iter()
        .enumerate()
        .map(|(idx, week)| {
            let value = week.value(metric).max(0.0);
            PlottedWeek {
                week,
                x: plot.left + slot * (idx as f64 + 0.5),
                y: plot.bottom() - (value / y_max).clamp(0.0, 1.0) * plot.height,
                value,
            }
        })
        .collect()
}

fn build_y_axis(ticks: &[AxisTick], plot: Plot, y_max: f64) -> String {
    let mut out = String::new();
    for tick in ticks {
        let y = plot.bottom() - (tick.value / y_max).clamp(0.0, 1.0) * plot.height;
        let _ = write!(
            out,
            r#"<line x1="{:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="{}" stroke-width="1"/>"#,
            plot.left,
            plot.right(),
            GRID_COLOR,
            y = y
        );
        let _ = write!(
            out,
            r#"<text x="{:.2}" y="{:.2}" fill="{}" font-size="11" text-anchor="end">{}</text>"#,
            plot.left - 8.0,
            y + 4.0,
            TEXT_COLOR,
            escape(&tick.label)
        );
    }
    let _ = write!(
        out,
        r#"<line x1="{l:.2}" y1="{b:.2}" x2="{r:.2}" y2="{b:.2}" stroke="{c}" stroke-width="1"/>"#,
        l = plot.left,
        r = plot.right(),
        b = plot.bottom(),
        c = AXIS_COLOR
    );
    out
}

fn build_axis_titles(metric: Metric, plot: Plot, height: f64) -> String {
    let y_title = match metric {
        Metric::MovingTime => "Moving Time (h)",
        Metric::Distance => "Distance (km)",
    };
    let mid_y = plot.top + plot.height / 2.0;
    format!(
        r#"<text x="{:.2}" y="{:.2}" fill="{c}" font-size="12" text-anchor="middle">Week</text><text x="16" y="{:.2}" fill="{c}" font-size="12" text-anchor="middle" transform="rotate(-90 16 {:.2})">{}</text>"#,
        plot.left + plot.width / 2.0,
        height - 12.0,
        mid_y,
        mid_y,
        y_title,
        c = TEXT_COLOR
    )
}

fn build_area(coords: &[(f64, f64)], baseline: f64, palette: &Palette) -> String {
    let (Some(first), Some(last)) = (coords.first(), coords.last()) else {
        return String::new();
    };
    let mut path = format!("M {:.2} {:.2}", first.0, baseline);
    for (x, y) in coords {
        let _ = write!(path, " L {:.2} {:.2}", x, y);
    }
    let _ = write!(path, " L {:.2} {:.2} Z", last.0, baseline);
    format!(r#"<path d="{}" fill="{}" stroke="none"/>"#, path, palette.fill())
}

fn build_drop_lines(coords: &[(f64, f64)], baseline: f64, palette: &Palette) -> String {
    coords.iter().fold(String::new(), |mut out, (x, y)| {
        let _ = write!(
            out,
            r#"<line x1="{x:.2}" y1="{:.2}" x2="{x:.2}" y2="{:.2}" stroke="{}" stroke-width="1" stroke-dasharray="2,3"/>"#,
            baseline,
            y,
            palette.line,
            x = x
        );
        out
    })
}

fn build_x_labels(points: &[PlottedWeek<'_>], plot: Plot) -> String {
    points.iter().fold(String::new(), |mut out, point| {
        let _ = write!(
            out,
            r#"<text x="{:.2}" y="{:.2}" fill="{}" font-size="11" text-anchor="middle">{}</text>"#,
            point.x,
            plot.bottom() + 18.0,
            TEXT_COLOR,
            escape(&point.week.label)
        );
        out
    })
}

fn build_markers(points: &[PlottedWeek<'_>], metric: Metric, palette: &Palette, options: &ChartOptions) -> String {
    let mut out = String::new();
    for point in points {
        let selected = options.selected == Some(point.week.week_start);
        let radius = if selected {
            options.marker_radius * 1.75
        } else {
            options.marker_radius
        };
        let marker = if selected {
            format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" stroke="{}" stroke-width="2"/>"#,
                point.x,
                point.y,
                radius,
                palette.line,
                palette.shade(SELECTED_SHADE)
            )
        } else {
            format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
                point.x, point.y, radius, palette.line
            )
        };
        let title = format!(
            "<title>{} {}: {}</title>",
            escape(&point.week.label),
            metric.label(),
            metric.format_tick(point.value)
        );

        match &options.link_base {
            Some(base) => {
                let href = format!("{}{}", base, point.week.week_start.format("%Y-%m-%d"));
                // Transparent hit area so the point is easy to click.
                let _ = write!(
                    out,
                    r#"<a href="{}" data-week="{}">{}<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="white" fill-opacity="0"/>{}</a>"#,
                    escape(&href),
                    point.week.week_start.format("%Y-%m-%d"),
                    title,
                    point.x,
                    point.y,
                    options.marker_radius * 3.0,
                    marker
                );
            }
            None => {
                let _ = write!(out, "<g>{}{}</g>", title, marker);
            }
        }
    }
    out
}

fn build_polyline_path(points: &[(f64, f64)]) -> String {
    points.iter().enumerate().fold(String::new(), |mut s, (i, (x, y))| {
        if i == 0 {
            let _ = write!(s, "M {:.2} {:.2}", x, y);
        } else {
            let _ = write!(s, " L {:.2} {:.2}", x, y);
        }
        s
    })
}

/// Escapes text for use in SVG/HTML content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
