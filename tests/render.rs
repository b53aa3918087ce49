mod common;

use activity_dash::pipeline::aggregate::week_label;
use activity_dash::pipeline::rasterize::rasterize;
use activity_dash::pipeline::render::{escape, render_chart_svg};
use activity_dash::types::chart::{ChartOptions, OutputConfig};
use activity_dash::types::filter::Metric;
use activity_dash::types::weekly::WeeklyAggregate;
use common::date;

fn weeks() -> Vec<WeeklyAggregate> {
    [(date(2024, 6, 3), 95.0, 21.5), (date(2024, 6, 10), 150.0, 30.0)]
        .into_iter()
        .map(|(start, moving_time_min, distance_km)| WeeklyAggregate {
            week_start: start,
            label: week_label(start),
            moving_time_min,
            distance_km,
            elevation_gain_m: 120.0,
            activity_count: 2,
        })
        .collect()
}

#[test]
fn chart_has_line_area_and_drop_lines() {
    let svg = render_chart_svg(&weeks(), Metric::MovingTime, &ChartOptions::new(900, 420)).expect("svg");

    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains(r##"stroke="#FC5200""##));
    assert!(svg.contains("rgba(252, 82, 0, 0.2)"));
    assert_eq!(svg.matches("stroke-dasharray").count(), 2);
    assert!(svg.contains(">03/06<"));
    assert!(svg.contains(">10/06<"));
    // 150 minutes rounds up to a 3 hour axis.
    assert!(svg.contains(">3.0<"));
}

#[test]
fn distance_chart_uses_its_own_colour() {
    let svg = render_chart_svg(&weeks(), Metric::Distance, &ChartOptions::new(900, 420)).expect("svg");

    assert!(svg.contains(r##"stroke="#00A9F1""##));
    assert!(svg.contains("rgba(0, 169, 241, 0.2)"));
    assert!(svg.contains(">30.0<"));
}

#[test]
fn points_link_back_to_their_week() {
    let mut options = ChartOptions::new(900, 420);
    options.link_base = Some("/?filter=all&metric=distance&week=".to_string());
    options.selected = Some(date(2024, 6, 3));

    let svg = render_chart_svg(&weeks(), Metric::Distance, &options).expect("svg");

    assert!(svg.contains(r#"href="/?filter=all&amp;metric=distance&amp;week=2024-06-03""#));
    assert!(svg.contains(r#"href="/?filter=all&amp;metric=distance&amp;week=2024-06-10""#));
    assert_eq!(svg.matches("stroke-width=\"2\"").count(), 1);
}

#[test]
fn empty_chart_renders_without_points() {
    let svg = render_chart_svg(&[], Metric::MovingTime, &ChartOptions::new(900, 420)).expect("svg");

    assert!(svg.contains("No activities in this period"));
    assert!(!svg.contains("<circle"));
    assert!(svg.contains(">0.0<"));
}

#[test]
fn invalid_viewport_is_rejected() {
    assert!(render_chart_svg(&weeks(), Metric::Distance, &ChartOptions::new(40, 40)).is_err());
}

#[test]
fn chart_rasterizes_to_png() {
    let options = ChartOptions::new(600, 300);
    let svg = render_chart_svg(&weeks(), Metric::MovingTime, &options).expect("svg");

    let png = rasterize(
        &svg,
        &OutputConfig {
            width: 600,
            height: 300,
            background: Some((255, 255, 255, 255)),
        },
    )
    .expect("png");

    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn chart_background_carries_into_the_png() {
    let mut options = ChartOptions::new(600, 300);
    options.background = "#102030".to_string();
    let svg = render_chart_svg(&weeks(), Metric::Distance, &options).expect("svg");
    assert!(svg.contains(r##"fill="#102030""##));

    let output = OutputConfig::for_chart(&options);
    assert_eq!(output.background, Some((0x10, 0x20, 0x30, 255)));
    let png = rasterize(&svg, &output).expect("png");

    let pixmap = tiny_skia::Pixmap::decode_png(&png).expect("decode");
    let corner = pixmap.pixel(0, 0).expect("pixel");
    assert_eq!((corner.red(), corner.green(), corner.blue(), corner.alpha()), (0x10, 0x20, 0x30, 255));
}

#[test]
fn unparsable_background_leaves_png_transparent() {
    let mut options = ChartOptions::new(600, 300);
    options.background = "teal-ish".to_string();

    assert_eq!(OutputConfig::for_chart(&options).background, None);
}

#[test]
fn escape_handles_markup() {
    assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
}
