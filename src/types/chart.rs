use chrono::NaiveDate;

use crate::config::Config;
use crate::types::palette::parse_hex_color;

#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    pub padding_left: u32,
    pub padding_right: u32,
    pub padding_top: u32,
    pub padding_bottom: u32,
    pub line_width: f32,
    pub marker_radius: f32,
    /// Week highlighted on the chart.
    pub selected: Option<NaiveDate>,
    /// When set, every point links to `{link_base}{week_start}` so a click
    /// re-requests the page with that week selected.
    pub link_base: Option<String>,
    pub background: String,
}

impl ChartOptions {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            padding_left: 64,
            padding_right: 24,
            padding_top: 16,
            padding_bottom: 64,
            line_width: 3.0,
            marker_radius: 4.0,
            selected: None,
            link_base: None,
            background: "#FFFFFF".to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            background: config.chart_background.clone(),
            ..Self::new(config.chart_width, config.chart_height)
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub width: u32,
    pub height: u32,
    pub background: Option<(u8, u8, u8, u8)>,
}

impl OutputConfig {
    /// PNG export of a chart at its own size; an unparsable background
    /// leaves the pixmap transparent.
    pub fn for_chart(options: &ChartOptions) -> Self {
        Self {
            width: options.width,
            height: options.height,
            background: parse_hex_color(&options.background).map(|(r, g, b)| (r, g, b, 255)),
        }
    }
}
