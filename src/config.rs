use std::path::PathBuf;
use std::time::Duration;

use crate::types::palette::parse_hex_color;

const DEFAULT_DATA_PATH: &str = "Strava_All_ActivitiesNew.xlsx";
const DEFAULT_CHART_BACKGROUND: &str = "#FFFFFF";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub cache_ttl: Duration,
    pub cache_eviction_interval: Duration,
    pub window_weeks: u32,
    pub recent_limit: usize,
    pub chart_width: u32,
    pub chart_height: u32,
    /// `#RRGGBB` behind the chart, in both the SVG and the PNG export.
    pub chart_background: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            cache_ttl: Duration::from_secs(1800),
            cache_eviction_interval: Duration::from_secs(300),
            window_weeks: 12,
            recent_limit: 10,
            chart_width: 900,
            chart_height: 420,
            chart_background: DEFAULT_CHART_BACKGROUND.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = env_parse("PORT").unwrap_or(defaults.port);

        let data_path = std::env::var("DATA_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_path);

        let cache_ttl = env_parse("CACHE_TTL_SECONDS")
            .map(Duration::from_secs)
            .unwrap_or(defaults.cache_ttl);

        let cache_eviction_interval = env_parse("CACHE_EVICTION_INTERVAL_SECONDS")
            .filter(|secs: &u64| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.cache_eviction_interval);

        let window_weeks = env_parse("WINDOW_WEEKS")
            .filter(|weeks: &u32| *weeks > 0)
            .unwrap_or(defaults.window_weeks);

        let recent_limit = env_parse("RECENT_LIMIT").unwrap_or(defaults.recent_limit);

        let chart_width = env_parse("CHART_WIDTH").unwrap_or(defaults.chart_width);
        let chart_height = env_parse("CHART_HEIGHT").unwrap_or(defaults.chart_height);
        let chart_background = std::env::var("CHART_BACKGROUND")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| parse_hex_color(s).is_some())
            .unwrap_or(defaults.chart_background);

        Self {
            port,
            data_path,
            cache_ttl,
            cache_eviction_interval,
            window_weeks,
            recent_limit,
            chart_width,
            chart_height,
            chart_background,
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
}
