use serde::{Deserialize, Serialize};

use crate::types::activity::ActivityType;
use crate::types::palette::Palette;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityFilter {
    #[default]
    All,
    Cycling,
    Run,
}

impl ActivityFilter {
    pub const ALL: [ActivityFilter; 3] = [ActivityFilter::All, ActivityFilter::Cycling, ActivityFilter::Run];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Some(ActivityFilter::All),
            "cycling" | "ride" => Some(ActivityFilter::Cycling),
            "run" | "running" => Some(ActivityFilter::Run),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityFilter::All => "all",
            ActivityFilter::Cycling => "cycling",
            ActivityFilter::Run => "run",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityFilter::All => "All",
            ActivityFilter::Cycling => "Cycling",
            ActivityFilter::Run => "Run",
        }
    }

    pub fn matches(&self, activity_type: &ActivityType) -> bool {
        match self {
            ActivityFilter::All => true,
            ActivityFilter::Cycling => activity_type.is_cycling(),
            ActivityFilter::Run => *activity_type == ActivityType::Run,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[default]
    MovingTime,
    Distance,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::MovingTime, Metric::Distance];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "moving_time" | "movingtime" | "time" => Some(Metric::MovingTime),
            "distance" => Some(Metric::Distance),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::MovingTime => "moving_time",
            Metric::Distance => "distance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::MovingTime => "Moving Time",
            Metric::Distance => "Distance",
        }
    }

    /// Fixed y-axis tick spacing in the metric's stored unit
    /// (minutes for moving time, kilometres for distance).
    pub fn tick_step(&self) -> f64 {
        match self {
            Metric::MovingTime => 60.0,
            Metric::Distance => 1.0,
        }
    }

    pub fn format_tick(&self, value: f64) -> String {
        match self {
            Metric::MovingTime => format!("{:.1}", value / 60.0),
            Metric::Distance => format!("{:.1}", value),
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Metric::MovingTime => Palette::moving_time(),
            Metric::Distance => Palette::distance(),
        }
    }
}
