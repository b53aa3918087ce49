use chrono::NaiveDate;
use serde::Serialize;

use crate::config::Config;
use crate::error::RenderError;
use crate::pipeline::aggregate::{aggregate_weekly, peak_summary};
use crate::pipeline::recent::{recent_activities, ActivityCard};
use crate::pipeline::render::render_chart_svg;
use crate::pipeline::selection::{ResolvedSelection, Selection};
use crate::pipeline::ticks::y_ticks;
use crate::pipeline::window::{trailing_window, window_start};
use crate::types::activity::ActivityTable;
use crate::types::chart::ChartOptions;
use crate::types::filter::{ActivityFilter, Metric};
use crate::types::weekly::{AxisTick, PeakSummary, WeeklyAggregate};

/// Everything a single page view depends on besides the data and the date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardQuery {
    pub filter: ActivityFilter,
    pub metric: Metric,
    pub selection: Selection,
}

impl DashboardQuery {
    /// Page URL for this filter and metric, ending in `week=` so a week date
    /// can be appended.
    pub fn link_base(&self) -> String {
        format!(
            "/?filter={}&metric={}&week=",
            self.filter.as_str(),
            self.metric.as_str()
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DashboardSettings {
    pub window_weeks: u32,
    pub recent_limit: usize,
}

impl From<&Config> for DashboardSettings {
    fn from(config: &Config) -> Self {
        Self {
            window_weeks: config.window_weeks,
            recent_limit: config.recent_limit,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub today: NaiveDate,
    pub window_start: NaiveDate,
    pub filter: ActivityFilter,
    pub metric: Metric,
    pub total_records: usize,
    pub records_in_window: usize,
    pub weeks: Vec<WeeklyAggregate>,
    pub peak: Option<PeakSummary>,
    pub ticks: Vec<AxisTick>,
    pub selection: Option<ResolvedSelection>,
    pub recent: Vec<ActivityCard>,
}

pub fn build_dashboard(
    table: &ActivityTable,
    today: NaiveDate,
    query: &DashboardQuery,
    settings: DashboardSettings,
) -> Dashboard {
    let in_window = trailing_window(&table.records, today, settings.window_weeks);
    let weeks = aggregate_weekly(&in_window, query.filter);
    let peak = peak_summary(&weeks);
    let ticks = y_ticks(&weeks, query.metric);
    let selection = query.selection.resolve(&weeks);
    let recent = recent_activities(&table.records, settings.recent_limit);

    Dashboard {
        today,
        window_start: window_start(today, settings.window_weeks),
        filter: query.filter,
        metric: query.metric,
        total_records: table.len(),
        records_in_window: in_window.len(),
        weeks,
        peak,
        ticks,
        selection,
        recent,
    }
}

impl Dashboard {
    pub fn selected_week(&self) -> Option<&WeeklyAggregate> {
        self.selection.as_ref().map(|s| &s.week)
    }

    /// Renders this view's chart, highlighting the selected week.
    pub fn chart_svg(&self, mut options: ChartOptions) -> Result<String, RenderError> {
        options.selected = self.selected_week().map(|w| w.week_start);
        render_chart_svg(&self.weeks, self.metric, &options)
    }
}
