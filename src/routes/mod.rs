pub mod api;
pub mod dashboard;
pub mod health;

use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::error::AppError;
use crate::pipeline::dashboard::{build_dashboard, Dashboard, DashboardQuery, DashboardSettings};
use crate::pipeline::selection::Selection;
use crate::state::AppState;
use crate::types::filter::{ActivityFilter, Metric};

/// Query string shared by the page and the API routes.
#[derive(Debug, Default, Deserialize)]
pub struct ViewParams {
    filter: Option<String>,
    metric: Option<String>,
    week: Option<String>,
}

impl ViewParams {
    fn into_query(self) -> Result<DashboardQuery, AppError> {
        let filter = match self.filter.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => ActivityFilter::parse(raw).ok_or_else(|| {
                AppError::BadRequest(format!(
                    "Invalid filter: {}. Use 'all', 'cycling', or 'run'",
                    raw
                ))
            })?,
            None => ActivityFilter::default(),
        };
        let metric = match self.metric.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Metric::parse(raw).ok_or_else(|| {
                AppError::BadRequest(format!(
                    "Invalid metric: {}. Use 'moving_time' or 'distance'",
                    raw
                ))
            })?,
            None => Metric::default(),
        };
        let selection = Selection::from_query(self.week.as_deref())?;

        Ok(DashboardQuery {
            filter,
            metric,
            selection,
        })
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Loads (or reuses) the table and computes the view for one request.
fn dashboard_for(state: &AppState, params: ViewParams) -> Result<(Dashboard, DashboardQuery), AppError> {
    let query = params.into_query()?;
    let table = state.activities()?;
    let dashboard = build_dashboard(
        &table,
        today(),
        &query,
        DashboardSettings::from(state.config()),
    );
    Ok((dashboard, query))
}
