use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};

use crate::error::AppError;
use crate::pipeline::page;
use crate::routes::{dashboard_for, ViewParams};
use crate::state::AppState;
use crate::types::chart::ChartOptions;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

async fn index(
    State(state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> Result<Response, AppError> {
    let (dashboard, query) = match dashboard_for(&state, params) {
        Ok(view) => view,
        Err(AppError::Load(err)) => {
            tracing::warn!("Dashboard data unavailable: {}", err);
            let html = page::render_unavailable(&err.to_string());
            return Ok((StatusCode::SERVICE_UNAVAILABLE, Html(html)).into_response());
        }
        Err(err) => return Err(err),
    };

    let mut options = ChartOptions::from_config(state.config());
    options.link_base = Some(query.link_base());
    let chart = dashboard.chart_svg(options)?;

    tracing::info!(
        "Rendered dashboard (filter: {}, metric: {}, weeks: {}, selected: {})",
        dashboard.filter.as_str(),
        dashboard.metric.as_str(),
        dashboard.weeks.len(),
        dashboard
            .selected_week()
            .map(|w| w.label.as_str())
            .unwrap_or("none")
    );

    Ok(Html(page::render_page(&dashboard, &chart)).into_response())
}
