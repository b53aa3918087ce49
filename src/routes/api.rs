use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::error::AppError;
use crate::pipeline::dashboard::Dashboard;
use crate::pipeline::rasterize;
use crate::pipeline::recent::ActivityCard;
use crate::routes::{dashboard_for, ViewParams};
use crate::state::AppState;
use crate::types::chart::{ChartOptions, OutputConfig};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/weekly", get(weekly))
        .route("/api/recent", get(recent))
        .route("/api/chart.svg", get(chart_svg))
        .route("/api/chart.png", get(chart_png))
        .route("/api/reload", post(reload))
}

async fn weekly(
    State(state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> Result<Json<Dashboard>, AppError> {
    let (dashboard, _) = dashboard_for(&state, params)?;
    Ok(Json(dashboard))
}

#[derive(Serialize)]
struct RecentResponse {
    total_records: usize,
    activities: Vec<ActivityCard>,
}

async fn recent(
    State(state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> Result<Json<RecentResponse>, AppError> {
    let (dashboard, _) = dashboard_for(&state, params)?;
    Ok(Json(RecentResponse {
        total_records: dashboard.total_records,
        activities: dashboard.recent,
    }))
}

async fn chart_svg(
    State(state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> Result<impl IntoResponse, AppError> {
    let (dashboard, _) = dashboard_for(&state, params)?;
    let svg = dashboard.chart_svg(ChartOptions::from_config(state.config()))?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "image/svg+xml")],
        svg,
    ))
}

async fn chart_png(
    State(state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> Result<impl IntoResponse, AppError> {
    let (dashboard, _) = dashboard_for(&state, params)?;
    let options = ChartOptions::from_config(state.config());
    let svg = dashboard.chart_svg(options.clone())?;

    let output_config = OutputConfig::for_chart(&options);
    let png = rasterize::rasterize(&svg, &output_config)?;

    tracing::info!(
        "Generated chart PNG ({}x{}, metric: {}): {} bytes",
        output_config.width,
        output_config.height,
        dashboard.metric.as_str(),
        png.len()
    );

    Ok((StatusCode::OK, [(header::CONTENT_TYPE, "image/png")], png))
}

#[derive(Serialize)]
struct ReloadResponse {
    invalidated: bool,
}

async fn reload(State(state): State<AppState>) -> Json<ReloadResponse> {
    let invalidated = state.cache().invalidate(&state.config().data_path);
    tracing::info!(
        "Reload requested for {} (cached entry dropped: {})",
        state.config().data_path.display(),
        invalidated
    );
    Json(ReloadResponse { invalidated })
}
