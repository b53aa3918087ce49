use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Unsupported spreadsheet format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid workbook: {0}")]
    InvalidWorkbook(String),
    #[error("Invalid CSV: {0}")]
    InvalidCsv(String),
    #[error("Workbook has no worksheets")]
    NoWorksheet,
    #[error("Spreadsheet has no header row")]
    EmptyFile,
    #[error("Missing column: {0}")]
    MissingColumn(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("Invalid week: {0}. Use YYYY-MM-DD or dd/mm")]
    InvalidWeek(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("SVG generation failed: {0}")]
    SvgError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("PNG rendering failed: {0}")]
    RenderFailed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Data unavailable: {0}")]
    Load(#[from] LoadError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Raster(#[from] RasterError),
    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Load(_) => "data_unavailable",
            AppError::Selection(_) | AppError::BadRequest(_) => "bad_request",
            AppError::Render(_) | AppError::Raster(_) => "render_failed",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Load(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Selection(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Render(_) | AppError::Raster(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let request_id = Uuid::new_v4().to_string();

        if status.is_server_error() {
            tracing::warn!(%request_id, code = self.code(), "{}", self);
        }

        let body = Json(json!({
            "error": self.to_string(),
            "code": self.code(),
            "request_id": request_id,
        }));

        (status, body).into_response()
    }
}
