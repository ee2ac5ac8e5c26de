//! Translation of `AppError` into HTTP responses

use axum::Json;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;
use tracing::{error, warn};

use super::pages::error_page;
use crate::error::AppError;

/// Status code a failure is reported with.
pub fn status_for(error: &AppError) -> StatusCode {
    match error {
        e if e.is_client_input() => StatusCode::BAD_REQUEST,
        e if e.is_unavailable() => StatusCode::SERVICE_UNAVAILABLE,
        AppError::PlayerNotFound { .. }
        | AppError::SeasonNotFound { .. }
        | AppError::NoGameOnDate { .. } => StatusCode::NOT_FOUND,
        AppError::ApiNotFound { .. }
        | AppError::ScheduleNotFound { .. }
        | AppError::ApiClientError { .. }
        | AppError::ApiParse(_)
        | AppError::ApiMalformedJson { .. }
        | AppError::ApiUnexpectedStructure { .. }
        | AppError::ApiNoData { .. } => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn log_failure(status: StatusCode, error: &AppError) {
    if status.is_server_error() {
        error!("Request failed with {status}: {error}");
    } else {
        warn!("Request rejected with {status}: {error}");
    }
}

/// HTML error page for browser routes.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        log_failure(status, &self);

        let title = status.canonical_reason().unwrap_or("Error");
        let message = if status == StatusCode::SERVICE_UNAVAILABLE {
            "The statistics provider is unavailable right now. Please try again later.".to_string()
        } else {
            self.to_string()
        };
        (status, Html(error_page(title, &message))).into_response()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// JSON error body for the `/api` routes.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        ApiError(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        log_failure(status, &self.0);
        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
