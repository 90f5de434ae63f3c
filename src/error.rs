use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use log::error;

use crate::views;

/// Request-level failures. Validation failures never reach this type; the
/// handlers turn those into a re-rendered form instead.
#[derive(Debug)]
pub enum AppError {
    NotFound,
    Database(sqlx::Error),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound,
            other => AppError::Database(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Html(views::error_page("Record not found")),
            )
                .into_response(),
            AppError::Database(err) => {
                error!("Error querying the database: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(views::error_page("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}
