use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::api::response::ApiResponse;

/// Failures of the outbound weather lookup, one variant per failure channel.
#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Weather API key is not configured")]
    NotConfigured,

    #[error("Weather API request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Weather API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed weather response: {0}")]
    Parse(String),
}

#[derive(Error, Debug)]
pub enum DiaryError {
    #[error("Database error: {0}")]
    Database(#[from] libsql::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Weather error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for DiaryError {
    fn into_response(self) -> Response {
        ApiResponse::<()>::from(self).into_response()
    }
}

pub type Result<T> = std::result::Result<T, DiaryError>;
