use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Weather Diary API",
        version = "1.0.0",
        description = "Date-stamped diary entries enriched with the day's weather.",
    ),
    paths(
        handlers::health::health_check,
        handlers::diary::create_diary,
        handlers::diary::read_diary,
        handlers::diary::read_diaries,
        handlers::diary::update_diary,
        handlers::diary::delete_diary,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        response::ResponseMeta,
        // Diary
        dto::DiaryResponse,
        dto::DeleteDiaryResponse,
        // Health (handler-local types)
        handlers::health::HealthData,
        handlers::health::DatabaseStatus,
        handlers::health::WeatherStatus,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "diary", description = "Diary entry create, read, update and delete"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
