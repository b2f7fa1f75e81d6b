use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::openapi::{openapi_json, redoc_router};
use super::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/create/diary", post(handlers::create_diary))
        .route("/read/diary", get(handlers::read_diary))
        .route("/read/diaries", get(handlers::read_diaries))
        .route("/update/diary", put(handlers::update_diary))
        .route("/delete/diary", delete(handlers::delete_diary))
        .route("/health", get(handlers::health_check))
        .route("/openapi.json", get(openapi_json))
        .merge(redoc_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
