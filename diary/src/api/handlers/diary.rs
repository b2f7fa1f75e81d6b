//! Diary CRUD handlers. Every route takes its date from the query string and
//! the diary text, where there is one, as a plain-text body.

use axum::extract::State;

use crate::api::dto::{DateQuery, DateRangeQuery, DeleteDiaryResponse, DiaryResponse};
use crate::api::extractors::{AppQuery, AppText};
use crate::api::response::{ApiError, ApiResponse, ResponseMeta};
use crate::api::AppState;
use crate::models::DiaryEntry;

fn list_response(entries: Vec<DiaryEntry>) -> ApiResponse<Vec<DiaryResponse>> {
    let total = entries.len() as u64;
    let data = entries.into_iter().map(DiaryResponse::from).collect();
    ApiResponse::success_with_meta(data, ResponseMeta { total })
}

/// `POST /create/diary?date=YYYY-MM-DD`
#[utoipa::path(
    post,
    path = "/create/diary",
    tag = "diary",
    operation_id = "diary.create",
    params(DateQuery),
    request_body(content = String, content_type = "text/plain", description = "Diary text"),
    responses(
        (status = 201, description = "Diary entry created", body = DiaryResponse),
        (status = 400, description = "Invalid date or empty text", body = ApiError),
        (status = 502, description = "Weather lookup failed", body = ApiError),
        (status = 503, description = "Weather API key not configured", body = ApiError),
    )
)]
pub async fn create_diary(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<DateQuery>,
    AppText(text): AppText,
) -> ApiResponse<DiaryResponse> {
    match state.diary.create(query.date, &text).await {
        Ok(entry) => ApiResponse::created(DiaryResponse::from(entry)),
        Err(e) => e.into(),
    }
}

/// `GET /read/diary?date=YYYY-MM-DD`
#[utoipa::path(
    get,
    path = "/read/diary",
    tag = "diary",
    operation_id = "diary.read",
    params(DateQuery),
    responses(
        (status = 200, description = "Entries for the date, possibly empty", body = Vec<DiaryResponse>),
        (status = 400, description = "Invalid date", body = ApiError),
    )
)]
pub async fn read_diary(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<DateQuery>,
) -> ApiResponse<Vec<DiaryResponse>> {
    match state.diary.read(query.date).await {
        Ok(entries) => list_response(entries),
        Err(e) => e.into(),
    }
}

/// `GET /read/diaries?startDate=YYYY-MM-DD&endDate=YYYY-MM-DD`
#[utoipa::path(
    get,
    path = "/read/diaries",
    tag = "diary",
    operation_id = "diary.readRange",
    params(DateRangeQuery),
    responses(
        (status = 200, description = "Entries within the inclusive range, ordered by date", body = Vec<DiaryResponse>),
        (status = 400, description = "Invalid or missing date", body = ApiError),
    )
)]
pub async fn read_diaries(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<DateRangeQuery>,
) -> ApiResponse<Vec<DiaryResponse>> {
    match state
        .diary
        .read_range(query.start_date, query.end_date)
        .await
    {
        Ok(entries) => list_response(entries),
        Err(e) => e.into(),
    }
}

/// `PUT /update/diary?date=YYYY-MM-DD`
///
/// Replaces the text of the first entry written on that date.
#[utoipa::path(
    put,
    path = "/update/diary",
    tag = "diary",
    operation_id = "diary.update",
    params(DateQuery),
    request_body(content = String, content_type = "text/plain", description = "Replacement text"),
    responses(
        (status = 200, description = "Diary entry updated", body = DiaryResponse),
        (status = 400, description = "Invalid date or empty text", body = ApiError),
        (status = 404, description = "No entry for the date", body = ApiError),
    )
)]
pub async fn update_diary(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<DateQuery>,
    AppText(text): AppText,
) -> ApiResponse<DiaryResponse> {
    match state.diary.update(query.date, &text).await {
        Ok(entry) => ApiResponse::success(DiaryResponse::from(entry)),
        Err(e) => e.into(),
    }
}

/// `DELETE /delete/diary?date=YYYY-MM-DD`
#[utoipa::path(
    delete,
    path = "/delete/diary",
    tag = "diary",
    operation_id = "diary.delete",
    params(DateQuery),
    responses(
        (status = 200, description = "Entries removed", body = DeleteDiaryResponse),
        (status = 400, description = "Invalid date", body = ApiError),
    )
)]
pub async fn delete_diary(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<DateQuery>,
) -> ApiResponse<DeleteDiaryResponse> {
    match state.diary.delete(query.date).await {
        Ok(deleted) => ApiResponse::success(DeleteDiaryResponse { deleted }),
        Err(e) => e.into(),
    }
}
