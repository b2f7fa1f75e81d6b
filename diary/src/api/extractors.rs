use axum::extract::rejection::StringRejection;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum_extra::extract::QueryRejection;

use crate::error::DiaryError;

/// Query-string extractor that rejects with [`DiaryError::Validation`], so a
/// bad or missing parameter comes back inside the JSON envelope.
#[derive(FromRequestParts)]
#[from_request(via(axum_extra::extract::Query), rejection(DiaryError))]
pub struct AppQuery<T>(pub T);

impl From<QueryRejection> for DiaryError {
    fn from(rejection: QueryRejection) -> Self {
        map_query_rejection(&rejection.to_string())
    }
}

/// Plain-text request body. An unreadable or non-UTF-8 body is rejected with
/// [`DiaryError::Validation`].
pub struct AppText(pub String);

impl<S> FromRequest<S> for AppText
where
    S: Send + Sync,
{
    type Rejection = DiaryError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let text = String::from_request(req, state).await?;
        Ok(Self(text))
    }
}

impl From<StringRejection> for DiaryError {
    fn from(rejection: StringRejection) -> Self {
        match rejection {
            StringRejection::InvalidUtf8(_) => {
                DiaryError::Validation("Diary text must be valid UTF-8".to_string())
            }
            other => DiaryError::Validation(format!(
                "Failed to read request body: {}",
                other.body_text()
            )),
        }
    }
}

fn map_query_rejection(message: &str) -> DiaryError {
    if let Some(field) = extract_missing_field(message) {
        DiaryError::Validation(format!("Missing required query parameter: {field}"))
    } else {
        DiaryError::Validation(format!("Invalid query parameters: {message}"))
    }
}

fn extract_missing_field(message: &str) -> Option<&str> {
    let prefix = "missing field `";
    let start = message.find(prefix)? + prefix.len();
    let remaining = message.get(start..)?;
    let end = remaining.find('`')?;
    remaining.get(..end)
}
