use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use service::books::{Book, NewBook};
use tracing::info;

use crate::errors::ApiError;
use crate::state::AppState;

const JSON_CONTENT_TYPE: &str = "application/json";

/// GET /books
pub async fn list_books(State(state): State<AppState>) -> Result<Response, ApiError> {
    let books = state.books.list().await;
    let body = serde_json::to_vec(&books)?;
    Ok(([(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response())
}

/// GET /books/:id
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Book>, ApiError> {
    if id.is_empty() {
        return Err(ApiError::NotFound);
    }
    let book = state.books.find(&id).await?;
    Ok(Json(book))
}

/// POST /books
///
/// The content type must be exactly `application/json`; parameters such as
/// `; charset=utf-8` are rejected. Responds 201 with the stored book.
pub async fn create_book(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default();
    if content_type != JSON_CONTENT_TYPE {
        return Err(ApiError::UnsupportedMediaType(content_type));
    }

    let input: NewBook =
        serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let book = state.books.create(input).await?;
    let total = state.books.count().await;
    info!(id = %book.id, total = total, "book created");

    let location = format!("/books/{}", book.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(book)))
}

/// Any verb without a handler on a book route.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
