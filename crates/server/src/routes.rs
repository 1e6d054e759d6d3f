use axum::{extract::DefaultBodyLimit, routing::get, Json, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use common::types::Health;

use crate::state::AppState;

pub mod books;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router.
///
/// `/books` answers GET (list) and POST (create); `/books/:id` answers GET.
/// Any other verb on either path gets 405, any other path 404. HEAD is
/// routed explicitly since axum would otherwise serve it from the GET handler.
pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    let book_routes = Router::new()
        .route(
            "/books",
            get(books::list_books)
                .post(books::create_book)
                .head(books::method_not_allowed)
                .fallback(books::method_not_allowed),
        )
        .route(
            "/books/:id",
            get(books::get_book)
                .head(books::method_not_allowed)
                .fallback(books::method_not_allowed),
        );

    Router::new()
        .route("/health", get(health))
        .merge(book_routes)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
