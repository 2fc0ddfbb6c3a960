use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_book::create_book;
use super::handlers::delete_book::delete_book;
use super::handlers::list_books::list_books;
use super::handlers::search_book::search_book;
use super::handlers::update_book::update_book;
use crate::domain::book::service::BookService;
use crate::outbound::repositories::book::InMemoryBookRepository;

#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<BookService<InMemoryBookRepository>>,
}

pub fn create_router(book_service: Arc<BookService<InMemoryBookRepository>>) -> Router {
    let state = AppState { book_service };

    let api_routes = Router::new()
        .route("/books/", get(list_books))
        .route("/books/", post(create_book))
        .route("/books/", put(update_book))
        .route("/books/search", get(search_book))
        .route("/books/:book_id", delete(delete_book));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
                headers = ?request.headers(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(api_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
