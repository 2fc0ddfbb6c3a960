use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::change_password::change_password;
use super::handlers::create_address::create_address;
use super::handlers::create_todo::create_todo;
use super::handlers::delete_todo::delete_todo;
use super::handlers::delete_user::delete_user;
use super::handlers::get_todo::get_todo;
use super::handlers::get_user::get_user;
use super::handlers::list_todos::list_todos;
use super::handlers::list_user_todos::list_user_todos;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::update_todo::update_todo;
use super::middleware::authenticate as auth_middleware;
use crate::domain::address::service::AddressService;
use crate::domain::todo::service::TodoService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::address::PostgresAddressRepository;
use crate::outbound::repositories::todo::PostgresTodoRepository;
use crate::outbound::repositories::user::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub todo_service: Arc<TodoService<PostgresTodoRepository>>,
    pub address_service: Arc<AddressService<PostgresAddressRepository>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<UserService<PostgresUserRepository>>,
    todo_service: Arc<TodoService<PostgresTodoRepository>>,
    address_service: Arc<AddressService<PostgresAddressRepository>>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        todo_service,
        address_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/auth/user/create", post(register))
        .route("/auth/token/", post(login))
        .route("/todos/", get(list_todos))
        .route("/users/", get(list_users))
        .route("/users/user/:user_id", get(get_user));

    let protected_routes = Router::new()
        .route("/todos/", post(create_todo))
        .route("/todos/user", get(list_user_todos))
        .route("/todos/:todo_id", get(get_todo))
        .route("/todos/:todo_id", put(update_todo))
        .route("/todos/:todo_id", delete(delete_todo))
        .route("/users/change_password", post(change_password))
        .route("/users/user", delete(delete_user))
        .route("/address/", post(create_address))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

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
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
