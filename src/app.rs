use axum::{
    middleware,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer};

use crate::handlers::{db_users, profile, system, users};
use crate::middleware::{handle_panic, jwt_auth_middleware, request_logger, respond_with_envelope};
use crate::state::AppState;

/// Full router: logger -> error responder -> panic catcher -> routes
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route("/error", get(system::error_test))
        // File store
        .merge(user_routes())
        // Database
        .route("/db-users", get(db_users::list))
        // Bearer token required
        .merge(protected_routes(state.clone()))
        .fallback(system::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(request_logger())
                .layer(middleware::from_fn_with_state(state.clone(), respond_with_envelope))
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list).post(users::create))
        .route(
            "/users/:id",
            get(users::show).put(users::update).delete(users::delete),
        )
}

fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/profile", get(profile::whoami))
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}
