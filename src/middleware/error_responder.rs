use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use std::any::Any;
use tracing::error;

use crate::error::ForwardedError;
use crate::state::AppState;

/// Centralized error responder.
///
/// Any response carrying a [`ForwardedError`] is logged and rewritten into the
/// `{status, statusCode, message, stack?}` envelope. Everything else passes
/// through untouched.
pub async fn respond_with_envelope(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    let Some(err) = response.extensions_mut().remove::<ForwardedError>() else {
        return response;
    };

    error!(
        timestamp = %Utc::now().to_rfc3339(),
        status = err.status.as_u16(),
        "{}\n{}",
        err.message,
        err.stack
    );

    (err.status, Json(err.envelope(state.config.exposes_stack()))).into_response()
}

/// Turns a handler panic into a forwarded 500 for the responder above
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!("Handler panicked: {}", detail);
    ForwardedError::internal("Internal Server Error").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::store::JsonFileStore;
    use axum::{
        body::{to_bytes, Body},
        http::StatusCode,
        middleware,
        routing::get,
        Router,
    };
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;
    use tower_http::catch_panic::CatchPanicLayer;

    async fn explode() -> &'static str {
        panic!("kaboom")
    }

    fn router(config: AppConfig) -> Router {
        let state = AppState::new(config, Arc::new(JsonFileStore::new("unused.json")), None);

        Router::new()
            .route("/ok", get(|| async { "fine" }))
            .route("/fail", get(|| async { ForwardedError::bad_request("nope") }))
            .route("/panic", get(explode))
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(middleware::from_fn_with_state(state, respond_with_envelope))
    }

    async fn call(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(axum::http::Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn passes_through_normal_responses() {
        let (status, body) = call(router(AppConfig::development()), "/ok").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"fine");
    }

    #[tokio::test]
    async fn development_envelope_has_stack() {
        let (status, body) = call(router(AppConfig::development()), "/fail").await;
        let body: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["message"], "nope");
        assert!(body["stack"].is_string());
    }

    #[tokio::test]
    async fn production_envelope_hides_stack() {
        let (_, body) = call(router(AppConfig::production()), "/fail").await;
        let body: Value = serde_json::from_slice(&body).unwrap();

        assert!(body.get("stack").is_none());
    }

    #[tokio::test]
    async fn panics_become_enveloped_500s() {
        let (status, body) = call(router(AppConfig::production()), "/panic").await;
        let body: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["statusCode"], 500);
        assert_eq!(body["message"], "Internal Server Error");
    }
}
