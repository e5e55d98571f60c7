use crate::state::AppState;
use axum::middleware;
use axum::{
    routing::{get, post},
    Json, Router,
};

pub mod messages;
use messages::{delete_message, get_conversation, send_message};

// OpenAPI endpoint handler
async fn openapi_json() -> Json<serde_json::Value> {
    use utoipa::OpenApi;
    Json(serde_json::to_value(crate::openapi::ApiDoc::openapi()).unwrap())
}

pub fn build_router() -> Router<AppState> {
    // Service introspection endpoints (stay public for healthchecks)
    let introspection = Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/openapi.json", get(openapi_json));

    // The :id segment is the peer's user id on GET and the message id on
    // DELETE; both handlers parse it themselves.
    let api = Router::new()
        .route("/messages", post(send_message))
        .route("/messages/:id", get(get_conversation).delete(delete_message));

    // Apply auth middleware only to the API surface
    let secured_api = api.layer(middleware::from_fn(
        crate::middleware::auth::auth_middleware,
    ));

    let router = introspection.merge(Router::new().nest("/api", secured_api));

    crate::middleware::with_defaults(router)
}
