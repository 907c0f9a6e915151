use axum::{
    extract::State,
    http::{Method, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{
    config::Config,
    error::AppError,
    middleware::{make_span_with_request_id, request_id_middleware},
};

pub mod recommendations;
pub mod state;
pub mod titles;

pub use state::AppState;

/// Creates the API router with all cross-cutting layers
pub fn create_router(state: AppState) -> Router {
    with_layers(api_routes(state))
}

/// Creates the full application: API routes plus the configured static pages
pub fn create_app(state: AppState, config: &Config) -> Router {
    let mut router = api_routes(state);

    if let Some(static_dir) = &config.static_dir {
        router = router.nest_service("/static", ServeDir::new(static_dir));
    }

    if let Some(index_file) = &config.index_file {
        router = router.route_service("/", ServeFile::new(index_file));
    }

    with_layers(router)
}

fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/recommend/:title", get(recommendations::recommend))
        .route("/search-titles/:query", get(titles::search))
        .with_state(state)
}

/// Wraps a router in the request id, trace, CORS and panic-catching layers
pub fn with_layers(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(middleware::from_fn(request_id_middleware))
            .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
            .layer(cors_layer())
            .layer(CatchPanicLayer::custom(handle_panic)),
    )
}

/// Browsers may call the read-only API from any origin
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any)
}

fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = err.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = err.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(panic = %detail, "Request handler panicked");

    AppError::Internal("unexpected failure while handling request".to_string()).into_response()
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "healthy", "movies": state.assets.len() })),
    )
}
