use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        echo::echo_request,
        products::{delete_product, get_product, list_products, seed_products, update_product},
    },
    state::AppState,
};

/// Largest request body accepted, matching the Lambda invocation payload limit.
pub const MAX_REQUEST_BODY_BYTES: usize = 6 * 1024 * 1024;

/// Create the application router with all routes and middleware.
///
/// Unknown paths and unsupported methods on known paths both fall through to
/// [`echo_request`], which answers 404. Both fallbacks sit inside the CORS
/// layer, so every response carries `Access-Control-Allow-Origin: *`.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/products", get(list_products).post(seed_products))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .method_not_allowed_fallback(echo_request)
        .fallback(echo_request)
        .layer(cors)
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
