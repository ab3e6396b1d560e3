pub mod page;
pub mod pages;
pub mod rest;
pub mod state;
pub mod summarize;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use pages::{health_handler, index_handler, summarize_form_handler, summarize_query_handler};
pub use rest::{summarize_api_handler, ApiDoc};
pub use state::AppState;

/// Builds the complete application router: HTML pages, the JSON API and the
/// Swagger UI.
pub fn router(app_state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    let page_routes = Router::new()
        .route("/", get(index_handler))
        .route(
            "/summarize",
            get(summarize_query_handler).post(summarize_form_handler),
        )
        .route("/health", get(health_handler));

    let api_routes = Router::new()
        .route("/api/summarize", post(summarize_api_handler))
        .layer(cors);

    let app_router = Router::new()
        .merge(page_routes)
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    // Merge the app router with the Swagger UI router for a complete application.
    Router::new()
        .merge(app_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
