//! REST API layer: route handlers, DTOs, and router composition.
//!
//! Resource endpoints are mounted under `/api`. Every response carries
//! `Access-Control-Allow-Origin: *`, any `OPTIONS` request is answered as a
//! CORS preflight, and trailing slashes are trimmed before routing.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod openapi;

use axum::http::{Method, Uri, header};
use axum::{Router, ServiceExt};
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::error::ServiceError;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;

        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
    };

    router.fallback(route_not_found)
}

/// CORS policy: any origin, the five methods the API uses, JSON bodies.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
}

/// Wires state and middleware into a ready-to-serve service.
pub fn build_app(state: AppState) -> NormalizePath<Router> {
    let router = build_router()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Serves the API on `listener` until the process is stopped.
///
/// # Errors
///
/// Returns an I/O error if the server fails.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    let app = build_app(state);
    axum::serve(
        listener,
        ServiceExt::<axum::extract::Request>::into_make_service(app),
    )
    .await
}

async fn route_not_found(method: Method, uri: Uri) -> ServiceError {
    ServiceError::RouteNotFound(format!("{method} {}", uri.path()))
}
