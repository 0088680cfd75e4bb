//! Router assembly: API routes, middleware stack and the static mini-app

use axum::extract::Request;
use axum::http::{HeaderValue, Method};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower::ServiceExt;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::config::Config;
use crate::handlers::{self, fallback::route_not_found};
use crate::middleware;
use crate::routes;
use crate::state::AppState;

/// Build the full application router
pub fn build_app(app_state: AppState, config: &Config) -> Router {
    let app = Router::new()
        .merge(routes::status_routes())
        .merge(routes::loan_routes())
        .merge(routes::contact_routes())
        .method_not_allowed_fallback(handlers::method_not_allowed);

    let app = match &config.static_dir {
        Some(dir) => {
            tracing::info!("Serving mini-app files from {}", dir.display());
            let files = ServeDir::new(dir).append_index_html_on_directories(true);
            app.fallback(move |request: Request| serve_static(files.clone(), request))
        }
        None => app.fallback(handlers::not_found),
    };

    app.with_state(app_state)
        .layer(axum::middleware::from_fn(middleware::security_headers))
        .layer(axum::middleware::from_fn(middleware::request_tracing))
        .layer(configure_cors(config.cors_allowed_origins.as_deref()))
}

/// Mini-app files for everything outside `/api`
async fn serve_static(files: ServeDir, request: Request) -> Response {
    let path = request.uri().path();
    if path == "/api" || path.starts_with("/api/") {
        return route_not_found(path).into_response();
    }

    match files.oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

fn configure_cors(allowed_origins: Option<&str>) -> CorsLayer {
    let allowed_origins = allowed_origins.unwrap_or_default().trim();

    if allowed_origins.is_empty() {
        tracing::warn!("CORS_ALLOWED_ORIGINS not set, allowing all origins (permissive)");
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}
