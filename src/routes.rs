//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON endpoints and stitches them with Leptos SSR
//! rendering under a single Axum router. The WASM bundle is served from
//! `/pkg`; every other unmatched path falls through to the site root so
//! images and the favicon resolve.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use client::content::Course;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;
use crate::state::AppState;

/// JSON endpoints used by the hydrated page.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/courses", get(courses))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Leptos SSR frontend: API routes + SSR at `/` + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section or `LEPTOS_*` env vars).
pub fn leptos_app(state: AppState) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    tracing::debug!(site_root = %site_root_path.display(), "serving static assets");

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(&site_root_path))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

pub(crate) async fn courses(State(state): State<AppState>) -> Json<Vec<Course>> {
    Json(state.courses.as_ref().clone())
}

pub(crate) async fn healthz() -> StatusCode {
    StatusCode::OK
}
