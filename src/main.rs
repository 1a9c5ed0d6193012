mod catalog;
mod config;
mod error;
mod routes;
mod state;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env is the normal case in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;

    let courses = catalog::load_courses(config.content_path.as_deref())?;
    match &config.content_path {
        Some(path) => tracing::info!(courses = courses.len(), path = %path.display(), "course catalog loaded from file"),
        None => tracing::info!(courses = courses.len(), "course catalog loaded from embedded content"),
    }

    let state = state::AppState::new(courses);
    let app = routes::leptos_app(state)?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "coursewave listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
