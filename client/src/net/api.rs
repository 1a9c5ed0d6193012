//! REST helpers for the site's own endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these calls are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics; a failed catalog refresh
//! leaves the embedded course list on screen.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::content::Course;

/// Path of the course catalog endpoint.
pub const COURSES_ENDPOINT: &str = "/api/courses";

#[cfg(any(test, feature = "hydrate"))]
fn catalog_failed_message(status: u16) -> String {
    format!("course catalog request failed: {status}")
}

/// Fetch the current course catalog from `/api/courses`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server answers with a
/// non-OK status, or the body is not a course list.
pub async fn fetch_courses() -> Result<Vec<Course>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(COURSES_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(catalog_failed_message(resp.status()));
        }
        resp.json::<Vec<Course>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
