//! Course catalog served by `/api/courses`.
//!
//! The default catalog is the course list from the client's embedded site
//! content, so SSR output and the API agree out of the box. `CONTENT_PATH`
//! points at a JSON array of courses to publish a different list without
//! rebuilding the WASM bundle; hydrated pages pick it up on refresh.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::path::{Path, PathBuf};

use client::content::{Course, SiteContent};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read course catalog {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("course catalog {path} is not a JSON course list: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },

    #[error("embedded site content is malformed: {0}")]
    Embedded(#[source] serde_json::Error),
}

/// Load the catalog from `path`, or from the embedded site content.
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed, or when the
/// embedded content is malformed.
pub fn load_courses(path: Option<&Path>) -> Result<Vec<Course>, CatalogError> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read { path: path.to_owned(), source })?;
            parse_courses(&raw).map_err(|source| CatalogError::Parse { path: path.to_owned(), source })
        }
        None => SiteContent::embedded()
            .map(|content| content.courses.items)
            .map_err(CatalogError::Embedded),
    }
}

/// Parse a JSON array of courses.
///
/// # Errors
///
/// Returns the JSON error when `raw` is not a course list.
pub fn parse_courses(raw: &str) -> Result<Vec<Course>, serde_json::Error> {
    serde_json::from_str(raw)
}
