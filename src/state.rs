//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! catalog is loaded once at startup and never mutated, so it sits behind a
//! plain `Arc` with no lock.

use std::sync::Arc;

use client::content::Course;

/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone, Debug)]
pub struct AppState {
    pub courses: Arc<Vec<Course>>,
}

impl AppState {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses: Arc::new(courses) }
    }
}
