//! HTTP helpers for the site's own JSON endpoints.

pub mod api;
