//! Failure kinds for a single image load.
//!
//! These never escape the preloader: each one is logged and recorded as a
//! `false` entry in the batch result.

/// Why one image reference did not become available.
///
/// `Display` describes the failure only; pair it with [`AssetLoadFailure::url`]
/// when reporting.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AssetLoadFailure {
    /// The platform reported an error for the resource (404, decode failure, ...).
    #[error("image failed to load")]
    Rejected { url: String },

    /// The load did not settle within the configured limit.
    #[error("image load timed out after {after_ms}ms")]
    TimedOut { url: String, after_ms: u64 },

    /// No image primitive was available to issue the load.
    #[error("image loading unavailable in this environment")]
    Unsupported { url: String },
}

impl AssetLoadFailure {
    /// Location of the image that failed.
    pub fn url(&self) -> &str {
        match self {
            Self::Rejected { url } | Self::TimedOut { url, .. } | Self::Unsupported { url } => url,
        }
    }
}
