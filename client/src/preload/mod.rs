//! Image preloading: issue one load per location and settle once all have.
//!
//! DESIGN
//! ======
//! The platform primitive sits behind [`ImageLoader`] so the aggregation can
//! run against the browser (`BrowserImageLoader`, hydrate builds) or against
//! scripted loaders in native tests. Aggregation is a join-all: loads may
//! settle in any order, results come back in input order.
//!
//! ERROR HANDLING
//! ==============
//! A failed load is logged and becomes `false`. The aggregate future has no
//! error path.


pub mod browser;
pub mod error;

use std::cell::Cell;

use futures::FutureExt as _;
use futures::future::{LocalBoxFuture, join_all};

pub use error::AssetLoadFailure;

/// Issues a single image load and resolves when it settles.
pub trait ImageLoader {
    /// Fetch `url`, resolving `Ok(())` when the resource is usable.
    fn load(&self, url: &str) -> LocalBoxFuture<'static, Result<(), AssetLoadFailure>>;
}

/// Preload every location and resolve with one outcome per input, in order.
///
/// Repeated locations are loaded (and reported) once per occurrence.
pub async fn preload_images<L, S>(loader: &L, urls: &[S]) -> Vec<bool>
where
    L: ImageLoader + ?Sized,
    S: AsRef<str>,
{
    preload_images_with_progress(loader, urls, |_, _| {}).await
}

/// Same as [`preload_images`], calling `on_settle(settled, total)` each time
/// one load finishes. `settled` only grows and never exceeds `total`.
pub async fn preload_images_with_progress<L, S, F>(loader: &L, urls: &[S], on_settle: F) -> Vec<bool>
where
    L: ImageLoader + ?Sized,
    S: AsRef<str>,
    F: Fn(usize, usize),
{
    let total = urls.len();
    if total == 0 {
        return Vec::new();
    }

    let settled = Cell::new(0_usize);
    let settled = &settled;
    let on_settle = &on_settle;
    let pending = urls.iter().map(|url| {
        loader.load(url.as_ref()).map(move |result| {
            let count = settled.get() + 1;
            settled.set(count);
            on_settle(count, total);
            absorb(result)
        })
    });

    let outcomes = join_all(pending).await;
    let loaded = outcomes.iter().filter(|ok| **ok).count();
    log::debug!("preloaded {loaded}/{total} images");
    outcomes
}

/// Single-location variant of [`preload_images`].
pub async fn preload_image<L>(loader: &L, url: &str) -> bool
where
    L: ImageLoader + ?Sized,
{
    absorb(loader.load(url).await)
}

fn absorb(result: Result<(), AssetLoadFailure>) -> bool {
    match result {
        Ok(()) => true,
        Err(failure) => {
            log::warn!("preload skipped {}: {failure}", failure.url());
            false
        }
    }
}
