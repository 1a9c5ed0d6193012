//! `ImageLoader` backed by the browser's `HtmlImageElement`.
//!
//! A detached `<img>` is pointed at the URL; `onload`/`onerror` feed a oneshot
//! channel. The handlers are removed again when the load settles or when the
//! pending load is dropped, so a late browser callback never reaches a freed
//! closure.
//!
//! The loader type itself builds everywhere so timeout settings can be
//! checked natively; the `ImageLoader` impl needs the `hydrate` feature.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use std::time::Duration;

#[cfg(feature = "hydrate")]
use {
    super::{AssetLoadFailure, ImageLoader},
    futures::channel::oneshot,
    futures::future::{Either, LocalBoxFuture, select},
    std::cell::RefCell,
    std::rc::Rc,
    wasm_bindgen::JsCast as _,
    wasm_bindgen::closure::Closure,
    web_sys::HtmlImageElement,
};

/// Loads images through the platform image cache. The default waits as
/// long as the browser takes.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserImageLoader {
    timeout: Option<Duration>,
}

impl BrowserImageLoader {
    /// Loader that gives up on a single image after `timeout_ms`, when set.
    pub fn with_timeout_ms(timeout_ms: Option<u64>) -> Self {
        Self { timeout: timeout_ms.map(Duration::from_millis) }
    }

    /// Per-image limit, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[cfg(feature = "hydrate")]
impl ImageLoader for BrowserImageLoader {
    fn load(&self, url: &str) -> LocalBoxFuture<'static, Result<(), AssetLoadFailure>> {
        let url = url.to_owned();
        let timeout = self.timeout();
        Box::pin(async move {
            let Some(limit) = timeout else {
                return load_element(url).await;
            };
            let fetch = Box::pin(load_element(url.clone()));
            let timer = gloo_timers::future::sleep(limit);
            match select(fetch, timer).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => Err(AssetLoadFailure::TimedOut {
                    url,
                    after_ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
                }),
            }
        })
    }
}

#[cfg(feature = "hydrate")]
type Handler = Closure<dyn FnMut()>;

/// Keeps the `<img>` and its handlers alive for the duration of one load.
#[cfg(feature = "hydrate")]
struct PendingImage {
    img: HtmlImageElement,
    _on_load: Handler,
    _on_error: Handler,
}

#[cfg(feature = "hydrate")]
impl Drop for PendingImage {
    fn drop(&mut self) {
        self.img.set_onload(None);
        self.img.set_onerror(None);
    }
}

#[cfg(feature = "hydrate")]
async fn load_element(url: String) -> Result<(), AssetLoadFailure> {
    let Ok(img) = HtmlImageElement::new() else {
        return Err(AssetLoadFailure::Unsupported { url });
    };

    let (tx, rx) = oneshot::channel::<bool>();
    let tx = Rc::new(RefCell::new(Some(tx)));
    let on_load = settle_handler(&tx, true);
    let on_error = settle_handler(&tx, false);
    img.set_onload(Some(on_load.as_ref().unchecked_ref()));
    img.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    let pending = PendingImage { img, _on_load: on_load, _on_error: on_error };
    pending.img.set_src(&url);

    let loaded = rx.await.unwrap_or(false);
    drop(pending);

    if loaded { Ok(()) } else { Err(AssetLoadFailure::Rejected { url }) }
}

#[cfg(feature = "hydrate")]
fn settle_handler(tx: &Rc<RefCell<Option<oneshot::Sender<bool>>>>, loaded: bool) -> Handler {
    let tx = Rc::clone(tx);
    Closure::<dyn FnMut()>::new(move || {
        if let Some(tx) = tx.borrow_mut().take() {
            let _ = tx.send(loaded);
        }
    })
}
