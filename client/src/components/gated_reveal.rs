//! Placeholder-until-loaded wrapper for image-heavy sections.
//!
//! DESIGN
//! ======
//! Owns one `RevealState`. An effect tracks `images`; each new list starts a
//! cycle and spawns a preload whose settlement is tagged with that cycle's
//! ticket. A second effect marks the instance mounted on the first animation
//! frame after hydration. Effects do not run during SSR, so the server emits
//! the placeholder for any non-empty list.
//!
//! An instance created with an empty list starts `Ready`, so the server and
//! the first client render both show content with no placeholder frame.
//!
//! A settlement that arrives after the component is disposed hits a disposed
//! signal and is dropped by `try_update`.

#[cfg(test)]
#[path = "gated_reveal_test.rs"]
mod gated_reveal_test;

use leptos::prelude::*;

use crate::preload::{ImageLoader, preload_images};
use crate::state::reveal::{RevealState, RevealTicket, SettleOutcome};

/// Context handed to revealed children so they can gate entrance animations.
#[derive(Clone, Copy)]
pub struct RevealContext {
    state: RwSignal<RevealState>,
}

impl RevealContext {
    /// Entrance animations may run.
    pub fn animations_enabled(&self) -> bool {
        self.state.get().animations_enabled()
    }
}

#[component]
pub fn GatedReveal(
    /// Image references that must settle before content shows.
    #[prop(into)]
    images: Signal<Vec<String>>,
    /// Placeholder height; fixed so the swap does not shift layout.
    #[prop(into, default = "22rem".to_owned())]
    placeholder_height: String,
    /// Per-image timeout; `None` waits for the browser.
    #[prop(default = None)]
    timeout_ms: Option<u64>,
    #[prop(optional, into)] label: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let initial = if images.with_untracked(Vec::is_empty) { RevealState::opened() } else { RevealState::new() };
    let reveal = RwSignal::new(initial);
    provide_context(RevealContext { state: reveal });

    Effect::new(move || {
        let urls = images.get();
        if let Some(ticket) = begin_cycle(reveal, &urls) {
            spawn_preload(reveal, ticket, urls, timeout_ms);
        }
    });

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        request_animation_frame(move || {
            reveal.try_update(|state| {
                state.mark_mounted();
            });
        });
    });

    let label = label.unwrap_or_else(|| "Loading".to_owned());
    let placeholder_style = format!("min-height: {placeholder_height}; height: {placeholder_height};");

    view! {
        <div
            class="gated-reveal"
            class:gated-reveal--ready=move || reveal.get().images_loaded()
            class:gated-reveal--animate=move || reveal.get().animations_enabled()
        >
            <Show
                when=move || reveal.get().images_loaded()
                fallback=move || {
                    view! {
                        <div
                            class="gated-reveal__placeholder"
                            style=placeholder_style.clone()
                            role="status"
                            aria-live="polite"
                        >
                            <span class="gated-reveal__spinner" aria-hidden="true"></span>
                            <span class="visually-hidden">{label.clone()}</span>
                        </div>
                    }
                }
            >
                {children()}
            </Show>
        </div>
    }
}

/// Start a cycle for `urls`. An empty list settles on the spot; otherwise
/// the returned ticket belongs to the preload that [`run_cycle`] performs.
pub(crate) fn begin_cycle(reveal: RwSignal<RevealState>, urls: &[String]) -> Option<RevealTicket> {
    let ticket = reveal.try_update(RevealState::begin)?;
    if urls.is_empty() {
        settle(reveal, ticket);
        return None;
    }
    Some(ticket)
}

/// Preload `urls` and settle `ticket` once the whole batch has.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) async fn run_cycle<L>(loader: &L, reveal: RwSignal<RevealState>, ticket: RevealTicket, urls: &[String]) -> Vec<bool>
where
    L: ImageLoader + ?Sized,
{
    let outcomes = preload_images(loader, urls).await;
    settle(reveal, ticket);
    outcomes
}

fn settle(reveal: RwSignal<RevealState>, ticket: RevealTicket) -> Option<SettleOutcome> {
    let outcome = reveal.try_update(|state| state.settle(ticket));
    match outcome {
        Some(SettleOutcome::Opened) => {}
        Some(SettleOutcome::Superseded) => log::debug!("dropped settlement from superseded reveal cycle {ticket:?}"),
        Some(SettleOutcome::AlreadyReady) => log::debug!("reveal cycle {ticket:?} was already ready"),
        None => log::debug!("reveal disposed before cycle {ticket:?} settled"),
    }
    outcome
}

#[cfg(feature = "hydrate")]
fn spawn_preload(reveal: RwSignal<RevealState>, ticket: RevealTicket, urls: Vec<String>, timeout_ms: Option<u64>) {
    use crate::preload::browser::BrowserImageLoader;

    leptos::task::spawn_local(async move {
        let loader = BrowserImageLoader::with_timeout_ms(timeout_ms);
        run_cycle(&loader, reveal, ticket, &urls).await;
    });
}

#[cfg(not(feature = "hydrate"))]
fn spawn_preload(reveal: RwSignal<RevealState>, ticket: RevealTicket, urls: Vec<String>, timeout_ms: Option<u64>) {
    let _ = (reveal, ticket, urls, timeout_ms);
}
