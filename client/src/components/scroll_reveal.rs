//! Wrapper that fades its children in the first time they scroll into view.
//!
//! Visibility latches: once shown, scrolling back up does not hide it again.

use leptos::prelude::*;

#[component]
pub fn ScrollReveal(
    #[prop(into, default = String::new())] class: String,
    /// Stagger offset applied as `transition-delay`.
    #[prop(default = 0)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();
    let visible = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::scroll::{REVEAL_THRESHOLD, in_view, viewport_height};

        let check = move || {
            if visible.get_untracked() {
                return;
            }
            let Some(el) = node.get_untracked() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            if in_view(rect.top(), rect.height(), viewport_height(), REVEAL_THRESHOLD) {
                visible.set(true);
            }
        };

        Effect::new(move || {
            if node.get().is_some() {
                check();
            }
        });
        let handle = window_event_listener(leptos::ev::scroll, move |_| check());
        on_cleanup(move || handle.remove());
    }

    view! {
        <div
            node_ref=node
            class=format!("scroll-reveal {class}")
            class:scroll-reveal--visible=move || visible.get()
            style=format!("transition-delay: {delay_ms}ms;")
        >
            {children()}
        </div>
    }
}
