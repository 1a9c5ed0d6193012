//! Hero banner with pointer parallax.
//!
//! DESIGN
//! ======
//! Pointer position lives in this component's own signal. Decorative layers
//! derive their transforms from it at different depths. The background image
//! is preloaded on its own and fades in once it settles, loaded or not.

use leptos::prelude::*;

use crate::content::HeroConfig;
use crate::state::pointer::PointerOffset;
use crate::util::scroll;

const LAYER_DEPTHS: [f64; 3] = [0.35, 0.7, 1.0];

#[component]
pub fn Hero(
    config: HeroConfig,
    #[prop(into, default = "home".to_owned())] section_id: String,
    /// Per-image timeout for the background; `None` waits for the browser.
    #[prop(default = None)]
    preload_timeout_ms: Option<u64>,
) -> impl IntoView {
    let HeroConfig { eyebrow, title, subtitle, cta_label, cta_section, background_image, parallax_strength } = config;

    let pointer = RwSignal::new(PointerOffset::default());
    let background_ready = RwSignal::new(false);
    let mounted = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let url = background_image.clone();
        leptos::task::spawn_local(async move {
            let loader = crate::preload::browser::BrowserImageLoader::with_timeout_ms(preload_timeout_ms);
            let loaded = crate::preload::preload_image(&loader, &url).await;
            log::debug!("hero background settled, loaded={loaded}");
            let _ = background_ready.try_set(true);
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = preload_timeout_ms;

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        request_animation_frame(move || {
            let _ = mounted.try_set(true);
        });
    });

    let on_pointer_move = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let window = window();
            let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
            let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
            pointer.set(PointerOffset::from_client(f64::from(ev.client_x()), f64::from(ev.client_y()), width, height));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };
    let on_pointer_leave = move |_| pointer.set(PointerOffset::default());

    let layers = LAYER_DEPTHS
        .iter()
        .enumerate()
        .map(|(i, depth)| {
            let depth = *depth;
            view! {
                <span
                    class=format!("hero__shape hero__shape--{i}")
                    aria-hidden="true"
                    style:transform=move || pointer.get().transform(parallax_strength, depth)
                ></span>
            }
        })
        .collect_view();

    let background_style = format!("background-image: url('{background_image}');");
    let cta_href = format!("#{cta_section}");

    view! {
        <section
            id=section_id
            class="hero"
            class:hero--mounted=move || mounted.get()
            on:mousemove=on_pointer_move
            on:mouseleave=on_pointer_leave
        >
            <div
                class="hero__background"
                class:hero__background--ready=move || background_ready.get()
                style=background_style
            ></div>
            <div class="hero__layers">{layers}</div>
            <div class="hero__content">
                <p class="hero__eyebrow">{eyebrow}</p>
                <h1 class="hero__title">{title}</h1>
                <p class="hero__subtitle">{subtitle}</p>
                <a
                    class="button button--primary hero__cta"
                    href=cta_href
                    on:click=move |ev| {
                        if scroll::scroll_to_section(&cta_section) {
                            ev.prevent_default();
                        }
                    }
                >
                    {cta_label}
                </a>
            </div>
        </section>
    }
}
