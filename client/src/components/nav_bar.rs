//! Fixed top navigation with anchor scrolling and scroll-spy.

use leptos::prelude::*;

use crate::content::NavLink;
use crate::state::nav::NavState;
use crate::util::scroll;

#[component]
pub fn NavBar(brand: String, links: Vec<NavLink>) -> impl IntoView {
    let nav = RwSignal::new(NavState::default());

    #[cfg(feature = "hydrate")]
    {
        let sections = links.iter().map(|link| link.section.clone()).collect::<Vec<_>>();
        let sample = move || {
            let tops = scroll::section_tops(&sections);
            nav.update(|n| n.on_scroll(scroll::scroll_y(), &tops));
        };
        let handle = window_event_listener(leptos::ev::scroll, {
            let sample = sample.clone();
            move |_| sample()
        });
        Effect::new(move || sample());
        on_cleanup(move || handle.remove());
    }

    let home = links.first().map(|link| link.section.clone()).unwrap_or_default();
    let items = links
        .into_iter()
        .map(|NavLink { label, section }| {
            let href = format!("#{section}");
            let target = section.clone();
            view! {
                <li class="nav-bar__item">
                    <a
                        class="nav-bar__link"
                        class:nav-bar__link--active=move || nav.with(|n| n.is_active(&section))
                        href=href
                        on:click=move |ev| {
                            nav.update(|n| n.follow(&target));
                            if scroll::scroll_to_section(&target) {
                                ev.prevent_default();
                            }
                        }
                    >
                        {label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header
            class="nav-bar"
            class:nav-bar--scrolled=move || nav.with(|n| n.scrolled)
            class:nav-bar--open=move || nav.with(|n| n.menu_open)
        >
            <a class="nav-bar__brand" href=format!("#{home}")>
                {brand}
            </a>
            <button
                class="nav-bar__toggle"
                aria-label="Toggle navigation"
                aria-expanded=move || nav.with(|n| n.menu_open).to_string()
                on:click=move |_| nav.update(NavState::toggle_menu)
            >
                <span></span>
                <span></span>
                <span></span>
            </button>
            <nav class="nav-bar__menu">
                <ul class="nav-bar__list">{items}</ul>
            </nav>
        </header>
    }
}
