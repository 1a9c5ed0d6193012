//! About section: intro, the story column and the highlights grid.
//!
//! DESIGN
//! ======
//! The story column drifts and fades with scroll progress through the
//! section. Progress is measured from the section's bounding box on each
//! scroll event; before the first measurement (and on the server) the column
//! renders with a neutral style so it is readable without scripting.

#[cfg(test)]
#[path = "about_test.rs"]
mod about_test;

use leptos::prelude::*;

use crate::components::scroll_reveal::ScrollReveal;
use crate::content::{AboutSection, Feature};
use crate::util::scroll;

const STAGGER_MS: u32 = 100;

const DRIFT_STOPS: [f64; 2] = [0.0, 1.0];
const DRIFT_PX: [f64; 2] = [50.0, -50.0];
const FADE_STOPS: [f64; 4] = [0.0, 0.2, 0.8, 1.0];
const FADE_OPACITY: [f64; 4] = [0.0, 1.0, 1.0, 0.0];

/// Inline style for the story column at `progress` through the section.
/// `None` means not measured yet.
pub fn story_style(progress: Option<f64>) -> String {
    let Some(progress) = progress else {
        return "transform: translateY(0px); opacity: 1;".to_owned();
    };
    let y = scroll::interpolate(progress, &DRIFT_STOPS, &DRIFT_PX);
    let opacity = scroll::interpolate(progress, &FADE_STOPS, &FADE_OPACITY);
    format!("transform: translateY({y:.1}px); opacity: {opacity:.2};")
}

#[component]
pub fn About(section: AboutSection, #[prop(into, default = "about".to_owned())] section_id: String) -> impl IntoView {
    let AboutSection { title, intro, story_title, story, highlights } = section;

    let node = NodeRef::<leptos::html::Section>::new();
    let progress = RwSignal::new(None::<f64>);

    #[cfg(feature = "hydrate")]
    {
        let measure = move || {
            let Some(el) = node.get_untracked() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            progress.set(Some(scroll::scroll_progress(rect.top(), rect.height(), scroll::viewport_height())));
        };
        Effect::new(move || {
            if node.get().is_some() {
                measure();
            }
        });
        let handle = window_event_listener(leptos::ev::scroll, move |_| measure());
        on_cleanup(move || handle.remove());
    }

    let paragraphs = story.into_iter().map(|p| view! { <p class="about__paragraph">{p}</p> }).collect_view();

    let cards = highlights
        .into_iter()
        .zip(0_u32..)
        .map(|(Feature { icon, title, description }, i)| {
            view! {
                <ScrollReveal class="about__highlight" delay_ms=i * STAGGER_MS>
                    <span class="about__highlight-icon" aria-hidden="true">{icon}</span>
                    <h4 class="about__highlight-title">{title}</h4>
                    <p class="about__highlight-description">{description}</p>
                </ScrollReveal>
            }
        })
        .collect_view();

    view! {
        <section id=section_id class="section about" node_ref=node>
            <ScrollReveal class="section__header">
                <h2 class="section__title">{title}</h2>
                <p class="section__subtitle">{intro}</p>
            </ScrollReveal>
            <div class="about__columns">
                <div class="about__story" style=move || story_style(progress.get())>
                    <h3 class="about__story-title">{story_title}</h3>
                    {paragraphs}
                </div>
                <div class="about__highlights">{cards}</div>
            </div>
        </section>
    }
}
