//! Platform feature grid over a field of floating bubbles.
//!
//! Bubble positions are seeded so the server render and the hydrated page
//! agree.

use leptos::prelude::*;

use crate::components::scroll_reveal::ScrollReveal;
use crate::content::{Feature, PlatformSection};
use crate::state::particles::bubble_field;

const STAGGER_MS: u32 = 90;
const BUBBLE_SEED: u64 = 0x00b0_bb1e;

#[component]
pub fn PlatformFeatures(
    section: PlatformSection,
    #[prop(into, default = "assistant".to_owned())] section_id: String,
) -> impl IntoView {
    let PlatformSection { title, subtitle, items, bubbles } = section;

    let bubbles = bubble_field(bubbles, BUBBLE_SEED)
        .into_iter()
        .map(|bubble| view! { <span class="platform__bubble" style=bubble.style()></span> })
        .collect_view();

    let cards = items
        .into_iter()
        .zip(0_u32..)
        .map(|(Feature { icon, title, description }, i)| {
            view! {
                <ScrollReveal class="feature-card" delay_ms=i * STAGGER_MS>
                    <span class="feature-card__icon" aria-hidden="true">{icon}</span>
                    <h3 class="feature-card__title">{title}</h3>
                    <p class="feature-card__description">{description}</p>
                </ScrollReveal>
            }
        })
        .collect_view();

    view! {
        <section id=section_id class="section platform">
            <ScrollReveal class="section__header">
                <h2 class="section__title">{title}</h2>
                <p class="section__subtitle">{subtitle}</p>
            </ScrollReveal>
            <div class="platform__stage">
                <div class="platform__bubbles" aria-hidden="true">{bubbles}</div>
                <div class="platform__grid">{cards}</div>
            </div>
        </section>
    }
}
