//! Learner testimonials. Avatars go through the same preload gate as the
//! course carousel so the grid never renders with half its faces missing.

use leptos::prelude::*;

use crate::components::gated_reveal::GatedReveal;
use crate::components::scroll_reveal::ScrollReveal;
use crate::content::{Testimonial, TestimonialSection};

#[component]
pub fn Testimonials(
    section: TestimonialSection,
    #[prop(into, default = "testimonials".to_owned())] section_id: String,
    #[prop(default = None)] preload_timeout_ms: Option<u64>,
) -> impl IntoView {
    let TestimonialSection { title, items } = section;
    let avatars = items.iter().map(|t| t.avatar.clone()).collect::<Vec<_>>();

    view! {
        <section id=section_id class="section testimonials">
            <ScrollReveal class="section__header">
                <h2 class="section__title">{title}</h2>
            </ScrollReveal>
            <GatedReveal
                images=Signal::stored(avatars)
                timeout_ms=preload_timeout_ms
                placeholder_height="16rem"
                label="Loading testimonials"
            >
                <div class="testimonials__grid">
                    {items.clone().into_iter().map(testimonial_card).collect_view()}
                </div>
            </GatedReveal>
        </section>
    }
}

fn testimonial_card(testimonial: Testimonial) -> impl IntoView {
    let Testimonial { name, role, quote, avatar } = testimonial;
    view! {
        <figure class="testimonial-card">
            <blockquote class="testimonial-card__quote">{format!("“{quote}”")}</blockquote>
            <figcaption class="testimonial-card__author">
                <img class="testimonial-card__avatar" src=avatar alt=name.clone() width="48" height="48"/>
                <span class="testimonial-card__name">{name}</span>
                <span class="testimonial-card__role">{role}</span>
            </figcaption>
        </figure>
    }
}
