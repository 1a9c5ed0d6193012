//! Course carousel driven by a `CarouselConfig`.
//!
//! SYSTEM CONTEXT
//! ==============
//! One parameterized carousel replaces per-page forks: title, subtitle, item
//! list, visible count, autoplay, and entrance animation all come from
//! config. Cards sit behind a `GatedReveal` keyed on the course image URLs.
//! After hydration the list is refreshed from `/api/courses`; a changed list
//! restarts the reveal cycle.

use leptos::prelude::*;

use crate::components::gated_reveal::{GatedReveal, RevealContext};
use crate::content::{AnimationStyle, CarouselConfig, Course, course_images};
use crate::state::carousel::CarouselState;

#[component]
pub fn CourseCarousel(
    config: CarouselConfig,
    #[prop(into, default = "courses".to_owned())] section_id: String,
    #[prop(default = None)] preload_timeout_ms: Option<u64>,
) -> impl IntoView {
    let autoplay_every = config.autoplay_interval();
    let CarouselConfig { title, subtitle, items, animation, visible_count, autoplay_ms: _ } = config;

    let courses = RwSignal::new(items);
    let carousel = RwSignal::new(CarouselState::new(courses.get_untracked().len(), visible_count));
    let images = Signal::derive(move || course_images(&courses.get()));

    Effect::new(move || {
        let len = courses.with(Vec::len);
        carousel.update(|c| c.set_len(len));
    });

    #[cfg(feature = "hydrate")]
    {
        refresh_catalog(courses);
        if let Some(every) = autoplay_every {
            start_autoplay(carousel, every);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = autoplay_every;

    let on_prev = move |_| carousel.update(CarouselState::prev);
    let on_next = move |_| carousel.update(CarouselState::next);
    let track_style = move || {
        let offset = carousel.with(CarouselState::track_offset_percent);
        format!("transform: translateX({offset}%);")
    };
    let card_width = format!("flex: 0 0 calc(100% / {});", visible_count.max(1));

    view! {
        <section id=section_id class="section course-carousel">
            <header class="section__header">
                <h2 class="section__title">{title}</h2>
                <p class="section__subtitle">{subtitle}</p>
            </header>
            <div
                class="course-carousel__viewport"
                role="region"
                aria-label=move || format!("{} courses", carousel.with(CarouselState::len))
                on:mouseenter=move |_| carousel.update(|c| c.paused = true)
                on:mouseleave=move |_| carousel.update(|c| c.paused = false)
            >
                <GatedReveal images=images timeout_ms=preload_timeout_ms label="Loading courses">
                    <div class="course-carousel__track" style=track_style>
                        <For
                            each=move || courses.get().into_iter().enumerate()
                            key=|(_, course)| course.id.clone()
                            children={
                                let card_width = card_width.clone();
                                move |(index, course)| {
                                    view! {
                                        <CourseCard
                                            course=course
                                            index=index
                                            animation=animation
                                            style=card_width.clone()
                                            active=Signal::derive(move || carousel.get().is_visible(index))
                                        />
                                    }
                                }
                            }
                        />
                    </div>
                </GatedReveal>
                <Show when=move || carousel.with(CarouselState::is_empty)>
                    <p class="course-carousel__empty">"New courses are on the way. Check back soon."</p>
                </Show>
                <button class="course-carousel__nav course-carousel__nav--prev" aria-label="Previous courses" on:click=on_prev>
                    "‹"
                </button>
                <button class="course-carousel__nav course-carousel__nav--next" aria-label="Next courses" on:click=on_next>
                    "›"
                </button>
            </div>
            <div class="course-carousel__dots" role="tablist">
                {move || {
                    let state = carousel.get();
                    (0..state.positions())
                        .map(|position| {
                            view! {
                                <button
                                    class="course-carousel__dot"
                                    class:course-carousel__dot--active=position == state.index()
                                    role="tab"
                                    aria-label=format!("Show courses from {}", position + 1)
                                    on:click=move |_| carousel.update(|c| c.go_to(position))
                                ></button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
fn CourseCard(
    course: Course,
    index: usize,
    animation: AnimationStyle,
    style: String,
    #[prop(into)] active: Signal<bool>,
) -> impl IntoView {
    let reveal = use_context::<RevealContext>();
    let animate = move || reveal.is_some_and(|r| r.animations_enabled());
    let delay = format!("{style} animation-delay: {}ms;", index * 80);
    let stars = course.stars();
    let enrolled = course.enrolled_label();
    let Course { title, description, image, instructor, level, duration, lessons, rating, .. } = course;

    view! {
        <article
            class=format!("course-card {}", animation.class())
            class:course-card--animate=animate
            class:course-card--active=move || active.get()
            style=delay
        >
            <div class="course-card__media">
                <img class="course-card__image" src=image alt=title.clone() loading="eager"/>
                <span class=format!("level-badge {}", level.badge_class())>{level.label()}</span>
            </div>
            <div class="course-card__body">
                <h3 class="course-card__title">{title}</h3>
                <p class="course-card__description">{description}</p>
                <div class="course-card__details">
                    <div class="course-card__instructor">
                        <img
                            class="course-card__avatar"
                            src=instructor.avatar
                            alt=instructor.name.clone()
                            width="40"
                            height="40"
                        />
                        <div>
                            <p class="course-card__instructor-name">{instructor.name}</p>
                            <p class="course-card__instructor-title">{instructor.title}</p>
                        </div>
                    </div>
                    <dl class="course-card__facts">
                        <dt>"Duration"</dt>
                        <dd>{duration}</dd>
                        <dt>"Lessons"</dt>
                        <dd>{lessons}</dd>
                        <dt>"Learners"</dt>
                        <dd>{enrolled}</dd>
                    </dl>
                </div>
                <div class="course-card__footer">
                    <span class="course-card__rating" aria-label=format!("Rated {rating:.1} out of 5")>
                        <span class="course-card__stars">{stars}</span>
                        {format!("{rating:.1}")}
                    </span>
                    <a class="button button--primary course-card__cta" href="#contact">
                        "View course"
                    </a>
                </div>
            </div>
        </article>
    }
}

#[cfg(feature = "hydrate")]
fn refresh_catalog(courses: RwSignal<Vec<Course>>) {
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_courses().await {
            Ok(latest) => {
                let changed = courses.try_with_untracked(|current| *current != latest).unwrap_or(false);
                if changed {
                    log::info!("course catalog changed, {} courses", latest.len());
                    let _ = courses.try_set(latest);
                }
            }
            Err(e) => log::warn!("course catalog refresh failed: {e}"),
        }
    });
}

#[cfg(feature = "hydrate")]
fn start_autoplay(carousel: RwSignal<CarouselState>, every: std::time::Duration) {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    let alive = Arc::new(AtomicBool::new(true));
    let alive_task = alive.clone();
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(every).await;
            if !alive_task.load(Ordering::Relaxed) {
                break;
            }
            if carousel.try_update(|c| c.tick()).is_none() {
                break;
            }
        }
    });
    on_cleanup(move || alive.store(false, Ordering::Relaxed));
}
