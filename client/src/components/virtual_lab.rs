//! Hands-on lab showcase.
//!
//! DESIGN
//! ======
//! A code workspace and a rendered dashboard sit side by side with a particle
//! stream flowing between them. The stream only runs after hydration: a timer
//! loop spawns one particle per interval, and each particle launches and
//! expires on its own short timers. The loop stops when the component is
//! disposed; particle timers that fire later hit a disposed signal and do
//! nothing.
//!
//! The dashboard image sits behind the preload gate like the course cards.

use leptos::prelude::*;

use crate::components::gated_reveal::GatedReveal;
use crate::components::scroll_reveal::ScrollReveal;
use crate::content::{Feature, LabSection};
use crate::state::particles::{Particle, ParticleStream};
use crate::util::scroll;

const PARTICLE_SEED: u64 = 0x1ab5;
/// Particles emitted at once by the run button.
const BURST: usize = 5;
const STAGGER_MS: u32 = 100;

#[component]
pub fn VirtualLab(
    section: LabSection,
    #[prop(into, default = "features".to_owned())] section_id: String,
    #[prop(default = None)] preload_timeout_ms: Option<u64>,
) -> impl IntoView {
    let images = section.image_urls();
    let interval = section.particle_interval();
    let LabSection {
        title,
        description,
        workspace_label,
        code_sample,
        tools,
        run_label,
        visualization_label,
        visualization_image,
        visualization_alt,
        status,
        tracks,
        cta_label,
        cta_note,
        particle_interval_ms: _,
    } = section;

    let stream = RwSignal::new(ParticleStream::new(PARTICLE_SEED));

    #[cfg(feature = "hydrate")]
    start_stream(stream, interval);
    #[cfg(not(feature = "hydrate"))]
    let _ = interval;

    let on_run = move |_| {
        #[cfg(feature = "hydrate")]
        for _ in 0..BURST {
            emit(stream);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (stream, BURST);
    };

    let tool_tags = tools
        .into_iter()
        .map(|tool| view! { <span class="lab__tag">{tool}</span> })
        .collect_view();

    let track_cards = tracks
        .into_iter()
        .zip(1_u32..)
        .map(|(Feature { icon, title, description }, i)| {
            view! {
                <ScrollReveal class="lab-track" delay_ms=i * STAGGER_MS>
                    <span class="lab-track__icon" aria-hidden="true">{icon}</span>
                    <h3 class="lab-track__title">{title}</h3>
                    <p class="lab-track__description">{description}</p>
                </ScrollReveal>
            }
        })
        .collect_view();

    view! {
        <section id=section_id class="section lab">
            <ScrollReveal class="section__header">
                <h2 class="section__title">{title}</h2>
                <p class="section__subtitle">{description}</p>
            </ScrollReveal>
            <ScrollReveal class="lab__stage">
                <div class="lab__panel">
                    <header class="lab__panel-header">{workspace_label}</header>
                    <pre class="lab__code"><code>{code_sample}</code></pre>
                    <footer class="lab__panel-footer">
                        <div class="lab__tags">{tool_tags}</div>
                        <button class="button button--primary lab__run" type="button" on:click=on_run>
                            {run_label}
                        </button>
                    </footer>
                </div>
                <div class="lab__lane" aria-hidden="true">
                    <For
                        each=move || stream.with(|s| s.particles().iter().map(|p| p.id).collect::<Vec<_>>())
                        key=|id| *id
                        children=move |id| {
                            view! {
                                <span
                                    class="lab__particle"
                                    style=move || stream.with(|s| s.get(id).map(Particle::style).unwrap_or_default())
                                ></span>
                            }
                        }
                    />
                </div>
                <div class="lab__panel">
                    <header class="lab__panel-header">{visualization_label}</header>
                    <GatedReveal
                        images=Signal::stored(images)
                        timeout_ms=preload_timeout_ms
                        placeholder_height="18rem"
                        label="Loading dashboard"
                    >
                        <img class="lab__visual" src=visualization_image.clone() alt=visualization_alt.clone()/>
                    </GatedReveal>
                    <p class="lab__status">
                        <span class="lab__status-dot" aria-hidden="true"></span>
                        {status}
                    </p>
                </div>
            </ScrollReveal>
            <div class="lab__tracks">{track_cards}</div>
            <ScrollReveal class="lab__cta">
                <a
                    class="button button--primary"
                    href="#contact"
                    on:click=move |ev| {
                        if scroll::scroll_to_section("contact") {
                            ev.prevent_default();
                        }
                    }
                >
                    {cta_label}
                </a>
                <p class="lab__cta-note">{cta_note}</p>
            </ScrollReveal>
        </section>
    }
}

/// Spawn one particle and schedule its launch and expiry. `false` once the
/// stream has been disposed.
#[cfg(feature = "hydrate")]
fn emit(stream: RwSignal<ParticleStream>) -> bool {
    use std::time::Duration;

    use crate::state::particles::{FADE_MS, LAUNCH_DELAY_MS};

    let Some(id) = stream.try_update(ParticleStream::spawn) else {
        return false;
    };
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(Duration::from_millis(LAUNCH_DELAY_MS)).await;
        if stream.try_update(|s| s.launch(id)).is_none() {
            return;
        }
        gloo_timers::future::sleep(Duration::from_millis(FADE_MS)).await;
        let _ = stream.try_update(|s| s.expire(id));
    });
    true
}

#[cfg(feature = "hydrate")]
fn start_stream(stream: RwSignal<ParticleStream>, every: std::time::Duration) {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    let alive = Arc::new(AtomicBool::new(true));
    let alive_task = alive.clone();
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(every).await;
            if !alive_task.load(Ordering::Relaxed) || !emit(stream) {
                break;
            }
        }
        log::debug!("lab particle stream stopped");
    });
    on_cleanup(move || alive.store(false, Ordering::Relaxed));
}
