//! Contact section with a local-only form.
//!
//! Field edits and validation stay in this component; a valid submission
//! swaps the form for a thank-you note.

use leptos::prelude::*;

use crate::components::scroll_reveal::ScrollReveal;
use crate::content::ContactSection;
use crate::state::contact::{ContactForm as ContactFields, ContactStatus};

const EXCERPT_CHARS: usize = 80;

#[component]
pub fn ContactForm(section: ContactSection, #[prop(into, default = "contact".to_owned())] section_id: String) -> impl IntoView {
    let ContactSection { title, subtitle, email, phone } = section;

    let fields = RwSignal::new(ContactFields::default());
    let status = RwSignal::new(ContactStatus::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let next = fields.with_untracked(ContactFields::submit);
        status.set(next);
    };
    let on_reset = move |_| {
        fields.set(ContactFields::default());
        status.set(ContactStatus::Editing);
    };

    let error_text = move || match status.get() {
        ContactStatus::Invalid(err) => err.to_string(),
        _ => String::new(),
    };
    let sent = move || match status.get() {
        ContactStatus::Sent(submission) => Some(submission),
        _ => None,
    };

    let mailto = format!("mailto:{email}");
    let tel = format!("tel:{}", phone.replace(' ', ""));

    view! {
        <section id=section_id class="section contact">
            <ScrollReveal class="contact__intro">
                <h2 class="section__title">{title}</h2>
                <p class="section__subtitle">{subtitle}</p>
                <ul class="contact__details">
                    <li><a href=mailto>{email}</a></li>
                    <li><a href=tel>{phone}</a></li>
                </ul>
            </ScrollReveal>
            <ScrollReveal class="contact__panel" delay_ms=120>
                <Show
                    when=move || sent().is_none()
                    fallback=move || {
                        view! {
                            <div class="contact__thanks" role="status">
                                {move || {
                                    sent()
                                        .map(|submission| {
                                            view! {
                                                <p>
                                                    {format!(
                                                        "Thanks, {}! We'll reply to {} soon.",
                                                        submission.name,
                                                        submission.email,
                                                    )}
                                                </p>
                                                <blockquote class="contact__echo">
                                                    {submission.excerpt(EXCERPT_CHARS)}
                                                </blockquote>
                                            }
                                        })
                                }}
                                <button class="button button--ghost" type="button" on:click=on_reset>
                                    "Send another message"
                                </button>
                            </div>
                        }
                    }
                >
                    <form class="contact__form" novalidate=true on:submit=on_submit>
                        <label class="contact__field">
                            <span>"Name"</span>
                            <input
                                type="text"
                                name="name"
                                autocomplete="name"
                                prop:value=move || fields.with(|f| f.name.clone())
                                on:input=move |ev| fields.update(|f| f.name = event_target_value(&ev))
                            />
                        </label>
                        <label class="contact__field">
                            <span>"Email"</span>
                            <input
                                type="email"
                                name="email"
                                autocomplete="email"
                                prop:value=move || fields.with(|f| f.email.clone())
                                on:input=move |ev| fields.update(|f| f.email = event_target_value(&ev))
                            />
                        </label>
                        <label class="contact__field">
                            <span>"Message"</span>
                            <textarea
                                name="message"
                                rows="5"
                                prop:value=move || fields.with(|f| f.message.clone())
                                on:input=move |ev| fields.update(|f| f.message = event_target_value(&ev))
                            ></textarea>
                        </label>
                        <Show when=move || !error_text().is_empty()>
                            <p class="contact__error" role="alert">{error_text}</p>
                        </Show>
                        <button class="button button--primary" type="submit">
                            "Send message"
                        </button>
                    </form>
                </Show>
            </ScrollReveal>
        </section>
    }
}
