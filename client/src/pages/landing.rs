//! The single landing route: every section in page order.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the site content from context and hands each section its slice of
//! it. Sections own their own visual state; the page only composes them.

use leptos::prelude::*;

use crate::components::{
    about::About, contact_form::ContactForm, course_carousel::CourseCarousel, footer::Footer, hero::Hero,
    nav_bar::NavBar, platform_features::PlatformFeatures, testimonials::Testimonials, virtual_lab::VirtualLab,
};
use crate::content::SiteContent;

#[component]
pub fn LandingPage() -> impl IntoView {
    let content = use_context::<SiteContent>().unwrap_or_else(SiteContent::embedded_or_default);
    let SiteContent { brand, nav, hero, courses, lab, platform, testimonials, about, contact, preload } = content;

    view! {
        <div class="landing">
            <NavBar brand=brand.clone() links=nav.clone()/>
            <main>
                <Hero config=hero preload_timeout_ms=preload.timeout_ms/>
                <CourseCarousel config=courses preload_timeout_ms=preload.timeout_ms/>
                <VirtualLab section=lab preload_timeout_ms=preload.timeout_ms/>
                <PlatformFeatures section=platform/>
                <Testimonials section=testimonials preload_timeout_ms=preload.timeout_ms/>
                <About section=about/>
                <ContactForm section=contact.clone()/>
            </main>
            <Footer brand=brand links=nav contact=contact/>
        </div>
    }
}
