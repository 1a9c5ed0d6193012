//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::SiteContent;
use crate::pages::landing::LandingPage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the site content to every section and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let content = SiteContent::embedded_or_default();
    let title = if content.brand.is_empty() { "Online courses".to_owned() } else { content.brand.clone() };
    let description = content.hero.subtitle.clone();
    provide_context(content);

    view! {
        <Stylesheet id="leptos" href="/pkg/coursewave.css"/>
        <Title text=title/>
        <Meta name="description" content=description/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
            </Routes>
        </Router>
    }
}
