use leptos::prelude::*;

use crate::content::{ContactSection, NavLink};

#[component]
pub fn Footer(brand: String, links: Vec<NavLink>, contact: ContactSection) -> impl IntoView {
    let links = links
        .into_iter()
        .map(|NavLink { label, section }| {
            view! {
                <li><a href=format!("#{section}")>{label}</a></li>
            }
        })
        .collect_view();

    view! {
        <footer class="footer">
            <div class="footer__brand">
                <strong>{brand.clone()}</strong>
                <p>{contact.email}</p>
                <p>{contact.phone}</p>
            </div>
            <ul class="footer__links">{links}</ul>
            <p class="footer__legal">{format!("© {brand}. All rights reserved.")}</p>
        </footer>
    }
}
