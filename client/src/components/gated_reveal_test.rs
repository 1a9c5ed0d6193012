use super::*;

use std::collections::HashSet;

use futures::executor::block_on;
use futures::future::{self, LocalBoxFuture};
use leptos::reactive::owner::Owner;

use crate::preload::AssetLoadFailure;
use crate::state::reveal::RevealPhase;

/// Settles immediately; URLs in `broken` fail.
struct ScriptedLoader {
    broken: HashSet<String>,
}

impl ScriptedLoader {
    fn failing(urls: &[&str]) -> Self {
        Self { broken: urls.iter().map(|u| (*u).to_owned()).collect() }
    }
}

impl ImageLoader for ScriptedLoader {
    fn load(&self, url: &str) -> LocalBoxFuture<'static, Result<(), AssetLoadFailure>> {
        let result = if self.broken.contains(url) { Err(AssetLoadFailure::Rejected { url: url.to_owned() }) } else { Ok(()) };
        Box::pin(future::ready(result))
    }
}

fn urls(list: &[&str]) -> Vec<String> {
    list.iter().map(|u| (*u).to_owned()).collect()
}

fn phase(reveal: RwSignal<RevealState>) -> RevealPhase {
    reveal.get_untracked().phase()
}

// =============================================================
// Preload cycle
// =============================================================

#[test]
fn failed_image_still_opens_the_gate() {
    Owner::new().with(|| {
        let reveal = RwSignal::new(RevealState::new());
        let list = urls(&["a.png", "b.png"]);

        let ticket = begin_cycle(reveal, &list).expect("images to preload");
        assert_eq!(phase(reveal), RevealPhase::WaitingForAssets);

        let outcomes = block_on(run_cycle(&ScriptedLoader::failing(&["b.png"]), reveal, ticket, &list));
        assert_eq!(outcomes, vec![true, false]);
        assert_eq!(phase(reveal), RevealPhase::Ready);
    });
}

#[test]
fn list_change_after_ready_waits_again() {
    Owner::new().with(|| {
        let reveal = RwSignal::new(RevealState::new());
        let loader = ScriptedLoader::failing(&[]);
        let first = urls(&["a.png"]);
        let ticket = begin_cycle(reveal, &first).expect("images to preload");
        block_on(run_cycle(&loader, reveal, ticket, &first));
        assert_eq!(phase(reveal), RevealPhase::Ready);

        let second = urls(&["a.png", "c.png"]);
        let ticket = begin_cycle(reveal, &second).expect("images to preload");
        assert_eq!(phase(reveal), RevealPhase::WaitingForAssets);
        assert!(reveal.get_untracked().shows_placeholder());

        block_on(run_cycle(&loader, reveal, ticket, &second));
        assert_eq!(phase(reveal), RevealPhase::Ready);
    });
}

#[test]
fn superseded_cycle_cannot_open_the_gate() {
    Owner::new().with(|| {
        let reveal = RwSignal::new(RevealState::new());
        let loader = ScriptedLoader::failing(&[]);
        let old = urls(&["old.png"]);
        let new = urls(&["new.png"]);
        let old_ticket = begin_cycle(reveal, &old).expect("images to preload");
        let new_ticket = begin_cycle(reveal, &new).expect("images to preload");

        block_on(run_cycle(&loader, reveal, old_ticket, &old));
        assert_eq!(phase(reveal), RevealPhase::WaitingForAssets);

        block_on(run_cycle(&loader, reveal, new_ticket, &new));
        assert_eq!(phase(reveal), RevealPhase::Ready);
    });
}

#[test]
fn empty_list_settles_without_a_preload() {
    Owner::new().with(|| {
        let reveal = RwSignal::new(RevealState::new());
        assert_eq!(begin_cycle(reveal, &[]), None);
        assert_eq!(phase(reveal), RevealPhase::Ready);
    });
}

#[test]
fn settlement_after_dispose_is_dropped() {
    Owner::new().with(|| {
        let reveal = RwSignal::new(RevealState::new());
        let list = urls(&["late.png"]);
        let ticket = begin_cycle(reveal, &list).expect("images to preload");
        reveal.dispose();

        let outcomes = block_on(run_cycle(&ScriptedLoader::failing(&[]), reveal, ticket, &list));
        assert_eq!(outcomes, vec![true]);
        assert_eq!(settle(reveal, ticket), None);
        assert_eq!(begin_cycle(reveal, &list), None);
    });
}

// =============================================================
// Server render
// =============================================================

#[cfg(feature = "ssr")]
mod render {
    use leptos::tachys::view::RenderHtml as _;

    use super::*;

    fn render(images: Vec<String>) -> String {
        Owner::new().with(|| {
            view! {
                <GatedReveal images=Signal::stored(images)>
                    <p class="revealed">"Course grid"</p>
                </GatedReveal>
            }
            .to_html()
        })
    }

    #[test]
    fn empty_list_renders_content_immediately() {
        let html = render(Vec::new());
        assert!(html.contains("Course grid"), "{html}");
        assert!(!html.contains("gated-reveal__placeholder"), "{html}");
    }

    #[test]
    fn pending_images_render_the_placeholder() {
        let html = render(urls(&["a.png"]));
        assert!(html.contains("gated-reveal__placeholder"), "{html}");
        assert!(!html.contains("Course grid"), "{html}");
    }
}
