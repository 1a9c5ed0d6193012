use super::*;

fn tops() -> Vec<(String, f64)> {
    vec![
        ("home".to_owned(), 0.0),
        ("courses".to_owned(), 800.0),
        ("features".to_owned(), 1500.0),
        ("contact".to_owned(), 2600.0),
    ]
}

#[test]
fn active_section_picks_last_passed_top() {
    let tops = tops();
    assert_eq!(active_section(&tops, 0.0), Some("home"));
    assert_eq!(active_section(&tops, 799.0), Some("home"));
    assert_eq!(active_section(&tops, 800.0), Some("courses"));
    assert_eq!(active_section(&tops, 2000.0), Some("features"));
    assert_eq!(active_section(&tops, 9000.0), Some("contact"));
}

#[test]
fn active_section_none_above_first() {
    let tops = vec![("courses".to_owned(), 400.0)];
    assert_eq!(active_section(&tops, 100.0), None);
    assert_eq!(active_section(&[], 100.0), None);
}

#[test]
fn on_scroll_uses_anchor_offset_and_threshold() {
    let mut nav = NavState::default();
    nav.on_scroll(0.0, &tops());
    assert!(!nav.scrolled);
    assert!(nav.is_active("home"));

    nav.on_scroll(800.0 - SPY_ANCHOR_OFFSET_PX, &tops());
    assert!(nav.scrolled);
    assert!(nav.is_active("courses"));
}

#[test]
fn follow_closes_menu_and_highlights() {
    let mut nav = NavState::default();
    nav.toggle_menu();
    assert!(nav.menu_open);
    nav.follow("contact");
    assert!(!nav.menu_open);
    assert!(nav.is_active("contact"));
    assert!(!nav.is_active("home"));
}
