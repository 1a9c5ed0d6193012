use super::*;

#[test]
fn next_wraps_to_start() {
    let mut state = CarouselState::new(5, 3);
    assert_eq!(state.positions(), 3);
    state.next();
    state.next();
    assert_eq!(state.index(), 2);
    state.next();
    assert_eq!(state.index(), 0);
}

#[test]
fn prev_wraps_to_end() {
    let mut state = CarouselState::new(5, 3);
    state.prev();
    assert_eq!(state.index(), 2);
}

#[test]
fn fewer_items_than_visible_has_single_position() {
    let mut state = CarouselState::new(2, 3);
    assert_eq!(state.positions(), 1);
    state.next();
    assert_eq!(state.index(), 0);
    assert!(!state.tick());
}

#[test]
fn empty_carousel_is_inert() {
    let mut state = CarouselState::new(0, 3);
    assert!(state.is_empty());
    assert_eq!(state.positions(), 0);
    state.next();
    state.prev();
    state.go_to(4);
    assert_eq!(state.index(), 0);
}

#[test]
fn zero_visible_is_treated_as_one() {
    let state = CarouselState::new(4, 0);
    assert_eq!(state.positions(), 4);
}

#[test]
fn go_to_clamps() {
    let mut state = CarouselState::new(6, 2);
    state.go_to(99);
    assert_eq!(state.index(), 4);
}

#[test]
fn set_len_clamps_index_on_shrink() {
    let mut state = CarouselState::new(8, 2);
    state.go_to(6);
    state.set_len(4);
    assert_eq!(state.len(), 4);
    assert_eq!(state.index(), 2);
    state.set_len(0);
    assert_eq!(state.index(), 0);
}

#[test]
fn tick_respects_pause() {
    let mut state = CarouselState::new(4, 1);
    assert!(state.tick());
    assert_eq!(state.index(), 1);
    state.paused = true;
    assert!(!state.tick());
    assert_eq!(state.index(), 1);
}

#[test]
fn visibility_window_follows_index() {
    let mut state = CarouselState::new(5, 2);
    state.go_to(2);
    assert!(!state.is_visible(1));
    assert!(state.is_visible(2));
    assert!(state.is_visible(3));
    assert!(!state.is_visible(4));
}

#[test]
fn track_offset_moves_one_card_per_step() {
    let mut state = CarouselState::new(6, 4);
    assert_eq!(state.track_offset_percent(), 0.0);
    state.next();
    assert!((state.track_offset_percent() + 25.0).abs() < f64::EPSILON);
}
