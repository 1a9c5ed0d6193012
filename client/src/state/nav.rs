//! Navigation bar state: active section, mobile menu, scrolled styling.
//!
//! DESIGN
//! ======
//! Section positions are measured by the caller (browser-only) and passed in,
//! so the scroll-spy rule stays a pure function.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Page offset past which the header switches to its compact style.
pub const SCROLLED_THRESHOLD_PX: f64 = 24.0;

/// Distance below the header at which a section counts as "current".
pub const SPY_ANCHOR_OFFSET_PX: f64 = 96.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub active_section: Option<String>,
    pub menu_open: bool,
    pub scrolled: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A link was followed: close the menu and highlight the target right away.
    pub fn follow(&mut self, section: &str) {
        self.menu_open = false;
        self.active_section = Some(section.to_owned());
    }

    /// Apply a scroll sample. `section_tops` are document offsets in page order.
    pub fn on_scroll(&mut self, scroll_y: f64, section_tops: &[(String, f64)]) {
        self.scrolled = scroll_y > SCROLLED_THRESHOLD_PX;
        self.active_section = active_section(section_tops, scroll_y + SPY_ANCHOR_OFFSET_PX).map(str::to_owned);
    }

    pub fn is_active(&self, section: &str) -> bool {
        self.active_section.as_deref() == Some(section)
    }
}

/// Last section (in page order) whose top is at or above `anchor_y`.
pub fn active_section(section_tops: &[(String, f64)], anchor_y: f64) -> Option<&str> {
    section_tops
        .iter()
        .take_while(|(_, top)| *top <= anchor_y)
        .last()
        .map(|(id, _)| id.as_str())
}
