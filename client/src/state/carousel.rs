//! Carousel position and autoplay state.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    visible: usize,
    index: usize,
    pub paused: bool,
}

impl CarouselState {
    /// `visible` is how many items are on screen at once; at least one.
    pub fn new(len: usize, visible: usize) -> Self {
        Self { len, visible: visible.max(1), index: 0, paused: false }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct start positions (one dot per position).
    pub fn positions(&self) -> usize {
        if self.len <= self.visible { usize::from(self.len > 0) } else { self.len - self.visible + 1 }
    }

    pub fn next(&mut self) {
        let positions = self.positions();
        if positions > 0 {
            self.index = (self.index + 1) % positions;
        }
    }

    pub fn prev(&mut self) {
        let positions = self.positions();
        if positions > 0 {
            self.index = (self.index + positions - 1) % positions;
        }
    }

    pub fn go_to(&mut self, index: usize) {
        let positions = self.positions();
        if positions > 0 {
            self.index = index.min(positions - 1);
        }
    }

    /// Resize for a replaced item list, keeping the index in range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        let positions = self.positions();
        self.index = if positions == 0 { 0 } else { self.index.min(positions - 1) };
    }

    /// Autoplay step: advances unless paused.
    pub fn tick(&mut self) -> bool {
        if self.paused || self.positions() <= 1 {
            return false;
        }
        self.next();
        true
    }

    pub fn is_visible(&self, item: usize) -> bool {
        item >= self.index && item < self.index + self.visible
    }

    /// CSS translate percentage for the track.
    #[allow(clippy::cast_precision_loss)]
    pub fn track_offset_percent(&self) -> f64 {
        -(self.index as f64) * 100.0 / self.visible as f64
    }
}
