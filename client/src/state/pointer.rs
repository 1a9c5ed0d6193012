//! Pointer-driven parallax for the hero section.
//!
//! The hero keeps a `PointerOffset` in its own signal; layers derive their
//! transform from it with a per-layer depth.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

/// Pointer position relative to the viewport centre, each axis in `[-1, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    /// Normalize client coordinates against the viewport size.
    pub fn from_client(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self { x: axis(client_x, width), y: axis(client_y, height) }
    }

    /// CSS transform for a layer. `strength` is the max shift in px at
    /// `depth == 1.0`; deeper layers move more.
    pub fn transform(self, strength: f64, depth: f64) -> String {
        let dx = -self.x * strength * depth;
        let dy = -self.y * strength * depth;
        format!("translate3d({dx:.1}px, {dy:.1}px, 0)")
    }
}

fn axis(position: f64, extent: f64) -> f64 {
    ((position / extent) * 2.0 - 1.0).clamp(-1.0, 1.0)
}
