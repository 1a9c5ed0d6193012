//! Scroll measurement and anchor navigation.
//!
//! Browser calls are gated on `hydrate`; on the server and in native tests
//! they return neutral values so the calling components render unchanged.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Fraction of an element that must be inside the viewport before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Whether an element spanning `[top, top + height)` in viewport coordinates
/// is visible by at least `threshold` of its height (capped to the viewport).
pub fn in_view(top: f64, height: f64, viewport_height: f64, threshold: f64) -> bool {
    if viewport_height <= 0.0 {
        return false;
    }
    let bottom = top + height.max(0.0);
    let visible = bottom.min(viewport_height) - top.max(0.0);
    let needed = (height.min(viewport_height) * threshold.clamp(0.0, 1.0)).max(1.0);
    visible >= needed
}

/// How far an element has travelled through the viewport: `0.0` when its top
/// meets the viewport bottom, `1.0` when its bottom meets the viewport top.
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let span = viewport_height + height.max(0.0);
    if span <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / span).clamp(0.0, 1.0)
}

/// Piecewise-linear map of `progress` through matching `stops` and `values`.
///
/// `stops` must be ascending and the same length as `values`. Inputs outside
/// the stops clamp to the first or last value.
pub fn interpolate(progress: f64, stops: &[f64], values: &[f64]) -> f64 {
    let (Some(&first), Some(&last)) = (stops.first(), stops.last()) else {
        return 0.0;
    };
    let count = stops.len().min(values.len());
    if count == 0 {
        return 0.0;
    }
    if progress <= first {
        return values[0];
    }
    if progress >= last {
        return values[count - 1];
    }
    for i in 1..count {
        let (lo, hi) = (stops[i - 1], stops[i]);
        if progress <= hi {
            let t = if hi > lo { (progress - lo) / (hi - lo) } else { 1.0 };
            return values[i - 1] + (values[i] - values[i - 1]) * t;
        }
    }
    values[count - 1]
}

/// Current vertical scroll offset of the page.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Height of the layout viewport.
pub fn viewport_height() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Smooth-scroll the section with id `section` into view.
///
/// Returns `false` when the section is not on the page.
pub fn scroll_to_section(section: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section))
        else {
            log::debug!("no section with id {section}");
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = section;
        false
    }
}

/// Document offsets of the given sections, skipping ids not on the page.
pub fn section_tops(sections: &[String]) -> Vec<(String, f64)> {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        let offset = scroll_y();
        sections
            .iter()
            .filter_map(|id| {
                let el = doc.get_element_by_id(id)?;
                Some((id.clone(), el.get_bounding_client_rect().top() + offset))
            })
            .collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = sections;
        Vec::new()
    }
}
