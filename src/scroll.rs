use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::config::PARALLAX_MAX_PERCENT;
use crate::section::{SectionBounds, SectionId};

/// A `scroll` listener on the window that is removed again when dropped.
/// Hold it inside an effect and return its drop as the effect cleanup.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn subscribe(window: Window, on_scroll: impl FnMut() + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(on_scroll) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .ok()?;
        debug!("scroll listener attached");
        Some(Self { window, callback })
    }

    /// Runs the handler once without waiting for the first scroll event.
    pub fn fire(&self) {
        let _ = self
            .callback
            .as_ref()
            .unchecked_ref::<web_sys::js_sys::Function>()
            .call0(&JsValue::NULL);
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
        debug!("scroll listener detached");
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    pub y: f64,
    /// 0.0 at the top of the page, 1.0 at the bottom.
    pub progress: f64,
}

pub fn read_scroll(window: &Window) -> Option<ScrollSample> {
    let y = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let total = window.document()?.document_element()?.scroll_height() as f64;
    Some(ScrollSample {
        y,
        progress: scroll_progress(y, total, viewport),
    })
}

pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let range = scroll_height - viewport_height;
    if range <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / range).clamp(0.0, 1.0)
}

/// Vertical shift of the hero content, in percent.
pub fn parallax_offset(progress: f64) -> f64 {
    progress.clamp(0.0, 1.0) * PARALLAX_MAX_PERCENT
}

/// Measures every `<section>` in the document whose id names a known
/// section, in document order. Anything else is skipped.
pub fn measure_sections(document: &Document) -> Vec<SectionBounds> {
    let Ok(nodes) = document.query_selector_all("section") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i)?.dyn_into::<HtmlElement>().ok())
        .filter_map(|element| {
            SectionBounds::from_element_id(
                &element.id(),
                element.offset_top() as f64,
                element.offset_height() as f64,
            )
            .map_err(|e| debug!("skipping section: {}", e))
            .ok()
        })
        .collect()
}

/// Smooth-scrolls `section` into view. A target missing from the document
/// is silently skipped.
pub fn scroll_to_section(section: SectionId) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()));

    let Some(element) = element else {
        debug!("navigation target #{} not found", section);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_spans_the_scrollable_range() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn progress_is_clamped_for_overscroll() {
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2300.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn unscrollable_page_reports_zero_progress() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(10.0, 600.0, 800.0), 0.0);
        assert_eq!(scroll_progress(f64::NAN, 3000.0, 800.0), 0.0);
    }

    #[test]
    fn parallax_maps_zero_to_zero_and_full_to_fifty() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(1.0), 50.0);
        assert_eq!(parallax_offset(0.5), 25.0);
    }

    #[test]
    fn parallax_is_monotone() {
        let mut previous = parallax_offset(-1.0);
        for step in 0..=200 {
            let offset = parallax_offset(step as f64 / 100.0 - 0.5);
            assert!(offset >= previous);
            assert!((0.0..=50.0).contains(&offset));
            previous = offset;
        }
    }
}
