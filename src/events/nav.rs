use crate::constants::{
    FAB_HIDE_TRANSFORM, FAB_ID, FAB_SCROLL_THRESHOLD_PX, NAV_HIDE_TRANSFORM,
    NAV_SCROLL_THRESHOLD_PX, NAV_SELECTOR, SHOW_TRANSFORM,
};
use crate::dom;
use crate::scroll::{ScrollAction, ScrollTracker};
use wasm_bindgen::JsCast;
use web_sys as web;

// Inline style properties applied on hide/show.
struct ScrollEffect {
    hide: &'static [(&'static str, &'static str)],
    show: &'static [(&'static str, &'static str)],
}

static NAV_EFFECT: ScrollEffect = ScrollEffect {
    hide: &[("transform", NAV_HIDE_TRANSFORM)],
    show: &[("transform", SHOW_TRANSFORM)],
};

// The FAB slides down a fixed offset and fades instead of leaving the screen.
static FAB_EFFECT: ScrollEffect = ScrollEffect {
    hide: &[("transform", FAB_HIDE_TRANSFORM), ("opacity", "0")],
    show: &[("transform", SHOW_TRANSFORM), ("opacity", "1")],
};

/// Hide the bottom nav while scrolling down past the threshold, show it on
/// any upward movement.
pub fn wire_nav_visibility(document: &web::Document) {
    let nav = document
        .query_selector(NAV_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    let Some(nav) = nav else {
        log::debug!("[nav] no {NAV_SELECTOR}; skipping");
        return;
    };
    wire_scroll_visibility(nav, NAV_SCROLL_THRESHOLD_PX, &NAV_EFFECT);
}

/// Same law as the nav with its own tracker and a deeper threshold.
pub fn wire_fab_visibility(document: &web::Document) {
    let fab = document
        .get_element_by_id(FAB_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    let Some(fab) = fab else {
        log::debug!("[fab] no #{FAB_ID}; skipping");
        return;
    };
    wire_scroll_visibility(fab, FAB_SCROLL_THRESHOLD_PX, &FAB_EFFECT);
}

fn wire_scroll_visibility(el: web::HtmlElement, threshold: f64, effect: &'static ScrollEffect) {
    let Some(window) = web::window() else {
        return;
    };
    let mut tracker = ScrollTracker::new(threshold);
    let window_for_offset = window.clone();
    dom::add_passive_listener(&window, "scroll", move |_| {
        let offset = window_for_offset.page_y_offset().unwrap_or(0.0);
        let styles = match tracker.observe(offset) {
            ScrollAction::Hide => effect.hide,
            ScrollAction::Show => effect.show,
        };
        for (prop, value) in styles {
            _ = el.style().set_property(prop, value);
        }
    });
}
