use crate::constants::{
    ACTIVE_CLASS, COUNTER_BTN_SELECTOR, HEADER_HIGHLIGHT_COLOR, HIGHLIGHT_CLEAR_DELAY_MS,
    SECTION_HEADER_SELECTOR,
};
use crate::dom;
use crate::highlight::TapHighlight;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Pressed-state feedback on counter buttons: `active` while a finger is
/// down, removed on release.
pub fn wire_counter_feedback(document: &web::Document) {
    dom::for_each_selected(document, COUNTER_BTN_SELECTOR, |btn| {
        let pressed = btn.clone();
        dom::add_passive_listener(&btn, "touchstart", move |_| {
            _ = pressed.class_list().add_1(ACTIVE_CLASS);
        });
        let released = btn.clone();
        dom::add_passive_listener(&btn, "touchend", move |_| {
            _ = released.class_list().remove_1(ACTIVE_CLASS);
        });
    });
}

/// Brief background highlight when a section header is tapped. Each header
/// owns one pending clear timer; a tap while it is pending replaces it, so
/// the highlight always lasts the full delay from the latest tap.
pub fn wire_section_headers(document: &web::Document) {
    dom::for_each_selected(document, SECTION_HEADER_SELECTOR, |header| {
        let state = Rc::new(RefCell::new(TapHighlight::new()));
        let header_for_click = header.clone();
        dom::add_listener(&header, "click", move |_| {
            _ = header_for_click
                .style()
                .set_property("background-color", HEADER_HIGHLIGHT_COLOR);

            let Some(window) = web::window() else {
                return;
            };
            let (tap, stale_timer) = state.borrow_mut().press();
            if let Some(handle) = stale_timer {
                dom::cancel_timeout(&window, handle);
            }

            let state_for_timer = state.clone();
            let header_for_timer = header_for_click.clone();
            let timer = dom::schedule_once(&window, HIGHLIGHT_CLEAR_DELAY_MS, move || {
                if state_for_timer.borrow_mut().expire(tap) {
                    _ = header_for_timer.style().set_property("background-color", "");
                }
            });
            if let Some(handle) = timer {
                state.borrow_mut().arm(tap, handle);
            }
        });
    });
}
