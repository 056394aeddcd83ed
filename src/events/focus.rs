use crate::constants::FORM_FIELD_SELECTOR;
use crate::detect;
use crate::dom;
use web_sys as web;

/// iOS zooms the page when a small-font input gains focus; reset the body
/// zoom on every focus. Other device families are left alone.
pub fn wire_ios_zoom_guard(window: &web::Window, document: &web::Document) {
    let ua = window.navigator().user_agent().unwrap_or_default();
    if !detect::is_ios_user_agent(&ua) {
        return;
    }
    log::debug!("[focus] iOS agent detected; arming zoom guard");

    dom::for_each_selected(document, FORM_FIELD_SELECTOR, |field| {
        let document = document.clone();
        dom::add_listener(&field, "focus", move |_| {
            if let Some(body) = document.body() {
                _ = body.style().set_property("zoom", "1");
            }
        });
    });
}
