//! Utilities invoked from inline markup event attributes
//! (`onsubmit="handleMobileFormSubmit(this)"`, `onchange="previewMobilePhoto(this)"`).

use crate::constants::{
    HIDDEN_CLASS, PHOTO_PREVIEW_ID, SAVING_INDICATOR_HTML, SUBMIT_CONTROL_SELECTOR,
    UPLOAD_PLACEHOLDER_ID,
};
use crate::dom;
use crate::preview::ReadTickets;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

thread_local! {
    static PHOTO_READS: RefCell<ReadTickets> = RefCell::new(ReadTickets::new());
}

/// Disable the form's submit control and swap in the saving indicator.
/// One-way: the page reloads or navigates away after submission.
#[wasm_bindgen(js_name = handleMobileFormSubmit)]
pub fn handle_mobile_form_submit(form: &web::HtmlElement) {
    let submit = form.query_selector(SUBMIT_CONTROL_SELECTOR).ok().flatten();
    let Some(submit) = submit else {
        log::debug!("[form] no submit control; skipping loading state");
        return;
    };
    if let Some(button) = submit.dyn_ref::<web::HtmlButtonElement>() {
        button.set_disabled(true);
    } else if let Some(input) = submit.dyn_ref::<web::HtmlInputElement>() {
        input.set_disabled(true);
    }
    submit.set_inner_html(SAVING_INDICATOR_HTML);
}

/// Read the selected photo as a data URL and show it in the preview image,
/// hiding the upload placeholder. A new selection invalidates any read still
/// in flight, so completions can never apply out of order.
#[wasm_bindgen(js_name = previewMobilePhoto)]
pub fn preview_mobile_photo(input: &web::HtmlInputElement) {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return;
    };
    let ticket = PHOTO_READS.with(|reads| reads.borrow_mut().issue());

    let reader = match web::FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            log::debug!("[photo] FileReader unavailable: {:?}", e);
            return;
        }
    };

    let reader_for_load = reader.clone();
    let onload = Closure::once_into_js(move || {
        let current = PHOTO_READS.with(|reads| reads.borrow().is_current(ticket));
        if !current {
            log::debug!("[photo] dropping stale read {ticket}");
            return;
        }
        let Ok(result) = reader_for_load.result() else {
            return;
        };
        let Some(data_url) = result.as_string() else {
            return;
        };
        apply_preview(&data_url);
    });
    reader.set_onload(Some(onload.unchecked_ref()));

    let onerror = Closure::once_into_js(move || {
        log::debug!("[photo] read failed for ticket {ticket}");
    });
    reader.set_onerror(Some(onerror.unchecked_ref()));

    if let Err(e) = reader.read_as_data_url(&file) {
        log::debug!("[photo] read_as_data_url: {:?}", e);
    }
}

fn apply_preview(data_url: &str) {
    let Some(document) = dom::window_document() else {
        return;
    };
    if let Some(preview) = document.get_element_by_id(PHOTO_PREVIEW_ID) {
        if let Some(image) = preview.dyn_ref::<web::HtmlImageElement>() {
            image.set_src(data_url);
        }
        _ = preview.class_list().remove_1(HIDDEN_CLASS);
    }
    if let Some(placeholder) = document.get_element_by_id(UPLOAD_PLACEHOLDER_ID) {
        _ = placeholder.class_list().add_1(HIDDEN_CLASS);
    }
}
