#![cfg(target_arch = "wasm32")]
//! Mobile UI behaviors for server-rendered management pages: menu toggling,
//! scroll-direction show/hide of the bottom nav and FAB, touch feedback,
//! iOS zoom workaround, and markup-invoked form/photo utilities. The markup
//! and stylesheet own the elements; this module only wires listeners and
//! toggles classes and inline styles.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod detect;
mod dom;
mod events;
mod forms;
mod highlight;
mod menu;
mod preview;
mod scroll;

pub use forms::{handle_mobile_form_submit, preview_mobile_photo};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("mobile-web starting");

    let Some(window) = web::window() else {
        return Ok(());
    };
    let Some(document) = window.document() else {
        return Ok(());
    };

    // Touch classification applies as soon as the module is evaluated.
    classify_touch_device(&window, &document);

    // Everything else needs the structural content in place.
    if document.ready_state() == web::DocumentReadyState::Loading {
        dom::add_listener(&document, "DOMContentLoaded", move |_| run_init());
    } else {
        run_init();
    }
    Ok(())
}

fn run_init() {
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    events::menu::wire_menu_toggle(&document);
    events::nav::wire_nav_visibility(&document);
    events::touch::wire_counter_feedback(&document);
    events::nav::wire_fab_visibility(&document);
    events::touch::wire_section_headers(&document);
    events::focus::wire_ios_zoom_guard(&window, &document);
    Ok(())
}

// Runs once per page load; the classification is never re-evaluated.
fn classify_touch_device(window: &web::Window, document: &web::Document) {
    let navigator = window.navigator();
    let signals = detect::TouchSignals {
        ontouchstart: js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("ontouchstart"))
            .unwrap_or(false),
        max_touch_points: navigator.max_touch_points(),
        ms_max_touch_points: js_sys::Reflect::get(
            navigator.as_ref(),
            &JsValue::from_str("msMaxTouchPoints"),
        )
        .ok()
        .and_then(|v| v.as_f64())
        .map(|v| v as i32)
        .unwrap_or(0),
    };
    if detect::is_touch_device(&signals) {
        if let Some(body) = document.body() {
            _ = body.class_list().add_1(constants::TOUCH_DEVICE_CLASS);
        }
    }
}
