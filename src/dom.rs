use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn add_listener(
    target: &web::EventTarget,
    kind: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

// Passive registration keeps scroll/touch handlers off the critical path.
pub fn add_passive_listener(
    target: &web::EventTarget,
    kind: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Schedule a single-shot callback; returns the timer handle on success.
pub fn schedule_once(window: &web::Window, delay_ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let cb = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)
        .ok()
}

#[inline]
pub fn cancel_timeout(window: &web::Window, handle: i32) {
    window.clear_timeout_with_handle(handle);
}

/// Iterate the elements of a selector match, skipping non-element nodes.
pub fn for_each_selected(
    document: &web::Document,
    selector: &str,
    mut f: impl FnMut(web::HtmlElement),
) {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return;
    };
    for i in 0..nodes.length() {
        if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok()) {
            f(el);
        }
    }
}
