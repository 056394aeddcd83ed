use crate::constants::{HIDDEN_CLASS, MENU_ID, MENU_TOGGLE_ID};
use crate::dom;
use crate::menu;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire the mobile menu: the toggle control flips the panel's `hidden`
/// class, and a document-wide click outside both closes it. Skips silently
/// when the page has no menu.
pub fn wire_menu_toggle(document: &web::Document) {
    let (Some(toggle), Some(panel)) = (
        document.get_element_by_id(MENU_TOGGLE_ID),
        document.get_element_by_id(MENU_ID),
    ) else {
        log::debug!("[menu] toggle or panel missing; skipping");
        return;
    };

    {
        let panel = panel.clone();
        dom::add_listener(&toggle, "click", move |ev| {
            ev.prevent_default();
            ev.stop_propagation();
            _ = panel.class_list().toggle(HIDDEN_CLASS);
        });
    }

    dom::add_listener(document, "click", move |ev| {
        let target = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
        let (in_toggle, in_panel) = match target {
            Some(node) => (
                toggle.contains(Some(&node)),
                panel.contains(Some(&node)),
            ),
            None => (false, false),
        };
        if menu::click_dismisses(in_toggle, in_panel) {
            _ = panel.class_list().add_1(HIDDEN_CLASS);
        }
    });
}
