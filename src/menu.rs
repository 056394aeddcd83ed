//! Menu panel visibility decisions, kept free of web types.

/// The document-wide dismiss listener hides the panel only when the click
/// landed outside both the toggle control and the panel itself.
#[inline]
pub fn click_dismisses(target_in_toggle: bool, target_in_menu: bool) -> bool {
    !target_in_toggle && !target_in_menu
}
