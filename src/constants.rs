/// Scroll and tap-feedback tuning constants, plus the markup contract
/// (element ids, selectors, class names) the surrounding templates provide.
// Scroll depth below which chrome never hides
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 100.0;
pub const FAB_SCROLL_THRESHOLD_PX: f64 = 200.0;

// Tap highlight lifetime on section headers
pub const HIGHLIGHT_CLEAR_DELAY_MS: i32 = 150;

// Element ids owned by the templates
pub const MENU_TOGGLE_ID: &str = "mobile-menu-toggle";
pub const MENU_ID: &str = "mobile-menu";
pub const FAB_ID: &str = "mobile-add-log-btn";
pub const PHOTO_PREVIEW_ID: &str = "photoPreview";
pub const UPLOAD_PLACEHOLDER_ID: &str = "uploadPlaceholder";

// Selectors
pub const NAV_SELECTOR: &str = ".mobile-nav";
pub const COUNTER_BTN_SELECTOR: &str = ".counter-btn";
pub const SECTION_HEADER_SELECTOR: &str = ".section-header";
pub const FORM_FIELD_SELECTOR: &str = "input, select, textarea";
pub const SUBMIT_CONTROL_SELECTOR: &str = "[type=\"submit\"]";

// CSS classes the stylesheet provides
pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";
pub const TOUCH_DEVICE_CLASS: &str = "touch-device";

// Inline style values
pub const NAV_HIDE_TRANSFORM: &str = "translateY(100%)";
pub const FAB_HIDE_TRANSFORM: &str = "translateY(100px)";
pub const SHOW_TRANSFORM: &str = "translateY(0)";
pub const HEADER_HIGHLIGHT_COLOR: &str = "rgba(0,0,0,0.05)";

// Saving indicator injected into the submit control
pub const SAVING_INDICATOR_HTML: &str =
    "<span class=\"material-symbols-outlined animate-spin\">refresh</span> Saving...";
