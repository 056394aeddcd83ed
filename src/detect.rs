//! Device classification from user-agent and touch-capability signals.

/// iOS-family check used to gate the input-focus zoom workaround.
/// Substring match is case-sensitive on purpose; real iOS agents always
/// carry the capitalized token.
#[inline]
pub fn is_ios_user_agent(ua: &str) -> bool {
    ua.contains("iPhone") || ua.contains("iPad") || ua.contains("iPod")
}

/// Raw capability signals read from the page environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct TouchSignals {
    /// Whether an `ontouchstart` property exists on the window.
    pub ontouchstart: bool,
    /// `navigator.maxTouchPoints`.
    pub max_touch_points: i32,
    /// Legacy `navigator.msMaxTouchPoints`.
    pub ms_max_touch_points: i32,
}

/// A device is touch-capable if any one of the signals says so.
#[inline]
pub fn is_touch_device(signals: &TouchSignals) -> bool {
    signals.ontouchstart || signals.max_touch_points > 0 || signals.ms_max_touch_points > 0
}
