//! Direction-based visibility for scroll-tracking chrome (bottom nav, FAB).
//! Kept free of web types so host-side tests can exercise the law directly.

/// What the owning listener should do with its element after a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAction {
    Show,
    Hide,
}

/// Last observed vertical offset plus the depth below which chrome never
/// hides. Each scroll listener owns exactly one tracker; nothing is shared.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    last: f64,
    threshold: f64,
}

impl ScrollTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            last: 0.0,
            threshold,
        }
    }

    /// Observe the current offset and decide visibility: hide only when the
    /// page moved down AND is past the threshold; any upward movement shows
    /// immediately (no hysteresis). The stored offset updates unconditionally.
    pub fn observe(&mut self, offset: f64) -> ScrollAction {
        let action = if offset > self.last && offset > self.threshold {
            ScrollAction::Hide
        } else {
            ScrollAction::Show
        };
        self.last = offset;
        action
    }

    #[inline]
    pub fn last_offset(&self) -> f64 {
        self.last
    }
}
