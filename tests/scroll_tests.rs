// Host-side tests for the scroll-direction visibility law.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/scroll.rs"]
mod scroll;

use scroll::{ScrollAction, ScrollTracker};

#[test]
fn shallow_downward_scroll_keeps_chrome_shown() {
    let mut tracker = ScrollTracker::new(100.0);
    // Moving down but still above the threshold
    assert_eq!(tracker.observe(50.0), ScrollAction::Show);
    assert_eq!(tracker.observe(99.0), ScrollAction::Show);
}

#[test]
fn downward_scroll_past_threshold_hides() {
    let mut tracker = ScrollTracker::new(100.0);
    assert_eq!(tracker.observe(150.0), ScrollAction::Hide);
    assert_eq!(tracker.observe(300.0), ScrollAction::Hide);
}

#[test]
fn exactly_at_threshold_stays_shown() {
    let mut tracker = ScrollTracker::new(100.0);
    // The law is strictly greater-than
    assert_eq!(tracker.observe(100.0), ScrollAction::Show);
}

#[test]
fn any_upward_movement_shows_immediately() {
    let mut tracker = ScrollTracker::new(100.0);
    assert_eq!(tracker.observe(500.0), ScrollAction::Hide);
    // A single pixel up is enough; no hysteresis band
    assert_eq!(tracker.observe(499.0), ScrollAction::Show);
}

#[test]
fn repeated_offset_is_not_a_downward_move() {
    let mut tracker = ScrollTracker::new(100.0);
    assert_eq!(tracker.observe(300.0), ScrollAction::Hide);
    assert_eq!(tracker.observe(300.0), ScrollAction::Show);
    assert_eq!(tracker.observe(300.0), ScrollAction::Show);
}

#[test]
fn stored_offset_updates_after_every_event() {
    let mut tracker = ScrollTracker::new(100.0);
    assert_eq!(tracker.observe(150.0), ScrollAction::Hide);
    assert_eq!(tracker.observe(140.0), ScrollAction::Show);
    assert_eq!(tracker.last_offset(), 140.0);
    // 145 is below the earlier 150 peak but above the updated 140
    assert_eq!(tracker.observe(145.0), ScrollAction::Hide);
}

#[test]
fn deeper_threshold_follows_the_same_law() {
    let mut tracker = ScrollTracker::new(200.0);
    assert_eq!(tracker.observe(150.0), ScrollAction::Show);
    assert_eq!(tracker.observe(250.0), ScrollAction::Hide);
    assert_eq!(tracker.observe(100.0), ScrollAction::Show);
    // Down again, but not yet past the deeper threshold
    assert_eq!(tracker.observe(150.0), ScrollAction::Show);
}

#[test]
fn matches_reference_sequence() {
    // offset, expected pairs covering a full down-up-down gesture
    let steps: &[(f64, ScrollAction)] = &[
        (0.0, ScrollAction::Show),
        (80.0, ScrollAction::Show),
        (120.0, ScrollAction::Hide),
        (400.0, ScrollAction::Hide),
        (390.0, ScrollAction::Show),
        (395.0, ScrollAction::Hide),
        (0.0, ScrollAction::Show),
    ];
    let mut tracker = ScrollTracker::new(100.0);
    for (offset, expected) in steps {
        assert_eq!(tracker.observe(*offset), *expected, "at offset {offset}");
    }
}
