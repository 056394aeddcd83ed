// Host-side tests for the photo-preview read tickets.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/preview.rs"]
mod preview;

use preview::ReadTickets;

#[test]
fn tickets_increase_monotonically() {
    let mut reads = ReadTickets::new();
    let a = reads.issue();
    let b = reads.issue();
    let c = reads.issue();
    assert!(a < b && b < c);
}

#[test]
fn only_the_latest_ticket_is_current() {
    let mut reads = ReadTickets::new();
    let first = reads.issue();
    assert!(reads.is_current(first));
    let second = reads.issue();
    assert!(!reads.is_current(first));
    assert!(reads.is_current(second));
}

#[test]
fn unissued_ticket_is_never_current() {
    let reads = ReadTickets::new();
    assert!(!reads.is_current(0));
}

#[test]
fn slow_read_from_an_old_selection_is_stale() {
    let mut reads = ReadTickets::new();
    let slow = reads.issue();
    // User picks another file before the first read completes
    let fast = reads.issue();
    // Completions may arrive in either order; only the latest applies
    assert!(!reads.is_current(slow));
    assert!(reads.is_current(fast));
}
