// Host-side tests for the frontend constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use abacus_core::scene::frame_primitives;
use abacus_core::{Abacus, Layout};
use constants::*;

#[test]
fn element_ids_are_distinct() {
    let ids = [CANVAS_ID, HELP_OVERLAY_ID, DIGITS_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn cursors_differ_per_state() {
    assert_ne!(CURSOR_IDLE, CURSOR_HOVER);
    assert_ne!(CURSOR_IDLE, CURSOR_ACTIVE);
    assert_ne!(CURSOR_HOVER, CURSOR_ACTIVE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn click_envelope_is_short_and_audible() {
    assert!(CLICK_FREQ_HZ > 20.0 && CLICK_FREQ_HZ < 20_000.0);
    assert!(CLICK_ATTACK_SEC > 0.0 && CLICK_DECAY_SEC > CLICK_ATTACK_SEC);
    // a click must end before the next one may start
    assert!(CLICK_ATTACK_SEC + CLICK_DECAY_SEC < 0.1);
    // exponential ramps need a strictly positive target
    assert!(CLICK_FLOOR_GAIN > 0.0 && CLICK_FLOOR_GAIN < CLICK_PEAK_GAIN);
    assert!(MASTER_GAIN > 0.0 && MASTER_GAIN <= 1.0);
}

#[test]
fn initial_instance_buffer_fits_every_layout() {
    for layout in [Layout::Free, Layout::Soroban] {
        let needed = frame_primitives(layout).len() + Abacus::new(layout).len();
        assert!(
            needed <= INITIAL_INSTANCE_CAPACITY,
            "{layout}: {needed} instances"
        );
    }
}
