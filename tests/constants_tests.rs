// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use portfolio_core::*;
use std::time::Duration;

#[test]
fn timeout_millis_passes_small_delays_through() {
    assert_eq!(timeout_millis(TYPING_START_DELAY), 1000);
    assert_eq!(timeout_millis(TYPING_STEP_DELAY), 15);
    assert_eq!(timeout_millis(Duration::ZERO), 0);
}

#[test]
fn timeout_millis_clamps_to_i32() {
    assert_eq!(timeout_millis(Duration::from_secs(u64::MAX / 4)), i32::MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_tuning_is_sane() {
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(REVEAL_TRANSITION_SECS > 0.0);
    assert_eq!(REVEAL_ROOT_MARGIN.split_whitespace().count(), 4);
    assert!(REVEAL_ROOT_MARGIN.ends_with("0px"));
}

#[test]
fn typing_waits_before_first_step() {
    assert!(TYPING_START_DELAY > TYPING_STEP_DELAY);
}

#[test]
fn navbar_colors_differ() {
    assert_ne!(NAVBAR_LIGHT_BACKGROUND, NAVBAR_DARK_BACKGROUND);
    assert_eq!(NAVBAR_SCROLL_THRESHOLD_PX, 50.0);
}

#[test]
fn default_config_matches_constants() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.toggle_selector, NAV_TOGGLE_SELECTOR);
    assert_eq!(cfg.code_selector, CODE_BLOCK_SELECTOR);
    assert_eq!(cfg.open_class, MENU_OPEN_CLASS);
    assert_eq!(cfg.revealed_class, REVEALED_CLASS);
    assert_eq!(
        cfg.reveal_options(),
        RevealOptions {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".into(),
        }
    );
    assert_ne!(DOM_READY_EVENT, CLICK_EVENT);
    assert_ne!(SCROLL_EVENT, STYLE_TAG);
    assert_eq!(DOCUMENT_LOADING_STATE, "loading");
}
