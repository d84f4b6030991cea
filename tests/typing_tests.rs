// Host-side tests for the typing effect, driven on a logical clock.

use portfolio_core::typing::{self, frames};
use portfolio_core::*;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn code_block(markup: &str) -> (MemoryUi, ElementId) {
    let ui = MemoryUi::new();
    let el = ui.add_element(&[CODE_BLOCK_SELECTOR], markup);
    (ui, el)
}

/// True if `prefix` is `source` cut outside any tag (all samples are well-formed).
fn cut_outside_tag(source: &str, prefix: &str) -> bool {
    source.starts_with(prefix) && prefix.matches('<').count() == prefix.matches('>').count()
}

/// One step per tag plus one per character outside tags.
fn expected_steps(source: &str) -> usize {
    let mut in_tag = false;
    let mut steps = 0;
    for c in source.chars() {
        match (in_tag, c) {
            (false, '<') => {
                in_tag = true;
                steps += 1;
            }
            (true, '>') => in_tag = false,
            (true, _) => {}
            (false, _) => steps += 1,
        }
    }
    steps
}

#[test]
fn renders_sample_sequence_on_schedule() {
    let (ui, el) = code_block("ab<x>cd</x>");
    let clock = LogicalClock::new();
    let handle = typing::start(&ui, &clock, Some(el), &PageConfig::default());

    assert_eq!(ui.content(&el), "");
    assert_eq!(handle.phase(), TypingPhase::ArmedWaiting);

    assert_eq!(clock.advance(ms(999)), 0);
    assert_eq!(ui.content(&el), "");

    let expected = ["a", "ab", "ab<x>", "ab<x>c", "ab<x>cd", "ab<x>cd</x>"];
    assert_eq!(clock.advance(ms(1)), 1);
    assert_eq!(ui.content(&el), expected[0]);
    assert_eq!(handle.phase(), TypingPhase::Typing);
    for want in &expected[1..] {
        assert_eq!(clock.advance(ms(14)), 0);
        assert_eq!(clock.advance(ms(1)), 1);
        assert_eq!(ui.content(&el), *want);
    }
    assert_eq!(handle.phase(), TypingPhase::Done);
    assert_eq!(handle.steps(), 6);
    assert_eq!(clock.pending(), 0);
    assert_eq!(clock.now(), ms(1000 + 5 * 15));
}

#[test]
fn empty_source_schedules_nothing() {
    let (ui, el) = code_block("");
    let clock = LogicalClock::new();
    let handle = typing::start(&ui, &clock, Some(el), &PageConfig::default());
    assert_eq!(clock.pending(), 0);
    assert_eq!(handle.phase(), TypingPhase::Done);
    assert_eq!(handle.steps(), 0);
    assert_eq!(ui.content(&el), "");
}

#[test]
fn missing_target_stays_idle() {
    let ui = MemoryUi::new();
    let clock = LogicalClock::new();
    let handle = typing::start(&ui, &clock, None, &PageConfig::default());
    assert_eq!(handle.phase(), TypingPhase::Idle);
    assert_eq!(clock.pending(), 0);
}

#[test]
fn unterminated_tag_finishes_cleanly() {
    let (ui, el) = code_block("hi<span");
    let clock = LogicalClock::new();
    let handle = typing::start(&ui, &clock, Some(el), &PageConfig::default());
    assert_eq!(clock.run_until_idle(), 3);
    assert_eq!(ui.content(&el), "hi<span");
    assert_eq!(handle.phase(), TypingPhase::Done);
}

#[test]
fn every_frame_is_a_clean_prefix_and_last_is_source() {
    let samples = [
        "fn main() {}",
        "<span class=\"kw\">let</span> x = <b>1</b>;",
        "<pre><code>a &amp; b</code></pre>",
        "naïve <em>café</em> ✓",
        "<br/><br/>",
        "x",
    ];
    for src in samples {
        let fs = frames(src);
        assert_eq!(fs.last().map(String::as_str), Some(src), "source {src:?}");
        let mut prev_len = 0;
        for f in &fs {
            assert!(f.len() > prev_len, "frames grow strictly");
            assert!(cut_outside_tag(src, f), "{f:?} splits a tag of {src:?}");
            prev_len = f.len();
        }
        assert_eq!(fs.len(), expected_steps(src), "step count for {src:?}");
    }
}

#[test]
fn custom_delays_are_honoured() {
    let (ui, el) = code_block("ab");
    let clock = LogicalClock::new();
    let cfg = PageConfig {
        typing_start_delay: ms(10),
        typing_step_delay: ms(100),
        ..PageConfig::default()
    };
    typing::start(&ui, &clock, Some(el), &cfg);
    clock.advance(ms(10));
    assert_eq!(ui.content(&el), "a");
    clock.advance(ms(99));
    assert_eq!(ui.content(&el), "a");
    clock.advance(ms(1));
    assert_eq!(ui.content(&el), "ab");
}
