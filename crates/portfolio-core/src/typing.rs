//! Progressive "typing" playback of pre-rendered markup.
//!
//! Text is revealed one character per step, tags one whole tag per step, so
//! the rendered content is never cut inside a tag. [`TypingPlayback`] is the
//! pure producer of successive buffers; [`start`] drives it on a
//! [`Scheduler`] and renders each buffer through a [`UiBinding`].

use crate::config::PageConfig;
use crate::scheduler::Scheduler;
use crate::ui::UiBinding;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Captured source markup, a cursor into it and everything emitted so far.
///
/// `cursor` is a byte offset that always sits on a char boundary; `output`
/// always equals `source[..cursor]`.
#[derive(Clone, Debug)]
pub struct TypingPlayback {
    source: String,
    cursor: usize,
    output: String,
}

impl TypingPlayback {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let output = String::with_capacity(source.len());
        Self {
            source,
            cursor: 0,
            output,
        }
    }

    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn output(&self) -> &str {
        &self.output
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.cursor >= self.source.len()
    }

    /// Length in bytes of the unit starting at the cursor: a whole tag through
    /// its `>` (or to the end if unterminated), otherwise one character.
    fn next_unit_len(&self) -> usize {
        let rest = &self.source[self.cursor..];
        if rest.starts_with('<') {
            rest.find('>').map_or(rest.len(), |end| end + 1)
        } else {
            rest.chars().next().map_or(0, char::len_utf8)
        }
    }

    /// Advance by one unit and return the new buffer, or `None` once done.
    pub fn step(&mut self) -> Option<&str> {
        if self.is_done() {
            return None;
        }
        let len = self.next_unit_len();
        let end = self.cursor + len;
        self.output.push_str(&self.source[self.cursor..end]);
        self.cursor = end;
        Some(&self.output)
    }
}

impl Iterator for TypingPlayback {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.step().map(str::to_owned)
    }
}

/// Every intermediate buffer for `source`, in order.
pub fn frames(source: &str) -> Vec<String> {
    TypingPlayback::new(source).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    /// No target element; nothing was captured or scheduled.
    Idle,
    /// Content captured and cleared, start delay pending.
    ArmedWaiting,
    Typing,
    /// Source fully rendered; nothing left scheduled.
    Done,
}

/// Phase machine around a [`TypingPlayback`].
#[derive(Debug)]
pub struct TypingAnimator {
    phase: TypingPhase,
    playback: Option<TypingPlayback>,
    steps: usize,
}

impl Default for TypingAnimator {
    fn default() -> Self {
        Self::idle()
    }
}

impl TypingAnimator {
    pub fn idle() -> Self {
        Self {
            phase: TypingPhase::Idle,
            playback: None,
            steps: 0,
        }
    }

    /// Capture `source`. An empty source has nothing to type and is done at once.
    pub fn armed(source: impl Into<String>) -> Self {
        let playback = TypingPlayback::new(source);
        if playback.is_done() {
            return Self {
                phase: TypingPhase::Done,
                playback: None,
                steps: 0,
            };
        }
        Self {
            phase: TypingPhase::ArmedWaiting,
            playback: Some(playback),
            steps: 0,
        }
    }

    #[inline]
    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Emit the next buffer through `render`. Returns whether another step is
    /// needed; the playback state is dropped as soon as the source is consumed.
    pub fn advance(&mut self, render: impl FnOnce(&str)) -> bool {
        let Some(playback) = self.playback.as_mut() else {
            return false;
        };
        self.phase = TypingPhase::Typing;
        if let Some(out) = playback.step() {
            render(out);
            self.steps += 1;
        }
        if playback.is_done() {
            self.phase = TypingPhase::Done;
            self.playback = None;
            log::debug!("[typing] done after {} steps", self.steps);
            return false;
        }
        true
    }
}

/// Shared view of a running animation.
#[derive(Clone, Debug)]
pub struct TypingHandle {
    state: Rc<RefCell<TypingAnimator>>,
}

impl TypingHandle {
    pub fn phase(&self) -> TypingPhase {
        self.state.borrow().phase()
    }

    pub fn steps(&self) -> usize {
        self.state.borrow().steps()
    }
}

/// Capture the markup of `target`, clear it, and replay it after the start
/// delay. A missing target leaves the animator idle.
pub fn start<U: UiBinding, S: Scheduler>(
    ui: &U,
    scheduler: &S,
    target: Option<U::Element>,
    cfg: &PageConfig,
) -> TypingHandle {
    let Some(target) = target else {
        log::debug!("[typing] no code block, skipping");
        return TypingHandle {
            state: Rc::new(RefCell::new(TypingAnimator::idle())),
        };
    };
    let source = ui.content(&target);
    ui.set_content(&target, "");
    let state = Rc::new(RefCell::new(TypingAnimator::armed(source)));
    if state.borrow().phase() == TypingPhase::ArmedWaiting {
        schedule_step(
            ui.clone(),
            scheduler.clone(),
            target,
            state.clone(),
            cfg.typing_start_delay,
            cfg.typing_step_delay,
        );
    }
    TypingHandle { state }
}

fn schedule_step<U: UiBinding, S: Scheduler>(
    ui: U,
    scheduler: S,
    target: U::Element,
    state: Rc<RefCell<TypingAnimator>>,
    delay: Duration,
    step_delay: Duration,
) {
    let next = scheduler.clone();
    scheduler.schedule(
        delay,
        Box::new(move || {
            let more = state
                .borrow_mut()
                .advance(|out| ui.set_content(&target, out));
            if more {
                schedule_step(ui, next, target, state, step_delay, step_delay);
            }
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_emitted_whole() {
        assert_eq!(
            frames("ab<x>cd</x>"),
            vec!["a", "ab", "ab<x>", "ab<x>c", "ab<x>cd", "ab<x>cd</x>"]
        );
    }

    #[test]
    fn empty_source_has_no_frames() {
        assert!(frames("").is_empty());
        assert!(TypingPlayback::new("").is_done());
    }

    #[test]
    fn unterminated_tag_runs_to_end_in_one_step() {
        let mut p = TypingPlayback::new("a<b c");
        assert_eq!(p.step(), Some("a"));
        assert_eq!(p.step(), Some("a<b c"));
        assert!(p.is_done());
        assert_eq!(p.step(), None);
    }

    #[test]
    fn multibyte_text_advances_per_char() {
        assert_eq!(frames("é<i>ü</i>"), vec!["é", "é<i>", "é<i>ü", "é<i>ü</i>"]);
    }

    #[test]
    fn stray_close_bracket_is_plain_text() {
        assert_eq!(frames("a>b"), vec!["a", "a>", "a>b"]);
    }

    #[test]
    fn animator_phases() {
        let mut a = TypingAnimator::armed("a<b>");
        assert_eq!(a.phase(), TypingPhase::ArmedWaiting);
        let mut seen = Vec::new();
        assert!(a.advance(|o| seen.push(o.to_owned())));
        assert_eq!(a.phase(), TypingPhase::Typing);
        assert!(!a.advance(|o| seen.push(o.to_owned())));
        assert_eq!(a.phase(), TypingPhase::Done);
        assert!(!a.advance(|_| panic!("no render after done")));
        assert_eq!(seen, vec!["a", "a<b>"]);
        assert_eq!(a.steps(), 2);

        assert_eq!(TypingAnimator::armed("").phase(), TypingPhase::Done);
        assert_eq!(TypingAnimator::idle().phase(), TypingPhase::Idle);
    }
}
