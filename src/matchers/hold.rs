use anyhow::bail;

use crate::events::{EventCategory, InputEvent, Key};
use crate::matchers::{MatchOutcome, Matcher};

/// Recognizes a key held down continuously for a configured duration.
///
/// `KeyDown` on the target arms a duration accumulator; each `Tick` while
/// armed advances it by `tick_ms`; reaching `hold_ms` triggers and fully
/// resets. `KeyUp` on the target cancels with no partial credit, and
/// because it clears the counting flag before any later tick is
/// processed, cancellation always beats the timer. A repeated `KeyDown`
/// while already counting is a no-op.
#[derive(Debug)]
pub struct KeyHoldMatcher {
    name: String,
    key: Key,
    hold_ms: u64,
    tick_ms: u64,
    counting: bool,
    held_ms: u64,
}

impl KeyHoldMatcher {
    pub fn new(name: &str, key: Key, hold_ms: u64, tick_ms: u64) -> anyhow::Result<Self> {
        if hold_ms == 0 {
            bail!("hold duration for '{}' must be positive", name);
        }
        if tick_ms == 0 {
            bail!("tick interval for '{}' must be positive", name);
        }
        Ok(Self {
            name: name.to_string(),
            key,
            hold_ms,
            tick_ms,
            counting: false,
            held_ms: 0,
        })
    }

    pub fn is_counting(&self) -> bool {
        self.counting
    }
}

impl Matcher for KeyHoldMatcher {
    fn name(&self) -> &str {
        &self.name
    }

    fn interests(&self) -> &'static [EventCategory] {
        &[EventCategory::Keyboard, EventCategory::Timer]
    }

    fn update(&mut self, event: &InputEvent) -> MatchOutcome {
        match event {
            InputEvent::KeyDown(key) if *key == self.key => {
                if !self.counting {
                    self.counting = true;
                    self.held_ms = 0;
                }
            }
            InputEvent::KeyUp(key) if *key == self.key => {
                self.counting = false;
                self.held_ms = 0;
            }
            InputEvent::Tick(_) if self.counting => {
                self.held_ms += self.tick_ms;
                if self.held_ms >= self.hold_ms {
                    self.counting = false;
                    self.held_ms = 0;
                    return MatchOutcome::Triggered;
                }
            }
            _ => {}
        }
        MatchOutcome::Pending
    }

    fn reset(&mut self) {
        self.counting = false;
        self.held_ms = 0;
    }

    fn progress(&self) -> f32 {
        self.held_ms as f32 / self.hold_ms as f32
    }
}
