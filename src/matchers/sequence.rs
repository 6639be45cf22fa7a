use anyhow::bail;

use crate::events::{EventCategory, InputEvent, Key};
use crate::matchers::{MatchOutcome, Matcher};

/// Recognizes an exact ordered key sequence on `KeyDown` events.
///
/// A mismatching key resets the index and is NOT re-tested against the
/// start of the sequence; matching resumes with the next key. Completion
/// resets the index so the sequence can fire again from scratch.
#[derive(Debug)]
pub struct KeySequenceMatcher {
    name: String,
    sequence: Vec<Key>,
    index: usize,
}

impl KeySequenceMatcher {
    pub fn new(name: &str, sequence: Vec<Key>) -> anyhow::Result<Self> {
        if sequence.is_empty() {
            bail!("key sequence '{}' must not be empty", name);
        }
        Ok(Self {
            name: name.to_string(),
            sequence,
            index: 0,
        })
    }

    /// Number of keys matched so far.
    pub fn matched(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl Matcher for KeySequenceMatcher {
    fn name(&self) -> &str {
        &self.name
    }

    fn interests(&self) -> &'static [EventCategory] {
        &[EventCategory::Keyboard]
    }

    fn update(&mut self, event: &InputEvent) -> MatchOutcome {
        let key = match event {
            InputEvent::KeyDown(key) => *key,
            _ => return MatchOutcome::Pending,
        };

        if key == self.sequence[self.index] {
            self.index += 1;
            if self.index == self.sequence.len() {
                self.index = 0;
                return MatchOutcome::Triggered;
            }
        } else {
            // Strict reset: the offending key is not retried at index 0.
            self.index = 0;
        }
        MatchOutcome::Pending
    }

    fn reset(&mut self) {
        self.index = 0;
    }

    fn progress(&self) -> f32 {
        self.index as f32 / self.sequence.len() as f32
    }
}
