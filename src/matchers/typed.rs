use anyhow::bail;

use crate::events::{EventCategory, InputEvent};
use crate::matchers::{MatchOutcome, Matcher};

/// Recognizes a phrase typed anywhere, via a bounded rolling buffer of
/// the most recent lowercased characters.
///
/// Each `KeyPress` appends, the buffer is trimmed to the last `cap`
/// characters, then the target is searched anywhere in the buffer. A hit
/// triggers and clears the buffer.
#[derive(Debug)]
pub struct TypedPhraseMatcher {
    name: String,
    target: String,
    cap: usize,
    buffer: String,
}

impl TypedPhraseMatcher {
    pub fn new(name: &str, target: &str, cap: usize) -> anyhow::Result<Self> {
        let target: String = target.chars().flat_map(char::to_lowercase).collect();
        if target.is_empty() {
            bail!("typed phrase for '{}' must not be empty", name);
        }
        // The buffer must be able to hold the whole phrase.
        let cap = cap.max(target.chars().count());
        Ok(Self {
            name: name.to_string(),
            target,
            cap,
            buffer: String::new(),
        })
    }

    pub fn buffered(&self) -> &str {
        &self.buffer
    }
}

impl Matcher for TypedPhraseMatcher {
    fn name(&self) -> &str {
        &self.name
    }

    fn interests(&self) -> &'static [EventCategory] {
        &[EventCategory::Keyboard]
    }

    fn update(&mut self, event: &InputEvent) -> MatchOutcome {
        let c = match event {
            InputEvent::KeyPress(c) => *c,
            _ => return MatchOutcome::Pending,
        };

        self.buffer.extend(c.to_lowercase());
        let overflow = self.buffer.chars().count().saturating_sub(self.cap);
        if overflow > 0 {
            let cut = self
                .buffer
                .char_indices()
                .nth(overflow)
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.buffer.drain(..cut);
        }

        if self.buffer.contains(&self.target) {
            self.buffer.clear();
            return MatchOutcome::Triggered;
        }
        MatchOutcome::Pending
    }

    fn reset(&mut self) {
        self.buffer.clear();
    }

    fn progress(&self) -> f32 {
        // Longest suffix of the buffer that is a prefix of the target.
        let target: Vec<char> = self.target.chars().collect();
        let buffer: Vec<char> = self.buffer.chars().collect();
        let max = target.len().min(buffer.len());
        for len in (1..=max).rev() {
            if buffer[buffer.len() - len..] == target[..len] {
                return len as f32 / target.len() as f32;
            }
        }
        0.0
    }
}
