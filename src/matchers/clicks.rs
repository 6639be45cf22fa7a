use anyhow::bail;

use crate::events::{EventCategory, InputEvent};
use crate::matchers::{MatchOutcome, Matcher};

/// Recognizes a number of clicks on the designated element. There is no
/// deadline between clicks; the count persists until it completes.
#[derive(Debug)]
pub struct ClickCountMatcher {
    name: String,
    required: u32,
    count: u32,
}

impl ClickCountMatcher {
    pub fn new(name: &str, required: u32) -> anyhow::Result<Self> {
        if required == 0 {
            bail!("click count for '{}' must be positive", name);
        }
        Ok(Self {
            name: name.to_string(),
            required,
            count: 0,
        })
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

impl Matcher for ClickCountMatcher {
    fn name(&self) -> &str {
        &self.name
    }

    fn interests(&self) -> &'static [EventCategory] {
        &[EventCategory::Mouse]
    }

    fn update(&mut self, event: &InputEvent) -> MatchOutcome {
        if !matches!(event, InputEvent::Click) {
            return MatchOutcome::Pending;
        }
        self.count += 1;
        if self.count == self.required {
            self.count = 0;
            return MatchOutcome::Triggered;
        }
        MatchOutcome::Pending
    }

    fn reset(&mut self) {
        self.count = 0;
    }

    fn progress(&self) -> f32 {
        self.count as f32 / self.required as f32
    }
}
