use anyhow::bail;

use crate::events::{EventCategory, InputEvent};
use crate::matchers::{MatchOutcome, Matcher};

/// Recognizes the page being scrolled to the bottom and left there for a
/// dwell period.
///
/// A `Scroll` at or above `bottom_ratio` arms the dwell accumulator
/// unless already armed (arming does not restart it); each `Tick` while
/// armed advances it by `tick_ms`. Reaching `dwell_ms` triggers once and
/// latches: the matcher stays quiet until a `Scroll` away from the bottom
/// unlatches it, so re-entry is debounced.
#[derive(Debug)]
pub struct ScrollDwellMatcher {
    name: String,
    bottom_ratio: f32,
    dwell_ms: u64,
    tick_ms: u64,
    at_bottom: bool,
    latched: bool,
    dwelled_ms: u64,
}

impl ScrollDwellMatcher {
    pub fn new(
        name: &str,
        bottom_ratio: f32,
        dwell_ms: u64,
        tick_ms: u64,
    ) -> anyhow::Result<Self> {
        if !(0.0..=1.0).contains(&bottom_ratio) {
            bail!("bottom ratio for '{}' must be within [0, 1]", name);
        }
        if dwell_ms == 0 {
            bail!("dwell duration for '{}' must be positive", name);
        }
        if tick_ms == 0 {
            bail!("tick interval for '{}' must be positive", name);
        }
        Ok(Self {
            name: name.to_string(),
            bottom_ratio,
            dwell_ms,
            tick_ms,
            at_bottom: false,
            latched: false,
            dwelled_ms: 0,
        })
    }

    pub fn is_armed(&self) -> bool {
        self.at_bottom && !self.latched
    }
}

impl Matcher for ScrollDwellMatcher {
    fn name(&self) -> &str {
        &self.name
    }

    fn interests(&self) -> &'static [EventCategory] {
        &[EventCategory::Scroll, EventCategory::Timer]
    }

    fn update(&mut self, event: &InputEvent) -> MatchOutcome {
        match event {
            InputEvent::Scroll(ratio) => {
                if *ratio >= self.bottom_ratio {
                    if !self.at_bottom {
                        self.at_bottom = true;
                        self.dwelled_ms = 0;
                    }
                } else {
                    self.at_bottom = false;
                    self.latched = false;
                    self.dwelled_ms = 0;
                }
            }
            InputEvent::Tick(_) if self.at_bottom && !self.latched => {
                self.dwelled_ms += self.tick_ms;
                if self.dwelled_ms >= self.dwell_ms {
                    self.latched = true;
                    self.dwelled_ms = 0;
                    return MatchOutcome::Triggered;
                }
            }
            _ => {}
        }
        MatchOutcome::Pending
    }

    fn reset(&mut self) {
        self.at_bottom = false;
        self.latched = false;
        self.dwelled_ms = 0;
    }

    fn progress(&self) -> f32 {
        self.dwelled_ms as f32 / self.dwell_ms as f32
    }
}
