use std::collections::VecDeque;

use anyhow::bail;

use crate::events::{EventCategory, InputEvent};
use crate::matchers::{MatchOutcome, Matcher};

#[derive(Debug, Clone, Copy)]
struct Sample {
    x: f32,
    y: f32,
    at_ms: u64,
}

/// Recognizes the mouse being shaken: a lot of cumulative movement inside
/// a short time window.
///
/// Samples older than `window_ms` are evicted on every insert, so the
/// buffer is bounded by the window. Once more than `min_samples` samples
/// are held, the sum of consecutive Euclidean distances is compared
/// against `distance_px`; exceeding it triggers and clears the buffer, so
/// the next trigger needs fresh cumulative movement.
#[derive(Debug)]
pub struct MouseShakeMatcher {
    name: String,
    window_ms: u64,
    min_samples: usize,
    distance_px: f32,
    samples: VecDeque<Sample>,
}

impl MouseShakeMatcher {
    pub fn new(
        name: &str,
        window_ms: u64,
        min_samples: usize,
        distance_px: f32,
    ) -> anyhow::Result<Self> {
        if window_ms == 0 {
            bail!("sample window for '{}' must be positive", name);
        }
        if distance_px <= 0.0 {
            bail!("distance threshold for '{}' must be positive", name);
        }
        Ok(Self {
            name: name.to_string(),
            window_ms,
            min_samples,
            distance_px,
            samples: VecDeque::new(),
        })
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    fn travelled(&self) -> f32 {
        let mut total = 0.0;
        for pair in self.samples.iter().zip(self.samples.iter().skip(1)) {
            let dx = pair.1.x - pair.0.x;
            let dy = pair.1.y - pair.0.y;
            total += (dx * dx + dy * dy).sqrt();
        }
        total
    }
}

impl Matcher for MouseShakeMatcher {
    fn name(&self) -> &str {
        &self.name
    }

    fn interests(&self) -> &'static [EventCategory] {
        &[EventCategory::Mouse]
    }

    fn update(&mut self, event: &InputEvent) -> MatchOutcome {
        let (x, y, at_ms) = match event {
            InputEvent::MouseMove { x, y, at_ms } => (*x, *y, *at_ms),
            _ => return MatchOutcome::Pending,
        };

        while let Some(front) = self.samples.front() {
            if at_ms.saturating_sub(front.at_ms) >= self.window_ms {
                self.samples.pop_front();
            } else {
                break;
            }
        }
        self.samples.push_back(Sample { x, y, at_ms });

        if self.samples.len() > self.min_samples && self.travelled() > self.distance_px {
            self.samples.clear();
            return MatchOutcome::Triggered;
        }
        MatchOutcome::Pending
    }

    fn reset(&mut self) {
        self.samples.clear();
    }

    fn progress(&self) -> f32 {
        (self.travelled() / self.distance_px).min(1.0)
    }
}
