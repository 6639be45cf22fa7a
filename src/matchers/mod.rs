mod clicks;
mod dwell;
mod hold;
mod sequence;
mod shake;
mod typed;

pub use clicks::ClickCountMatcher;
pub use dwell::ScrollDwellMatcher;
pub use hold::KeyHoldMatcher;
pub use sequence::KeySequenceMatcher;
pub use shake::MouseShakeMatcher;
pub use typed::TypedPhraseMatcher;

use crate::events::{EventCategory, InputEvent};

/// Result of feeding one event to a matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Nothing completed; internal progress may have advanced or reset.
    Pending,
    /// The pattern completed on this event. The matcher has already reset
    /// itself for the next cycle.
    Triggered,
}

/// A stateful recognizer for one input gesture.
///
/// Matchers only ever see events whose category appears in
/// [`Matcher::interests`]; anything else is filtered out by the
/// dispatcher. `update` must run to completion without blocking and must
/// silently ignore events it has no use for.
pub trait Matcher {
    /// Unique trigger name published when the pattern completes.
    fn name(&self) -> &str;

    /// Event categories this matcher wants to receive.
    fn interests(&self) -> &'static [EventCategory];

    /// Advance the matcher state with one event.
    fn update(&mut self, event: &InputEvent) -> MatchOutcome;

    /// Drop all partial progress.
    fn reset(&mut self);

    /// Fraction of the pattern currently complete, in `[0, 1]`.
    fn progress(&self) -> f32;
}
