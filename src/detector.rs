use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use slab::Slab;

use crate::bus::SignalBus;
use crate::events::InputEvent;
use crate::matchers::{MatchOutcome, Matcher};
use crate::messages::Message;

/// The discrete signal emitted when a matcher's pattern completes. Built
/// at the moment of completion, handed to the bus, then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerEvent {
    pub name: String,
    pub message: Option<Message>,
}

/// Ticket returned by [`GestureDetector::register`], needed to
/// unregister and to query progress.
#[derive(Debug, Clone, Copy)]
pub struct MatcherHandle {
    key: usize,
    id: u64,
}

struct Entry {
    id: u64,
    matcher: Box<dyn Matcher>,
    messages: Vec<Message>,
}

/// Owns every registered matcher and routes raw input events to them.
///
/// One instance lives for the page lifetime. Dispatch is synchronous and
/// run-to-completion: every interested matcher is fully updated, in
/// registration order, before any completed trigger is published, and
/// `handle_event` returns before the next event is processed. Candidate
/// messages belong to the registration; when a matcher completes, one is
/// picked with the injected RNG (none registered means the trigger
/// carries no payload).
pub struct GestureDetector {
    matchers: Slab<Entry>,
    next_id: u64,
    bus: SignalBus,
    rng: Box<dyn RngCore>,
}

impl GestureDetector {
    pub fn new(bus: SignalBus) -> Self {
        Self::with_rng(bus, Box::new(StdRng::from_entropy()))
    }

    /// Construct with an explicit RNG so message selection is
    /// deterministic under test.
    pub fn with_rng(bus: SignalBus, rng: Box<dyn RngCore>) -> Self {
        Self {
            matchers: Slab::new(),
            next_id: 0,
            bus,
            rng,
        }
    }

    /// Another handle to the bus this detector publishes on.
    pub fn bus(&self) -> SignalBus {
        self.bus.clone()
    }

    pub fn register(&mut self, matcher: Box<dyn Matcher>, messages: Vec<Message>) -> MatcherHandle {
        let id = self.next_id;
        self.next_id += 1;
        tracing::debug!("register matcher '{}'", matcher.name());
        let key = self.matchers.insert(Entry {
            id,
            matcher,
            messages,
        });
        MatcherHandle { key, id }
    }

    /// Remove a matcher. Idempotent: a handle that was already removed,
    /// or whose slot has since been reused, is a no-op.
    pub fn unregister(&mut self, handle: &MatcherHandle) {
        if self.matchers.get(handle.key).map(|e| e.id) == Some(handle.id) {
            let entry = self.matchers.remove(handle.key);
            tracing::debug!("unregister matcher '{}'", entry.matcher.name());
        }
    }

    /// Feed one event through every interested matcher, then publish a
    /// trigger for each matcher that completed on it.
    pub fn handle_event(&mut self, event: &InputEvent) {
        let category = event.category();
        let mut fired: Vec<TriggerEvent> = Vec::new();

        for (_, entry) in self.matchers.iter_mut() {
            if !entry.matcher.interests().contains(&category) {
                continue;
            }
            if entry.matcher.update(event) == MatchOutcome::Triggered {
                let message = match entry.messages.len() {
                    0 => None,
                    len => Some(entry.messages[self.rng.gen_range(0..len)].clone()),
                };
                fired.push(TriggerEvent {
                    name: entry.matcher.name().to_string(),
                    message,
                });
            }
        }

        for trigger in fired {
            tracing::info!("gesture '{}' completed", trigger.name);
            self.bus.publish(&trigger.name, trigger.message.as_ref());
        }
    }

    /// Fraction of the pattern complete for a registered matcher, or
    /// `None` for a stale handle.
    pub fn progress(&self, handle: &MatcherHandle) -> Option<f32> {
        self.matchers
            .get(handle.key)
            .filter(|e| e.id == handle.id)
            .map(|e| e.matcher.progress())
    }

    /// Reset every matcher's partial progress (page reset, not teardown).
    pub fn reset_all(&mut self) {
        for (_, entry) in self.matchers.iter_mut() {
            entry.matcher.reset();
        }
    }

    pub fn matcher_count(&self) -> usize {
        self.matchers.len()
    }
}
