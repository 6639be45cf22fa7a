use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use slab::Slab;

use crate::messages::Message;

type Handler = Rc<dyn Fn(Option<&Message>)>;

struct Subscriber {
    id: u64,
    handler: Handler,
}

#[derive(Default)]
struct BusInner {
    topics: HashMap<String, Slab<Subscriber>>,
    next_id: u64,
}

/// Ticket returned by [`SignalBus::subscribe`], needed to unsubscribe.
#[derive(Debug, Clone)]
pub struct SubscriptionHandle {
    topic: String,
    key: usize,
    id: u64,
}

/// Minimal synchronous publish/subscribe bus keyed by signal name.
///
/// Cloning a `SignalBus` produces another handle to the same shared
/// state, so the detector and the presentation layer can each hold one.
/// `publish` snapshots the subscriber list before invoking it: handlers
/// may subscribe, unsubscribe, or publish re-entrantly, but a handler
/// added during a publish is not delivered that round. Nothing is queued;
/// a signal reaches whoever is subscribed at call time and is then gone.
#[derive(Clone, Default)]
pub struct SignalBus {
    inner: Rc<RefCell<BusInner>>,
}

impl SignalBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &self,
        topic: &str,
        handler: impl Fn(Option<&Message>) + 'static,
    ) -> SubscriptionHandle {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let key = inner.topics.entry(topic.to_string()).or_default().insert(Subscriber {
            id,
            handler: Rc::new(handler),
        });
        SubscriptionHandle {
            topic: topic.to_string(),
            key,
            id,
        }
    }

    /// Remove a subscription. Idempotent: a handle that was already
    /// removed, or whose slot has since been reused, is a no-op.
    pub fn unsubscribe(&self, handle: &SubscriptionHandle) {
        let mut inner = self.inner.borrow_mut();
        if let Some(subs) = inner.topics.get_mut(&handle.topic) {
            if subs.get(handle.key).map(|s| s.id) == Some(handle.id) {
                subs.remove(handle.key);
            }
        }
    }

    /// Synchronously fan a signal out to the topic's current subscribers.
    pub fn publish(&self, name: &str, payload: Option<&Message>) {
        let handlers: Vec<Handler> = {
            let inner = self.inner.borrow();
            match inner.topics.get(name) {
                Some(subs) => subs.iter().map(|(_, s)| Rc::clone(&s.handler)).collect(),
                None => Vec::new(),
            }
        };
        tracing::debug!("publish '{}' to {} subscriber(s)", name, handlers.len());
        for handler in handlers {
            handler(payload);
        }
    }

    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.inner
            .borrow()
            .topics
            .get(topic)
            .map(|subs| subs.len())
            .unwrap_or(0)
    }
}
