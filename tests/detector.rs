use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use easter_eggs::bus::SignalBus;
use easter_eggs::detector::GestureDetector;
use easter_eggs::events::{InputEvent, Key};
use easter_eggs::matchers::{ClickCountMatcher, KeySequenceMatcher, TypedPhraseMatcher};
use easter_eggs::messages::{Icon, Message};

fn seeded_detector(bus: SignalBus) -> GestureDetector {
    GestureDetector::with_rng(bus, Box::new(StdRng::seed_from_u64(7)))
}

fn recorder(bus: &SignalBus, topic: &str) -> Rc<RefCell<Vec<Option<Message>>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let _ = bus.subscribe(topic, move |m| sink.borrow_mut().push(m.cloned()));
    log
}

fn two_key_sequence(name: &str) -> Box<KeySequenceMatcher> {
    Box::new(KeySequenceMatcher::new(name, vec![Key::ArrowUp, Key::ArrowDown]).expect("valid"))
}

#[test]
fn events_reach_only_interested_matchers() {
    let bus = SignalBus::new();
    let mut detector = seeded_detector(bus.clone());
    detector.register(two_key_sequence("updown"), Vec::new());
    detector.register(
        Box::new(ClickCountMatcher::new("clicks", 2).expect("valid")),
        Vec::new(),
    );
    let updown = recorder(&bus, "updown");
    let clicks = recorder(&bus, "clicks");

    // Mouse and scroll traffic is invisible to the keyboard matcher and
    // vice versa.
    detector.handle_event(&InputEvent::KeyDown(Key::ArrowUp));
    detector.handle_event(&InputEvent::Click);
    detector.handle_event(&InputEvent::Scroll(1.0));
    detector.handle_event(&InputEvent::Tick(100));
    detector.handle_event(&InputEvent::KeyDown(Key::ArrowDown));
    detector.handle_event(&InputEvent::Click);

    assert_eq!(updown.borrow().len(), 1);
    assert_eq!(clicks.borrow().len(), 1);
}

#[test]
fn unregister_is_idempotent_and_leaves_others_alone() {
    let bus = SignalBus::new();
    let mut detector = seeded_detector(bus.clone());
    let doomed = detector.register(two_key_sequence("doomed"), Vec::new());
    detector.register(two_key_sequence("survivor"), Vec::new());
    let doomed_log = recorder(&bus, "doomed");
    let survivor_log = recorder(&bus, "survivor");

    detector.unregister(&doomed);
    detector.unregister(&doomed);
    assert_eq!(detector.matcher_count(), 1);

    detector.handle_event(&InputEvent::KeyDown(Key::ArrowUp));
    detector.handle_event(&InputEvent::KeyDown(Key::ArrowDown));
    assert!(doomed_log.borrow().is_empty());
    assert_eq!(survivor_log.borrow().len(), 1);
}

#[test]
fn stale_handle_cannot_remove_a_newer_registration() {
    let bus = SignalBus::new();
    let mut detector = seeded_detector(bus);
    let old = detector.register(two_key_sequence("old"), Vec::new());
    detector.unregister(&old);

    // The slot is likely reused; the stale handle must not touch it.
    let newer = detector.register(two_key_sequence("newer"), Vec::new());
    detector.unregister(&old);
    assert_eq!(detector.matcher_count(), 1);
    assert!(detector.progress(&newer).is_some());
    assert!(detector.progress(&old).is_none());
}

#[test]
fn triggers_without_candidate_messages_publish_no_payload() {
    let bus = SignalBus::new();
    let mut detector = seeded_detector(bus.clone());
    detector.register(
        Box::new(TypedPhraseMatcher::new("stahl", "stahl", 10).expect("valid")),
        Vec::new(),
    );
    let log = recorder(&bus, "stahl");

    for c in "stahl".chars() {
        detector.handle_event(&InputEvent::KeyPress(c));
    }
    assert_eq!(log.borrow().as_slice(), &[None]);
}

#[test]
fn message_selection_is_deterministic_under_a_seeded_rng() {
    let candidates = vec![
        Message::new("one", None, Icon::Sparkles),
        Message::new("two", None, Icon::Zap),
        Message::new("three", None, Icon::Heart),
        Message::new("four", None, Icon::Rocket),
    ];

    let pick = |seed: u64| -> Vec<Option<Message>> {
        let bus = SignalBus::new();
        let mut detector =
            GestureDetector::with_rng(bus.clone(), Box::new(StdRng::seed_from_u64(seed)));
        detector.register(two_key_sequence("seq"), candidates.clone());
        let log = recorder(&bus, "seq");
        for _ in 0..4 {
            detector.handle_event(&InputEvent::KeyDown(Key::ArrowUp));
            detector.handle_event(&InputEvent::KeyDown(Key::ArrowDown));
        }
        let picks = log.borrow().clone();
        picks
    };

    let first = pick(42);
    assert_eq!(first.len(), 4);
    assert!(first.iter().all(|m| {
        let m = m.as_ref().expect("payload expected");
        candidates.contains(m)
    }));
    assert_eq!(first, pick(42));
}

#[test]
fn progress_tracks_the_underlying_matcher() {
    let bus = SignalBus::new();
    let mut detector = seeded_detector(bus);
    let handle = detector.register(two_key_sequence("seq"), Vec::new());

    assert_eq!(detector.progress(&handle), Some(0.0));
    detector.handle_event(&InputEvent::KeyDown(Key::ArrowUp));
    assert_eq!(detector.progress(&handle), Some(0.5));
    detector.handle_event(&InputEvent::KeyDown(Key::ArrowDown));
    assert_eq!(detector.progress(&handle), Some(0.0));
}

#[test]
fn reset_all_drops_partial_progress() {
    let bus = SignalBus::new();
    let mut detector = seeded_detector(bus);
    let handle = detector.register(two_key_sequence("seq"), Vec::new());
    detector.handle_event(&InputEvent::KeyDown(Key::ArrowUp));
    detector.reset_all();
    assert_eq!(detector.progress(&handle), Some(0.0));
}
