use std::cell::{Cell, RefCell};
use std::rc::Rc;

use easter_eggs::builtin;
use easter_eggs::bus::SignalBus;
use easter_eggs::detector::GestureDetector;
use easter_eggs::effects::PageEffects;
use easter_eggs::events::{InputEvent, Key};
use easter_eggs::logging;
use easter_eggs::settings::Settings;
use easter_eggs::toasts::ToastTray;
use easter_eggs::trigger_log::append_trigger_log;

/// Replays a scripted input stream through the detector so the whole
/// pipeline (settings -> matchers -> bus -> tray/effects/log) can be
/// watched from a terminal.
fn main() -> anyhow::Result<()> {
    let settings = Settings::load("settings.json")?;
    logging::init(settings.debug_logging);

    let bus = SignalBus::new();
    let mut detector = GestureDetector::new(bus.clone());
    builtin::register_builtin(&mut detector, &settings)?;

    let tray = Rc::new(RefCell::new(ToastTray::from_settings(&settings)));
    let effects = Rc::new(RefCell::new(PageEffects::from_settings(&settings)));
    let clock = Rc::new(Cell::new(0u64));

    for name in builtin::builtin_names(&settings) {
        let tray = Rc::clone(&tray);
        let effects = Rc::clone(&effects);
        let clock = Rc::clone(&clock);
        let topic = name.clone();
        let _ = bus.subscribe(&name, move |message| {
            let now = clock.get();
            append_trigger_log(&topic, message.map(|m| m.text.as_str()));
            tray.borrow_mut().show(&topic, message, now);
            effects.borrow_mut().on_trigger(&topic, now);
        });
    }

    let mut script: Vec<InputEvent> = Vec::new();

    // The secret sequence, dispatched as key-down events.
    for key in [
        Key::ArrowUp,
        Key::ArrowUp,
        Key::ArrowDown,
        Key::ArrowDown,
        Key::ArrowLeft,
        Key::ArrowRight,
        Key::ArrowLeft,
        Key::ArrowRight,
        Key::Char('b'),
        Key::Char('a'),
    ] {
        script.push(InputEvent::KeyDown(key));
    }

    // Type a secret phrase.
    for c in "systems".chars() {
        script.push(InputEvent::KeyPress(c));
    }

    // Hold Shift across enough ticks to cross the threshold.
    script.push(InputEvent::KeyDown(Key::Shift));
    let hold_ticks = settings.shift_hold_ms / settings.tick_ms;
    for i in 1..=hold_ticks {
        script.push(InputEvent::Tick(i * settings.tick_ms));
    }
    script.push(InputEvent::KeyUp(Key::Shift));

    // Scroll to the bottom and dwell there.
    let base = hold_ticks * settings.tick_ms;
    script.push(InputEvent::Scroll(1.0));
    let dwell_ticks = settings.scroll_dwell_ms / settings.tick_ms;
    for i in 1..=dwell_ticks {
        script.push(InputEvent::Tick(base + i * settings.tick_ms));
    }

    // Shake the mouse: rapid back-and-forth within the sample window.
    let base = base + dwell_ticks * settings.tick_ms;
    for i in 0..30u64 {
        let x = if i % 2 == 0 { 0.0 } else { 60.0 };
        script.push(InputEvent::MouseMove {
            x,
            y: 0.0,
            at_ms: base + i * 10,
        });
    }

    for event in &script {
        if let InputEvent::Tick(now) = event {
            clock.set(*now);
        }
        detector.handle_event(event);
    }

    let now = clock.get();
    let tray = tray.borrow();
    for toast in tray.active() {
        let text = toast
            .message
            .as_ref()
            .map(|m| m.text.as_str())
            .unwrap_or("(no message)");
        tracing::info!("active toast '{}': {}", toast.name, text);
    }
    let effects = effects.borrow();
    for effect in effects.active() {
        tracing::info!("active effect at {}ms: {:?}", now, effect);
    }

    Ok(())
}
