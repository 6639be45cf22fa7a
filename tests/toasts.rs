use easter_eggs::effects::{Effect, PageEffects};
use easter_eggs::messages::{Icon, Message};
use easter_eggs::settings::Settings;
use easter_eggs::toasts::ToastTray;

fn message() -> Message {
    Message::new("You made it to the end!", Some("Thoroughness is a virtue"), Icon::Trophy)
}

#[test]
fn toast_expires_after_the_configured_duration() {
    let mut tray = ToastTray::new(true, 4000);
    tray.show("scroll_end", Some(&message()), 1000);

    tray.prune(4999);
    assert!(tray.get("scroll_end").is_some());
    tray.prune(5000);
    assert!(tray.get("scroll_end").is_none());
}

#[test]
fn retrigger_replaces_instead_of_stacking() {
    let mut tray = ToastTray::new(true, 4000);
    tray.show("scroll_end", Some(&message()), 1000);
    tray.show("scroll_end", Some(&message()), 3000);

    assert_eq!(tray.len(), 1);
    // The replacement carries the later expiry.
    tray.prune(5000);
    assert!(tray.get("scroll_end").is_some());
    tray.prune(7000);
    assert!(tray.is_empty());
}

#[test]
fn distinct_triggers_show_side_by_side() {
    let mut tray = ToastTray::new(true, 4000);
    tray.show("konami", Some(&message()), 0);
    tray.show("mouse_shake", None, 0);
    assert_eq!(tray.len(), 2);
    assert!(tray.get("mouse_shake").expect("present").message.is_none());
}

#[test]
fn disabled_tray_records_nothing() {
    let mut tray = ToastTray::new(false, 4000);
    tray.show("konami", Some(&message()), 0);
    assert!(tray.is_empty());
}

#[test]
fn stock_effect_mapping_follows_settings_durations() {
    let settings = Settings::default();
    let mut effects = PageEffects::from_settings(&settings);

    effects.on_trigger("konami", 0);
    effects.on_trigger("systems", 0);
    assert!(effects.is_active(Effect::HueCycle));
    assert!(effects.is_active(Effect::Confetti));
    assert!(!effects.is_active(Effect::Spark));

    effects.prune(settings.confetti_ms);
    assert!(effects.is_active(Effect::HueCycle));
    assert!(!effects.is_active(Effect::Confetti));
    effects.prune(settings.hue_cycle_ms);
    assert_eq!(effects.active().count(), 0);
}

#[test]
fn unmapped_triggers_activate_nothing() {
    let settings = Settings::default();
    let mut effects = PageEffects::from_settings(&settings);
    effects.on_trigger("scroll_end", 0);
    assert_eq!(effects.active().count(), 0);
}

#[test]
fn reactivation_extends_the_expiry() {
    let settings = Settings::default();
    let mut effects = PageEffects::from_settings(&settings);
    effects.on_trigger("stahl", 0);
    effects.on_trigger("stahl", 1500);

    effects.prune(settings.spark_ms);
    assert!(effects.is_active(Effect::Spark));
    effects.prune(1500 + settings.spark_ms);
    assert!(!effects.is_active(Effect::Spark));
}
