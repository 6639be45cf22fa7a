use crate::detector::{GestureDetector, MatcherHandle};
use crate::events::{parse_key, Key};
use crate::matchers::{
    ClickCountMatcher, KeyHoldMatcher, KeySequenceMatcher, MouseShakeMatcher, ScrollDwellMatcher,
    TypedPhraseMatcher,
};
use crate::messages::{
    CLICK_MESSAGE, MOUSE_SHAKE_MESSAGE, SCROLL_END_MESSAGE, SEQUENCE_MESSAGES, SHIFT_HOLD_MESSAGE,
    SPACE_HOLD_MESSAGE,
};
use crate::settings::Settings;

pub const KONAMI: &str = "konami";
pub const SHIFT_HOLD: &str = "shift_hold";
pub const SPACE_HOLD: &str = "space_hold";
pub const SCROLL_END: &str = "scroll_end";
pub const MOUSE_SHAKE: &str = "mouse_shake";
pub const LOGO_CLICKS: &str = "logo_clicks";

/// Names of every trigger the stock set can publish. Typed phrases are
/// named by the phrase itself.
pub fn builtin_names(settings: &Settings) -> Vec<String> {
    let mut names: Vec<String> = [KONAMI, SHIFT_HOLD, SPACE_HOLD, SCROLL_END, MOUSE_SHAKE, LOGO_CLICKS]
        .iter()
        .map(|s| s.to_string())
        .collect();
    names.extend(settings.secret_phrases.iter().map(|p| p.to_lowercase()));
    names
}

fn parse_sequence(names: &[String]) -> Option<Vec<Key>> {
    names.iter().map(|name| parse_key(name)).collect()
}

/// Register the stock gesture set, parameterised from `settings`.
///
/// An unparseable key name in the configured sequence falls back to the
/// default sequence with a warning rather than failing; invalid numeric
/// parameters (zero durations and the like) are reported as errors.
pub fn register_builtin(
    detector: &mut GestureDetector,
    settings: &Settings,
) -> anyhow::Result<Vec<MatcherHandle>> {
    let sequence = match parse_sequence(&settings.konami_sequence) {
        Some(seq) if !seq.is_empty() => seq,
        _ => {
            tracing::warn!(
                "configured konami sequence {:?} is invalid; using default",
                settings.konami_sequence
            );
            parse_sequence(&Settings::default().konami_sequence).unwrap_or_default()
        }
    };

    let mut handles = Vec::new();

    handles.push(detector.register(
        Box::new(KeySequenceMatcher::new(KONAMI, sequence)?),
        SEQUENCE_MESSAGES.clone(),
    ));

    handles.push(detector.register(
        Box::new(KeyHoldMatcher::new(
            SHIFT_HOLD,
            Key::Shift,
            settings.shift_hold_ms,
            settings.tick_ms,
        )?),
        vec![SHIFT_HOLD_MESSAGE.clone()],
    ));

    handles.push(detector.register(
        Box::new(KeyHoldMatcher::new(
            SPACE_HOLD,
            Key::Space,
            settings.space_hold_ms,
            settings.tick_ms,
        )?),
        vec![SPACE_HOLD_MESSAGE.clone()],
    ));

    // Phrase triggers drive page effects rather than toasts, so they
    // publish without a message payload.
    for phrase in &settings.secret_phrases {
        let name = phrase.to_lowercase();
        handles.push(detector.register(
            Box::new(TypedPhraseMatcher::new(
                &name,
                phrase,
                settings.typed_buffer_cap,
            )?),
            Vec::new(),
        ));
    }

    handles.push(detector.register(
        Box::new(ScrollDwellMatcher::new(
            SCROLL_END,
            settings.scroll_bottom_ratio,
            settings.scroll_dwell_ms,
            settings.tick_ms,
        )?),
        vec![SCROLL_END_MESSAGE.clone()],
    ));

    handles.push(detector.register(
        Box::new(MouseShakeMatcher::new(
            MOUSE_SHAKE,
            settings.shake_window_ms,
            settings.shake_min_samples,
            settings.shake_distance_px,
        )?),
        vec![MOUSE_SHAKE_MESSAGE.clone()],
    ));

    handles.push(detector.register(
        Box::new(ClickCountMatcher::new(LOGO_CLICKS, settings.logo_click_count)?),
        vec![CLICK_MESSAGE.clone()],
    ));

    Ok(handles)
}
