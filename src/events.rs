/// Keys the matchers care about. Printable keys are carried as
/// [`Key::Char`]; everything else gets its own variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Shift,
    Control,
    Alt,
    Char(char),
}

/// Parse a key name as written in the settings file ("Up", "Shift", "B",
/// ...) into a [`Key`]. Single printable characters map to [`Key::Char`]
/// lowercased.
pub fn parse_key(s: &str) -> Option<Key> {
    let upper = s.trim().to_ascii_uppercase();
    match upper.as_str() {
        "UP" | "UPARROW" | "ARROWUP" => Some(Key::ArrowUp),
        "DOWN" | "DOWNARROW" | "ARROWDOWN" => Some(Key::ArrowDown),
        "LEFT" | "LEFTARROW" | "ARROWLEFT" => Some(Key::ArrowLeft),
        "RIGHT" | "RIGHTARROW" | "ARROWRIGHT" => Some(Key::ArrowRight),
        "SPACE" => Some(Key::Space),
        "ENTER" | "RETURN" => Some(Key::Enter),
        "ESC" | "ESCAPE" => Some(Key::Escape),
        "TAB" => Some(Key::Tab),
        "BACKSPACE" => Some(Key::Backspace),
        "SHIFT" => Some(Key::Shift),
        "CTRL" | "CONTROL" => Some(Key::Control),
        "ALT" => Some(Key::Alt),
        "" => None,
        _ => {
            let mut chars = s.trim().chars();
            let c = chars.next()?;
            if chars.next().is_none() && !c.is_whitespace() {
                Some(Key::Char(c.to_ascii_lowercase()))
            } else {
                None
            }
        }
    }
}

/// A raw input event delivered by the host event layer.
///
/// Timestamps are milliseconds on the host's clock. `Scroll` carries the
/// document position as a ratio in `[0, 1]` where `1.0` is the bottom.
/// `Click` is only delivered for the element the host designates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    KeyPress(char),
    MouseMove { x: f32, y: f32, at_ms: u64 },
    Scroll(f32),
    Click,
    Tick(u64),
}

/// Coarse event grouping used to route events to interested matchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    Keyboard,
    Mouse,
    Scroll,
    Timer,
}

impl InputEvent {
    pub fn category(&self) -> EventCategory {
        match self {
            InputEvent::KeyDown(_) | InputEvent::KeyUp(_) | InputEvent::KeyPress(_) => {
                EventCategory::Keyboard
            }
            InputEvent::MouseMove { .. } | InputEvent::Click => EventCategory::Mouse,
            InputEvent::Scroll(_) => EventCategory::Scroll,
            InputEvent::Tick(_) => EventCategory::Timer,
        }
    }
}
