use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Icon identifier attached to a trigger message. The host decides how
/// each one is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Sparkles,
    Zap,
    Heart,
    Rocket,
    Star,
    TrendingUp,
    Code,
    Coffee,
    Trophy,
}

/// Display payload carried by a trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    /// Optional second line shown under the main text.
    pub detail: Option<String>,
    pub icon: Icon,
}

impl Message {
    pub fn new(text: &str, detail: Option<&str>, icon: Icon) -> Self {
        Self {
            text: text.to_string(),
            detail: detail.map(str::to_string),
            icon,
        }
    }
}

/// Candidate messages for the secret key sequence. One is picked at
/// random each time the sequence completes.
pub static SEQUENCE_MESSAGES: Lazy<Vec<Message>> = Lazy::new(|| {
    vec![
        Message::new(
            "You found the secret! You're a legend.",
            Some("Rainbow mode: ACTIVATED"),
            Icon::Sparkles,
        ),
        Message::new(
            "Konami code? Respect. You know what's up.",
            Some("Rainbow mode: ACTIVATED"),
            Icon::Zap,
        ),
        Message::new(
            "We love clients who explore. Call us!",
            Some("Rainbow mode: ACTIVATED"),
            Icon::Heart,
        ),
        Message::new(
            "This is the energy we want. Let's build together.",
            Some("Rainbow mode: ACTIVATED"),
            Icon::Rocket,
        ),
    ]
});

pub static CLICK_MESSAGE: Lazy<Message> = Lazy::new(|| {
    Message::new(
        "7 clicks? You're persistent!",
        Some("That's the kind of dedication we love."),
        Icon::Star,
    )
});

pub static SHIFT_HOLD_MESSAGE: Lazy<Message> = Lazy::new(|| {
    Message::new(
        "Patience unlocked!",
        Some("Good things come to those who wait"),
        Icon::TrendingUp,
    )
});

pub static SPACE_HOLD_MESSAGE: Lazy<Message> = Lazy::new(|| {
    Message::new(
        "Taking a space break?",
        Some("We dig the chill vibes"),
        Icon::Coffee,
    )
});

pub static SCROLL_END_MESSAGE: Lazy<Message> = Lazy::new(|| {
    Message::new(
        "You made it to the end!",
        Some("Thoroughness is a virtue"),
        Icon::Trophy,
    )
});

pub static MOUSE_SHAKE_MESSAGE: Lazy<Message> = Lazy::new(|| {
    Message::new(
        "Whoa, easy there!",
        Some("That's some serious energy!"),
        Icon::Zap,
    )
});
