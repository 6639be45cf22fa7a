use serde::{Deserialize, Serialize};

/// Parameter table for the built-in gestures plus display durations.
/// Every field has a default so a missing or partial settings file keeps
/// the stock behavior.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Cadence the host promises for `Tick` events, in milliseconds.
    /// Hold and dwell accumulators advance by this much per tick.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Enable toast bookkeeping in the tray.
    #[serde(default = "default_toasts")]
    pub enable_toasts: bool,
    /// How long a toast stays active, in milliseconds.
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
    /// Key names for the secret sequence, parsed with `parse_key`.
    #[serde(default = "default_konami_sequence")]
    pub konami_sequence: Vec<String>,
    #[serde(default = "default_shift_hold_ms")]
    pub shift_hold_ms: u64,
    #[serde(default = "default_space_hold_ms")]
    pub space_hold_ms: u64,
    /// Phrases recognized when typed anywhere on the page.
    #[serde(default = "default_secret_phrases")]
    pub secret_phrases: Vec<String>,
    /// Rolling buffer size for typed-phrase matching, in characters.
    #[serde(default = "default_typed_buffer_cap")]
    pub typed_buffer_cap: usize,
    /// Scroll ratio at or above which the page counts as "at the bottom".
    #[serde(default = "default_scroll_bottom_ratio")]
    pub scroll_bottom_ratio: f32,
    #[serde(default = "default_scroll_dwell_ms")]
    pub scroll_dwell_ms: u64,
    #[serde(default = "default_shake_window_ms")]
    pub shake_window_ms: u64,
    #[serde(default = "default_shake_min_samples")]
    pub shake_min_samples: usize,
    #[serde(default = "default_shake_distance_px")]
    pub shake_distance_px: f32,
    /// Clicks on the designated element needed to fire the click gesture.
    #[serde(default = "default_logo_click_count")]
    pub logo_click_count: u32,
    /// Duration of the hue-cycling page effect after the secret sequence.
    #[serde(default = "default_hue_cycle_ms")]
    pub hue_cycle_ms: u64,
    /// Duration of the confetti effect after the "systems" phrase.
    #[serde(default = "default_confetti_ms")]
    pub confetti_ms: u64,
    /// Duration of the spark burst after the "stahl" phrase.
    #[serde(default = "default_spark_ms")]
    pub spark_ms: u64,
}

fn default_tick_ms() -> u64 {
    100
}

fn default_toasts() -> bool {
    true
}

fn default_toast_duration_ms() -> u64 {
    4000
}

fn default_konami_sequence() -> Vec<String> {
    ["Up", "Up", "Down", "Down", "Left", "Right", "Left", "Right", "B", "A"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_shift_hold_ms() -> u64 {
    3000
}

fn default_space_hold_ms() -> u64 {
    5000
}

fn default_secret_phrases() -> Vec<String> {
    vec!["stahl".into(), "systems".into()]
}

fn default_typed_buffer_cap() -> usize {
    10
}

fn default_scroll_bottom_ratio() -> f32 {
    0.98
}

fn default_scroll_dwell_ms() -> u64 {
    2000
}

fn default_shake_window_ms() -> u64 {
    500
}

fn default_shake_min_samples() -> usize {
    20
}

fn default_shake_distance_px() -> f32 {
    1000.0
}

fn default_logo_click_count() -> u32 {
    7
}

fn default_hue_cycle_ms() -> u64 {
    10_000
}

fn default_confetti_ms() -> u64 {
    5000
}

fn default_spark_ms() -> u64 {
    2000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            tick_ms: default_tick_ms(),
            enable_toasts: default_toasts(),
            toast_duration_ms: default_toast_duration_ms(),
            konami_sequence: default_konami_sequence(),
            shift_hold_ms: default_shift_hold_ms(),
            space_hold_ms: default_space_hold_ms(),
            secret_phrases: default_secret_phrases(),
            typed_buffer_cap: default_typed_buffer_cap(),
            scroll_bottom_ratio: default_scroll_bottom_ratio(),
            scroll_dwell_ms: default_scroll_dwell_ms(),
            shake_window_ms: default_shake_window_ms(),
            shake_min_samples: default_shake_min_samples(),
            shake_distance_px: default_shake_distance_px(),
            logo_click_count: default_logo_click_count(),
            hue_cycle_ms: default_hue_cycle_ms(),
            confetti_ms: default_confetti_ms(),
            spark_ms: default_spark_ms(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
