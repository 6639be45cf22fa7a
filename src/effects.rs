use std::collections::HashMap;

use crate::builtin;
use crate::settings::Settings;

/// Cosmetic whole-page effects a trigger can switch on for a while.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Hue-rotation of the whole page.
    HueCycle,
    /// Falling confetti.
    Confetti,
    /// A single spark burst at a random spot.
    Spark,
}

/// Maps trigger names to timed page effects and tracks which are live.
///
/// Re-activating a live effect replaces its expiry rather than stacking
/// a second instance.
#[derive(Debug, Default)]
pub struct PageEffects {
    table: HashMap<String, (Effect, u64)>,
    active: HashMap<Effect, u64>,
}

impl PageEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock mapping: the secret sequence hue-cycles the page,
    /// "systems" rains confetti, "stahl" fires a spark burst.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut effects = Self::new();
        effects.map_trigger(builtin::KONAMI, Effect::HueCycle, settings.hue_cycle_ms);
        effects.map_trigger("systems", Effect::Confetti, settings.confetti_ms);
        effects.map_trigger("stahl", Effect::Spark, settings.spark_ms);
        effects
    }

    pub fn map_trigger(&mut self, trigger: &str, effect: Effect, duration_ms: u64) {
        self.table.insert(trigger.to_string(), (effect, duration_ms));
    }

    /// Activate whatever effect `trigger` maps to, if any.
    pub fn on_trigger(&mut self, trigger: &str, now_ms: u64) {
        if let Some((effect, duration_ms)) = self.table.get(trigger) {
            self.active.insert(*effect, now_ms + duration_ms);
        }
    }

    pub fn prune(&mut self, now_ms: u64) {
        self.active.retain(|_, expires_at| *expires_at > now_ms);
    }

    pub fn is_active(&self, effect: Effect) -> bool {
        self.active.contains_key(&effect)
    }

    pub fn active(&self) -> impl Iterator<Item = Effect> + '_ {
        self.active.keys().copied()
    }
}
