use std::collections::HashMap;

use crate::messages::Message;
use crate::settings::Settings;

/// A trigger currently being shown, with its expiry on the host clock.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveToast {
    pub name: String,
    pub message: Option<Message>,
    pub expires_at_ms: u64,
}

/// Transient bookkeeping for which triggers are on screen.
///
/// At most one toast is active per trigger name; a re-trigger replaces
/// the existing entry rather than stacking. The tray never renders
/// anything, it only answers "what should be visible at `now`".
#[derive(Debug, Default)]
pub struct ToastTray {
    enabled: bool,
    duration_ms: u64,
    active: HashMap<String, ActiveToast>,
}

impl ToastTray {
    pub fn new(enabled: bool, duration_ms: u64) -> Self {
        Self {
            enabled,
            duration_ms,
            active: HashMap::new(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.enable_toasts, settings.toast_duration_ms)
    }

    pub fn show(&mut self, name: &str, message: Option<&Message>, now_ms: u64) {
        if !self.enabled {
            return;
        }
        self.active.insert(
            name.to_string(),
            ActiveToast {
                name: name.to_string(),
                message: message.cloned(),
                expires_at_ms: now_ms + self.duration_ms,
            },
        );
    }

    /// Drop every toast that has expired by `now_ms`.
    pub fn prune(&mut self, now_ms: u64) {
        self.active.retain(|_, toast| toast.expires_at_ms > now_ms);
    }

    pub fn get(&self, name: &str) -> Option<&ActiveToast> {
        self.active.get(name)
    }

    pub fn active(&self) -> impl Iterator<Item = &ActiveToast> {
        self.active.values()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
