pub mod builtin;
pub mod bus;
pub mod detector;
pub mod effects;
pub mod events;
pub mod logging;
pub mod matchers;
pub mod messages;
pub mod settings;
pub mod toasts;
pub mod trigger_log;
