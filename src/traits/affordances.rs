//! Optional device affordances: haptics, notifications, wake lock and
//! fullscreen.
//!
//! Every method has a no-op default so an implementation only overrides
//! what its platform supports. Callers never learn whether anything
//! happened.

/// Best-effort device feedback.
pub trait Affordances: Send {
    /// Short haptic pulse, e.g. when a favorite is added.
    fn vibrate(&mut self, _pattern_ms: &[u64]) {}

    /// Desktop notification.
    fn notify(&mut self, _title: &str, _body: &str) {}

    /// Keep the screen on while the app is open.
    fn request_wake_lock(&mut self) {}

    fn release_wake_lock(&mut self) {}

    fn toggle_fullscreen(&mut self) {}
}

/// Affordances that do nothing at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Affordances for Silent {}
