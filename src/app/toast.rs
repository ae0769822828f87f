//! Transient status messages.

/// Render ticks a toast stays visible (about 3 seconds at 16ms per tick).
pub const TOAST_TICKS: u64 = 188;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub expires_at: u64,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind, now: u64) -> Self {
        Self {
            message: message.into(),
            kind,
            expires_at: now + TOAST_TICKS,
        }
    }

    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry() {
        let toast = Toast::new("Copied to clipboard!", ToastKind::Success, 10);
        assert!(!toast.is_expired(10));
        assert!(!toast.is_expired(10 + TOAST_TICKS - 1));
        assert!(toast.is_expired(10 + TOAST_TICKS));
    }
}
