use std::time::{Duration, Instant};

use crate::api::Achievement;
use crate::domain::ToastKind;

pub const TOAST_DURATION: Duration = Duration::from_millis(3000);
pub const ACHIEVEMENT_DURATION: Duration = Duration::from_millis(5000);

/// A transient notification. Each toast owns its own deadline, so showing a
/// new one while another is visible restarts the full display window.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind, now: Instant) -> Self {
        Self {
            message: message.into(),
            kind,
            expires_at: now + TOAST_DURATION,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// The achievement popup. Auto-hides after its window but can be dismissed
/// early by the user.
#[derive(Debug, Clone)]
pub struct AchievementPopup {
    pub achievement: Achievement,
    expires_at: Instant,
}

impl AchievementPopup {
    pub fn new(achievement: Achievement, now: Instant) -> Self {
        Self {
            achievement,
            expires_at: now + ACHIEVEMENT_DURATION,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
