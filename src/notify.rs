//! Transient notifications
//!
//! A toast lives in the status line for a few seconds. When desktop
//! notifications are enabled the same title/description also goes to the
//! notification daemon.

use std::time::{Duration, Instant};

/// Default lifetime of a toast in seconds
pub const DEFAULT_TOAST_SECS: u64 = 3;

#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub description: String,
    shown_at: Instant,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, lifetime: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= lifetime
    }
}

/// Holds at most one toast and expires it
#[derive(Debug, Clone)]
pub struct Notifier {
    current: Option<Toast>,
    lifetime: Duration,
    desktop: bool,
}

impl Notifier {
    pub fn new(lifetime: Duration, desktop: bool) -> Self {
        Self {
            current: None,
            lifetime,
            desktop,
        }
    }

    /// Show a toast, replacing whatever is on screen
    pub fn show(&mut self, title: impl Into<String>, description: impl Into<String>) {
        let toast = Toast::new(title, description);
        tracing::debug!("Toast: {} - {}", toast.title, toast.description);
        if self.desktop {
            send_desktop(&toast, self.lifetime);
        }
        self.current = Some(toast);
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Drop the toast once its lifetime is over
    pub fn expire(&mut self, now: Instant) {
        if let Some(toast) = &self.current {
            if toast.is_expired(self.lifetime, now) {
                self.current = None;
            }
        }
    }
}

fn send_desktop(toast: &Toast, lifetime: Duration) {
    let millis = u32::try_from(lifetime.as_millis()).unwrap_or(u32::MAX);
    if let Err(e) = notify_rust::Notification::new()
        .summary(&toast.title)
        .body(&toast.description)
        .appname("whiskers")
        .timeout(notify_rust::Timeout::Milliseconds(millis))
        .show()
    {
        tracing::debug!("Desktop notification failed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_lifetime() {
        let mut notifier = Notifier::new(Duration::from_secs(3), false);
        notifier.show("Thanks!", "You liked this page");
        let shown = Instant::now();

        notifier.expire(shown);
        assert!(notifier.current().is_some());

        notifier.expire(shown + Duration::from_secs(4));
        assert!(notifier.current().is_none());
    }

    #[test]
    fn test_new_toast_replaces_old() {
        let mut notifier = Notifier::new(Duration::from_secs(3), false);
        notifier.show("First", "one");
        notifier.show("Second", "two");
        let toast = notifier.current().unwrap();
        assert_eq!(toast.title, "Second");
        assert_eq!(toast.description, "two");
    }

    #[test]
    fn test_expire_without_toast_is_noop() {
        let mut notifier = Notifier::new(Duration::from_secs(1), false);
        notifier.expire(Instant::now());
        assert!(notifier.current().is_none());
    }
}
