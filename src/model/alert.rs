//! Alert banner feed
//!
//! Ephemeral notifications rendered at the top of the content region.
//! Each banner auto-expires after a fixed timer unless the user dismisses
//! it first via its close control.

use std::time::{Duration, Instant};

/// How long a banner stays up without manual dismissal
pub const ALERT_TTL: Duration = Duration::from_millis(5000);

/// A single alert banner
#[derive(Debug, Clone)]
pub struct Alert {
    pub id: u64,
    pub message: String,
    /// Free-form severity string, used only to pick a style
    pub severity: String,
    created: Instant,
}

impl Alert {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created) >= ALERT_TTL
    }
}

/// Ordered feed of alert banners, newest first
#[derive(Debug, Default)]
pub struct AlertFeed {
    alerts: Vec<Alert>,
    next_id: u64,
}

impl AlertFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a banner at the head of the feed, returning its id
    pub fn push(&mut self, message: impl Into<String>, severity: impl Into<String>) -> u64 {
        self.push_at(message, severity, Instant::now())
    }

    /// Insert with an explicit creation time
    pub fn push_at(
        &mut self,
        message: impl Into<String>,
        severity: impl Into<String>,
        created: Instant,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.alerts.insert(
            0,
            Alert {
                id,
                message: message.into(),
                severity: severity.into(),
                created,
            },
        );
        id
    }

    /// Manually dismiss a banner by id
    pub fn dismiss(&mut self, id: u64) {
        self.alerts.retain(|a| a.id != id);
    }

    /// Drop every banner whose timer has elapsed
    pub fn prune(&mut self, now: Instant) {
        self.alerts.retain(|a| !a.is_expired(now));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_inserts_newest_first() {
        let mut feed = AlertFeed::new();
        feed.push("first", "info");
        feed.push("second", "success");

        let messages: Vec<&str> = feed.iter().map(|a| a.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "first"]);
    }

    #[test]
    fn test_alert_present_before_ttl_absent_after() {
        let now = Instant::now();
        let mut feed = AlertFeed::new();
        feed.push_at("done", "success", now);
        assert_eq!(feed.len(), 1);

        // Just before the timer elapses the banner is still up
        feed.prune(now + ALERT_TTL - Duration::from_millis(1));
        assert_eq!(feed.len(), 1);

        // At 5000 ms it is gone
        feed.prune(now + ALERT_TTL);
        assert!(feed.is_empty());
    }

    #[test]
    fn test_manual_dismiss() {
        let mut feed = AlertFeed::new();
        let id = feed.push("dismiss me", "error");
        feed.push("keep me", "info");

        feed.dismiss(id);

        assert_eq!(feed.len(), 1);
        assert_eq!(feed.iter().next().map(|a| a.message.as_str()), Some("keep me"));
    }

    #[test]
    fn test_severity_is_free_form() {
        let mut feed = AlertFeed::new();
        feed.push("odd", "chartreuse");
        assert_eq!(feed.iter().next().map(|a| a.severity.as_str()), Some("chartreuse"));
    }
}
