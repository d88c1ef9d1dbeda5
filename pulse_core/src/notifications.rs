//! Notification panel state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Relative time label, e.g. "2 hours ago"
    pub time: String,
    pub read: bool,
}

impl Notification {
    pub fn new(id: u32, title: &str, description: &str, time: &str, read: bool) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            time: time.to_string(),
            read,
        }
    }
}

pub fn seed_notifications() -> Vec<Notification> {
    vec![
        Notification::new(1, "New Course Available", "Introduction to Machine Learning is now available", "2 hours ago", false),
        Notification::new(2, "Team Invitation", "You've been invited to join the Web Development team", "1 day ago", false),
        Notification::new(3, "Achievement Unlocked", "You've earned the 'First Steps' achievement", "3 days ago", true),
        Notification::new(4, "Mentor Session Scheduled", "Your session with Alex Chen is confirmed for tomorrow at 3pm", "4 hours ago", false),
        Notification::new(5, "Project Deadline Approaching", "Your 'Portfolio Website' project is due in 3 days", "12 hours ago", false),
    ]
}

/// Collapsible notification list with an unread badge
#[derive(Debug, Clone, Serialize)]
pub struct NotificationPanel {
    expanded: bool,
    unread: usize,
    items: Vec<Notification>,
}

impl Default for NotificationPanel {
    fn default() -> Self {
        Self::new(seed_notifications())
    }
}

impl NotificationPanel {
    pub fn new(items: Vec<Notification>) -> Self {
        let unread = items.iter().filter(|n| !n.read).count();
        Self {
            expanded: false,
            unread,
            items,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip between collapsed and expanded; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    pub fn unread_count(&self) -> usize {
        self.unread
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Zero the badge and mark every item read so the list matches it
    pub fn mark_all_read(&mut self) {
        self.unread = 0;
        for item in &mut self.items {
            item.read = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_counter_starts_from_seed() {
        let panel = NotificationPanel::default();
        assert_eq!(panel.unread_count(), 4);
        assert!(!panel.is_expanded());
    }

    #[test]
    fn test_toggle() {
        let mut panel = NotificationPanel::default();
        assert!(panel.toggle());
        assert!(!panel.toggle());
    }

    #[test]
    fn test_mark_all_read_zeroes_counter_and_flags() {
        let mut panel = NotificationPanel::default();
        panel.mark_all_read();
        assert_eq!(panel.unread_count(), 0);
        assert!(panel.items().iter().all(|n| n.read));

        // idempotent
        panel.mark_all_read();
        assert_eq!(panel.unread_count(), 0);
    }

    #[test]
    fn test_mark_all_read_on_empty_panel() {
        let mut panel = NotificationPanel::new(Vec::new());
        assert_eq!(panel.unread_count(), 0);
        panel.mark_all_read();
        assert_eq!(panel.unread_count(), 0);
    }
}
