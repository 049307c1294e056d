//! To-do items and their priority levels

use serde::{Deserialize, Serialize};

/// Priority levels, highest urgency first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Priority {
    High,
    Medium,
    #[default]
    Low,
}

impl Priority {
    /// Sort key: High sorts before Medium sorts before Low
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

/// A single to-do entry
///
/// `id` is assigned by the list at creation and never changes; all mutations
/// address items by id rather than position, since the list re-sorts after
/// every change. Blobs written before ids existed deserialize with `id` 0
/// and get a fresh one assigned on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    #[serde(default)]
    pub id: u32,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_order() {
        assert!(Priority::High.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::Low.rank());
    }

    #[test]
    fn test_priority_str_round_trip() {
        for p in [Priority::High, Priority::Medium, Priority::Low] {
            assert_eq!(Priority::from_str(p.as_str()), Some(p));
        }
    }

    #[test]
    fn test_priority_from_str_case_insensitive() {
        assert_eq!(Priority::from_str("HIGH"), Some(Priority::High));
        assert_eq!(Priority::from_str("medium"), Some(Priority::Medium));
        assert_eq!(Priority::from_str("urgent"), None);
        assert_eq!(Priority::from_str(""), None);
    }

    #[test]
    fn test_priority_serializes_by_name() {
        let json = serde_json::to_string(&Priority::Medium).unwrap();
        assert_eq!(json, "\"Medium\"");
        let back: Priority = serde_json::from_str("\"High\"").unwrap();
        assert_eq!(back, Priority::High);
    }

    #[test]
    fn test_item_defaults_for_legacy_fields() {
        // Blobs from the pre-id widget carry only text/completed/priority
        let item: TodoItem =
            serde_json::from_str(r#"{"text":"Buy milk","completed":true,"priority":"Low"}"#)
                .unwrap();
        assert_eq!(item.id, 0);
        assert!(item.completed);
        assert_eq!(item.priority, Priority::Low);
    }
}
