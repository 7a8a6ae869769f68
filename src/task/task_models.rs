use chrono::{DateTime, NaiveDate, NaiveDateTime};
use sqlx::FromRow;
use validator::Validate;

/// Wire format of a reminder in JSON responses and on the page.
pub const REMINDER_FORMAT: &str = "%Y-%m-%d %H:%M";

const REMINDER_INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    /// Maps a user-facing label to a priority. Unknown labels fall back to medium.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "low" => TaskPriority::Low,
            "high" => TaskPriority::High,
            _ => TaskPriority::Medium,
        }
    }

    pub fn from_level(level: i32) -> Self {
        match level {
            1 => TaskPriority::Low,
            3 => TaskPriority::High,
            _ => TaskPriority::Medium,
        }
    }

    /// Integer stored in the `priority` column.
    pub fn level(self) -> i32 {
        match self {
            TaskPriority::Low => 1,
            TaskPriority::Medium => 2,
            TaskPriority::High => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskPriority::Low => write!(f, "Low"),
            TaskPriority::Medium => write!(f, "Medium"),
            TaskPriority::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Task {
    pub id: i64,
    pub content: String,
    pub priority: i32,
    pub remind_at: Option<NaiveDateTime>,
}

impl Task {
    pub fn priority(&self) -> TaskPriority {
        TaskPriority::from_level(self.priority)
    }

    pub fn formatted_reminder(&self) -> Option<String> {
        self.remind_at.map(|at| at.format(REMINDER_FORMAT).to_string())
    }
}

/// A normalized task that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewTask {
    #[validate(length(max = 200, message = "Task content cannot exceed 200 characters"))]
    pub content: String,
    pub priority: TaskPriority,
    pub remind_at: Option<NaiveDateTime>,
}

/// Parses an ISO-8601 reminder. A trailing UTC offset is accepted and dropped,
/// keeping the wall-clock time as written.
pub fn parse_reminder(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.naive_local());
    }

    REMINDER_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_priority_from_label() {
        assert_eq!(TaskPriority::from_label("low").level(), 1);
        assert_eq!(TaskPriority::from_label("medium").level(), 2);
        assert_eq!(TaskPriority::from_label("high").level(), 3);
        assert_eq!(TaskPriority::from_label("HIGH").level(), 3);
        assert_eq!(TaskPriority::from_label("Low").level(), 1);
        assert_eq!(TaskPriority::from_label("urgent").level(), 2);
        assert_eq!(TaskPriority::from_label("").level(), 2);
    }

    #[test]
    fn test_priority_display() {
        assert_eq!(TaskPriority::Low.to_string(), "Low");
        assert_eq!(TaskPriority::Medium.to_string(), "Medium");
        assert_eq!(TaskPriority::High.to_string(), "High");
    }

    #[test]
    fn test_priority_from_level() {
        assert_eq!(TaskPriority::from_level(1), TaskPriority::Low);
        assert_eq!(TaskPriority::from_level(2), TaskPriority::Medium);
        assert_eq!(TaskPriority::from_level(3), TaskPriority::High);
    }

    #[test]
    fn test_parse_reminder_formats() {
        let expected = at("2024-06-01 09:30:00");
        assert_eq!(parse_reminder("2024-06-01T09:30:00"), Some(expected));
        assert_eq!(parse_reminder("2024-06-01T09:30"), Some(expected));
        assert_eq!(parse_reminder("2024-06-01 09:30"), Some(expected));
        assert_eq!(parse_reminder("2024-06-01T09:30:00+02:00"), Some(expected));
        assert_eq!(parse_reminder("2024-06-01T09:30:00Z"), Some(expected));
        assert_eq!(parse_reminder("2024-06-01"), Some(at("2024-06-01 00:00:00")));
        assert_eq!(
            parse_reminder("2024-06-01T09:30:00.250"),
            Some(expected + chrono::Duration::milliseconds(250))
        );
    }

    #[test]
    fn test_parse_reminder_rejects_garbage() {
        assert_eq!(parse_reminder("not a date"), None);
        assert_eq!(parse_reminder("2024-13-01T09:30"), None);
        assert_eq!(parse_reminder("09:30"), None);
    }

    #[test]
    fn test_formatted_reminder() {
        let task = Task {
            id: 1,
            content: "Buy milk".into(),
            priority: 1,
            remind_at: Some(at("2024-06-01 09:30:45")),
        };
        assert_eq!(task.formatted_reminder().as_deref(), Some("2024-06-01 09:30"));

        let task = Task { remind_at: None, ..task };
        assert_eq!(task.formatted_reminder(), None);
    }
}
