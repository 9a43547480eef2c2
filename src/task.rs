//! Task data structure.
//!
//! This module defines the `Task` record stored in the backing file and the
//! line format used when listing it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single to-do item.
///
/// Field names and order match the on-disk JSON object:
/// `id`, `description`, `due_date`, `completed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub description: String,
    /// Free text, expected as `YYYY-MM-DD` but stored verbatim.
    pub due_date: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a pending task.
    pub fn new(id: i64, description: impl Into<String>, due_date: impl Into<String>) -> Self {
        Task {
            id,
            description: description.into(),
            due_date: due_date.into(),
            completed: false,
        }
    }

    /// Status label shown by `view`.
    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "Done"
        } else {
            "Pending"
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} - {} (Due: {}) - Status: {}",
            self.id,
            self.description,
            self.due_date,
            self.status_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pending() {
        let t = Task::new(1, "Buy milk", "2024-01-01");
        assert_eq!(
            t.to_string(),
            "ID: 1 - Buy milk (Due: 2024-01-01) - Status: Pending"
        );
    }

    #[test]
    fn test_display_done() {
        let mut t = Task::new(7, "File taxes", "2024-04-15");
        t.completed = true;
        assert_eq!(
            t.to_string(),
            "ID: 7 - File taxes (Due: 2024-04-15) - Status: Done"
        );
    }

    #[test]
    fn test_completed_defaults_to_false() {
        let t: Task =
            serde_json::from_str(r#"{"id": 3, "description": "x", "due_date": "soon"}"#).unwrap();
        assert!(!t.completed);
        assert_eq!(t.due_date, "soon");
    }

    #[test]
    fn test_serialized_keys() {
        let json = serde_json::to_value(Task::new(2, "Walk dog", "2024-02-02")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 2,
                "description": "Walk dog",
                "due_date": "2024-02-02",
                "completed": false
            })
        );
    }
}
