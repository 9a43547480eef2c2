//! Task store backed by a single JSON file.
//!
//! Every mutating operation is a full read-modify-write: the whole array is
//! loaded, changed in memory, and written back over the file. There is no
//! locking, so with concurrent invocations the last writer wins.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::task::Task;

/// Default backing file, relative to the working directory.
pub const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// Handle on the backing file. Holds no task state between calls.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TaskStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all tasks in stored order. A missing file is an empty store.
    pub fn load(&self) -> Result<Vec<Task>, StoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "task file missing, treating as empty");
            return Ok(Vec::new());
        }
        let buf = fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        let tasks: Vec<Task> =
            serde_json::from_str(&buf).map_err(|e| StoreError::parse(&self.path, e))?;
        debug!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    /// Overwrite the backing file with `tasks`, pretty-printed with 4-space indentation.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        tasks
            .serialize(&mut ser)
            .map_err(|e| StoreError::serialize(&self.path, e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
        fs::write(&self.path, buf).map_err(|e| StoreError::io(&self.path, e))?;
        debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }

    /// Append a pending task and return it.
    pub fn add(&self, description: &str, due_date: &str) -> Result<Task, StoreError> {
        if !is_iso_date(due_date) {
            warn!(due_date, "due date is not a YYYY-MM-DD calendar date; storing as given");
        }
        let mut tasks = self.load()?;
        let Some(id) = next_id(&tasks) else {
            return Err(StoreError::IdsExhausted {
                path: self.path.clone(),
                max: i64::MAX,
            });
        };
        let task = Task::new(id, description, due_date);
        tasks.push(task.clone());
        self.save(&tasks)?;
        info!(id = task.id, "added task");
        Ok(task)
    }

    /// All tasks in stored order. Never writes the file.
    pub fn list(&self) -> Result<Vec<Task>, StoreError> {
        self.load()
    }

    /// Remove every task with `id` and save, even when nothing matched.
    /// Returns how many tasks were removed.
    pub fn delete(&self, id: i64) -> Result<usize, StoreError> {
        let mut tasks = self.load()?;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        let removed = before - tasks.len();
        self.save(&tasks)?;
        info!(id, removed, "deleted tasks");
        Ok(removed)
    }

    /// Mark the first task with `id` as completed. Saves only on a match.
    /// Returns whether a task was found.
    pub fn complete(&self, id: i64) -> Result<bool, StoreError> {
        let mut tasks = self.load()?;
        let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
            debug!(id, "no task to complete");
            return Ok(false);
        };
        task.completed = true;
        self.save(&tasks)?;
        info!(id, "completed task");
        Ok(true)
    }
}

/// Next id: one past the largest present id, so ids never collide after deletions.
/// Never below 1, even if the file holds only non-positive ids. `None` once `i64::MAX` is taken.
pub fn next_id(tasks: &[Task]) -> Option<i64> {
    tasks.iter().map(|t| t.id).max().unwrap_or(0).max(0).checked_add(1)
}

/// Whether `s` is a real `YYYY-MM-DD` calendar date.
pub fn is_iso_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").is_ok()
}
