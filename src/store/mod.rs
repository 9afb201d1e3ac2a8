//! Task store
//!
//! Ordered task list with positional identity, persisted as a full JSON
//! snapshot on every mutation and reloaded as a full snapshot at startup.
//! There is exactly one logical writer (the user-driven CLI), so no locking:
//! mutations always operate on the current sequence, never a cached index.

use eyre::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A single task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Non-empty after trim; the store refuses anything else
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// The ordered task list plus its snapshot location
pub struct TaskStore {
    tasks: Vec<Task>,
    path: PathBuf,
}

impl TaskStore {
    /// Load the snapshot at `path`, or start empty if none exists
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let tasks = if path.exists() {
            let content = fs::read_to_string(&path)
                .context(format!("Failed to read task snapshot: {}", path.display()))?;
            serde_json::from_str(&content)
                .context(format!("Failed to parse task snapshot: {}", path.display()))?
        } else {
            Vec::new()
        };

        debug!(?path, task_count = tasks.len(), "Opened task store");
        Ok(Self { tasks, path })
    }

    /// The current task sequence, in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Completed and pending counts
    pub fn counts(&self) -> (usize, usize) {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        (completed, self.tasks.len() - completed)
    }

    /// Append a task; rejects a title that is empty after trimming
    pub fn add(&mut self, title: &str, description: &str) -> Result<()> {
        let title = title.trim();
        if title.is_empty() {
            bail!("task title must not be empty");
        }

        self.tasks.push(Task {
            title: title.to_string(),
            description: description.to_string(),
            completed: false,
        });
        self.persist()?;

        info!(title, task_count = self.tasks.len(), "Task added");
        Ok(())
    }

    /// Toggle completion of the task at `index`; returns the new state
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let Some(task) = self.tasks.get_mut(index) else {
            bail!("no task at index {} ({} tasks)", index + 1, self.tasks.len());
        };
        task.completed = !task.completed;
        let completed = task.completed;
        self.persist()?;

        debug!(index, completed, "Task toggled");
        Ok(completed)
    }

    /// Remove and return the task at `index`
    ///
    /// Removal shifts every later task down, so any previously captured
    /// index is invalid afterwards.
    pub fn remove(&mut self, index: usize) -> Result<Task> {
        if index >= self.tasks.len() {
            bail!("no task at index {} ({} tasks)", index + 1, self.tasks.len());
        }
        let task = self.tasks.remove(index);
        self.persist()?;

        info!(title = %task.title, "Task removed");
        Ok(task)
    }

    /// Write the full snapshot
    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create store directory")?;
        }
        let content = serde_json::to_string_pretty(&self.tasks)?;
        fs::write(&self.path, content)
            .context(format!("Failed to write task snapshot: {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, TaskStore) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = TaskStore::load(dir.path().join("tasks.json")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_add_and_list_preserves_order() {
        let (_dir, mut store) = temp_store();

        store.add("Buy milk", "2 liters").unwrap();
        store.add("Run 5k", "").unwrap();

        let tasks = store.tasks();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "Buy milk");
        assert_eq!(tasks[0].description, "2 liters");
        assert!(!tasks[0].completed);
        assert_eq!(tasks[1].title, "Run 5k");
    }

    #[test]
    fn test_add_rejects_empty_title() {
        let (_dir, mut store) = temp_store();

        assert!(store.add("", "desc").is_err());
        assert!(store.add("   ", "desc").is_err());
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_add_trims_title() {
        let (_dir, mut store) = temp_store();

        store.add("  Buy milk  ", "").unwrap();
        assert_eq!(store.tasks()[0].title, "Buy milk");
    }

    #[test]
    fn test_toggle_flips_completion() {
        let (_dir, mut store) = temp_store();
        store.add("Buy milk", "").unwrap();

        assert!(store.toggle(0).unwrap());
        assert!(store.tasks()[0].completed);
        assert!(!store.toggle(0).unwrap());
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_out_of_range_index_is_an_error() {
        let (_dir, mut store) = temp_store();
        store.add("Buy milk", "").unwrap();

        assert!(store.toggle(1).is_err());
        assert!(store.remove(5).is_err());
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn test_remove_shifts_later_tasks() {
        let (_dir, mut store) = temp_store();
        store.add("a", "").unwrap();
        store.add("b", "").unwrap();
        store.add("c", "").unwrap();

        let removed = store.remove(1).unwrap();
        assert_eq!(removed.title, "b");
        assert_eq!(store.tasks()[1].title, "c");
    }

    #[test]
    fn test_counts() {
        let (_dir, mut store) = temp_store();
        store.add("a", "").unwrap();
        store.add("b", "").unwrap();
        store.toggle(0).unwrap();

        assert_eq!(store.counts(), (1, 1));
    }

    #[test]
    fn test_snapshot_round_trip() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("tasks.json");

        {
            let mut store = TaskStore::load(&path).unwrap();
            store.add("Buy milk", "2 liters").unwrap();
            store.add("Run 5k", "Morning jog").unwrap();
            store.toggle(1).unwrap();
        }

        let reloaded = TaskStore::load(&path).unwrap();
        assert_eq!(reloaded.tasks().len(), 2);
        assert_eq!(reloaded.tasks()[0].title, "Buy milk");
        assert!(reloaded.tasks()[1].completed);
    }
}
