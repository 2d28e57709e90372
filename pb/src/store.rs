//! Durable ordered task store
//!
//! Single source of truth for task records. Every mutation rewrites the whole
//! JSON document before returning; if the write fails the in-memory change is
//! rolled back, so memory and disk never diverge past a call boundary.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::domain::{Task, TaskId};

/// Errors surfaced by mutating store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("task store io: {0}")]
    Io(#[from] std::io::Error),
    #[error("task store serialization: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("position {position} out of range (board has {len} tasks)")]
    OutOfRange { position: usize, len: usize },
}

/// Ordered collection of tasks persisted as one JSON document.
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Open the store at `path`, loading prior state verbatim (order and
    /// status preserved, ids minted fresh) or initializing an empty document.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        if path.exists() {
            let raw = fs::read_to_string(&path)?;
            let tasks: Vec<Task> = if raw.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&raw)?
            };
            debug!("loaded {} tasks from {}", tasks.len(), path.display());
            Ok(Self { path, tasks })
        } else {
            let store = Self { path, tasks: Vec::new() };
            store.persist()?;
            debug!("initialized empty board at {}", store.path.display());
            Ok(store)
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Task> {
        self.tasks.get(position)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Cloned view of the current state.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.to_vec()
    }

    /// Resolve a task id to its current position.
    pub fn position_of(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    /// Append a task and persist.
    pub fn append(&mut self, task: Task) -> Result<(), StoreError> {
        self.tasks.push(task);
        if let Err(e) = self.persist() {
            self.tasks.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Replace the task at `position` and persist.
    pub fn replace(&mut self, position: usize, task: Task) -> Result<(), StoreError> {
        self.check(position)?;
        let prior = std::mem::replace(&mut self.tasks[position], task);
        if let Err(e) = self.persist() {
            self.tasks[position] = prior;
            return Err(e);
        }
        Ok(())
    }

    /// Remove and return the task at `position`, persisting the shrunk board.
    pub fn remove_at(&mut self, position: usize) -> Result<Task, StoreError> {
        self.check(position)?;
        let removed = self.tasks.remove(position);
        if let Err(e) = self.persist() {
            self.tasks.insert(position, removed);
            return Err(e);
        }
        Ok(removed)
    }

    /// Drop every task and persist the empty board.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        let prior = std::mem::take(&mut self.tasks);
        if let Err(e) = self.persist() {
            self.tasks = prior;
            return Err(e);
        }
        Ok(())
    }

    /// Flip the save flag at `position` and persist. Target and config stay
    /// immutable; this is the only editable field.
    pub fn set_save(&mut self, position: usize, save: bool) -> Result<(), StoreError> {
        self.check(position)?;
        let prior = self.tasks[position].save;
        self.tasks[position].save = save;
        if let Err(e) = self.persist() {
            self.tasks[position].save = prior;
            return Err(e);
        }
        Ok(())
    }

    fn check(&self, position: usize) -> Result<(), StoreError> {
        if position >= self.tasks.len() {
            return Err(StoreError::OutOfRange {
                position,
                len: self.tasks.len(),
            });
        }
        Ok(())
    }

    fn persist(&self) -> Result<(), StoreError> {
        let doc = serde_json::to_string_pretty(&self.tasks)?;
        fs::write(&self.path, doc)?;
        Ok(())
    }
}
