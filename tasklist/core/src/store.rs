use std::path::PathBuf;

use log::warn;
use thiserror::Error;

use crate::storage::{self, Buckets};
use crate::task::Task;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("no task named '{name}'")]
    NotFound { name: String },
}

/// The authoritative owner of all tasks, grouped into per-category buckets.
///
/// Every mutating operation updates the in-memory map first and then writes
/// the whole map back to the backing file. A failed write is logged and the
/// operation still succeeds; the store keeps working in memory and the next
/// successful save catches it up.
///
/// Task names are treated as identifiers but never checked for uniqueness:
/// duplicates are legal, and every by-name operation acts on the first match
/// in iteration order.
#[derive(Debug, Default)]
pub struct TaskStore {
    buckets: Buckets,
    path: Option<PathBuf>,
}

impl TaskStore {
    /// A store with no backing file. Nothing is ever persisted.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Opens the store backed by `path`, loading whatever is already there.
    /// A missing or unreadable file starts the store empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let buckets = storage::load(&path);
        Self {
            buckets,
            path: Some(path),
        }
    }

    /// Adds a new, incomplete task to its category's bucket, creating the
    /// bucket if this is the category's first task.
    pub fn add(&mut self, name: &str, category: &str, due_date: &str, priority: &str) {
        let task = Task::new(name, category, due_date, priority);
        self.buckets
            .entry(category.to_string())
            .or_default()
            .push(task);
        self.persist();
    }

    /// Overwrites every field of the first task named `name`. When the
    /// category changes, the task moves to the new category's bucket so the
    /// bucket key always matches the task's own category field.
    pub fn edit(
        &mut self,
        name: &str,
        new_name: &str,
        new_category: &str,
        new_due_date: &str,
        new_priority: &str,
    ) -> Result<(), StoreError> {
        let Some((old_category, index)) = self.position_of(name) else {
            return Err(StoreError::NotFound { name: name.into() });
        };
        if old_category == new_category {
            if let Some(task) = self
                .buckets
                .get_mut(&old_category)
                .and_then(|bucket| bucket.get_mut(index))
            {
                task.name = new_name.to_string();
                task.category = new_category.to_string();
                task.due_date = new_due_date.to_string();
                task.priority = new_priority.to_string();
            }
        } else {
            let task = self
                .buckets
                .get_mut(&old_category)
                .map(|bucket| bucket.remove(index));
            if let Some(mut task) = task {
                task.name = new_name.to_string();
                task.category = new_category.to_string();
                task.due_date = new_due_date.to_string();
                task.priority = new_priority.to_string();
                self.buckets
                    .entry(new_category.to_string())
                    .or_default()
                    .push(task);
            }
        }
        self.persist();
        Ok(())
    }

    /// Removes the first task named `name` from whichever bucket holds it.
    pub fn delete(&mut self, name: &str) -> Result<(), StoreError> {
        let Some((category, index)) = self.position_of(name) else {
            return Err(StoreError::NotFound { name: name.into() });
        };
        if let Some(bucket) = self.buckets.get_mut(&category) {
            bucket.remove(index);
        }
        self.persist();
        Ok(())
    }

    /// Marks the first task named `name` complete. Already-complete tasks
    /// stay complete; that is not an error.
    pub fn mark_complete(&mut self, name: &str) -> Result<(), StoreError> {
        match self.find_mut(name) {
            Some(task) => task.mark_complete(),
            None => return Err(StoreError::NotFound { name: name.into() }),
        }
        self.persist();
        Ok(())
    }

    /// Puts the first task named `name` back among the incomplete ones.
    pub fn mark_incomplete(&mut self, name: &str) -> Result<(), StoreError> {
        match self.find_mut(name) {
            Some(task) => task.mark_incomplete(),
            None => return Err(StoreError::NotFound { name: name.into() }),
        }
        self.persist();
        Ok(())
    }

    /// First task named `name` in bucket-iteration order, if any.
    pub fn find_by_name(&self, name: &str) -> Option<&Task> {
        self.buckets.values().flatten().find(|task| task.name == name)
    }

    /// A flattened snapshot of every task, for the query views. Bucket
    /// iteration order is unspecified; within a bucket, insertion order.
    pub fn all_tasks(&self) -> Vec<Task> {
        self.buckets.values().flatten().cloned().collect()
    }

    /// Deletes every task in every category.
    pub fn clear_all(&mut self) {
        self.buckets.clear();
        self.persist();
    }

    /// Total number of tasks across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn position_of(&self, name: &str) -> Option<(String, usize)> {
        self.buckets.iter().find_map(|(category, tasks)| {
            tasks
                .iter()
                .position(|task| task.name == name)
                .map(|index| (category.clone(), index))
        })
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Task> {
        self.buckets
            .values_mut()
            .flatten()
            .find(|task| task.name == name)
    }

    fn persist(&self) {
        let Some(path) = &self.path else { return };
        if let Err(err) = storage::save(path, &self.buckets) {
            warn!("could not save tasks to {}: {err}", path.display());
        }
    }
}
