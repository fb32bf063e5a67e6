//! Core engine for the categorized to-do list: the task model, the
//! category-bucketed store, read-only query views, and file persistence.
pub mod query;
pub mod storage;
pub mod store;
pub mod task;

pub use query::QueryError;
pub use storage::StorageError;
pub use store::{StoreError, TaskStore};
pub use task::Task;
