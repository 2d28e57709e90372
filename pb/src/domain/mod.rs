//! Domain types for pushboard
//!
//! Core domain types: Task, TaskId, WorkerId, PushStatus.
//! Tasks are what the board stores and workers execute.

mod task;

pub use task::{PushStatus, Task, TaskError, TaskId, WorkerId};
