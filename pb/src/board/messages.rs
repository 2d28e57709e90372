//! Board messages
//!
//! Commands, worker status updates, and broadcast events for the actor
//! pattern.

use thiserror::Error;
use tokio::sync::oneshot;

use crate::domain::{PushStatus, Task, TaskError, TaskId, WorkerId};
use crate::store::StoreError;

/// Errors from board operations
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("invalid task: {0}")]
    InvalidTask(#[from] TaskError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("board channel closed")]
    ChannelClosed,
}

/// Response from board operations
pub type BoardResponse<T> = Result<T, BoardError>;

/// Summary of a bulk import applied to the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportStats {
    /// Tasks appended to the board
    pub added: usize,
    /// Rows rejected by task validation
    pub skipped: usize,
}

/// Commands sent to the PushBoard actor
#[derive(Debug)]
pub enum BoardRequest {
    // Task management
    Add {
        target: String,
        config: String,
        save: bool,
        reply: oneshot::Sender<BoardResponse<TaskId>>,
    },
    Import {
        rows: Vec<(String, String)>,
        reply: oneshot::Sender<BoardResponse<ImportStats>>,
    },
    Remove {
        position: usize,
        reply: oneshot::Sender<BoardResponse<()>>,
    },
    Clear {
        reply: oneshot::Sender<BoardResponse<()>>,
    },
    SetSave {
        position: usize,
        save: bool,
        reply: oneshot::Sender<BoardResponse<()>>,
    },
    Tasks {
        reply: oneshot::Sender<Vec<Task>>,
    },

    // Push operations
    PushOne {
        position: usize,
        reply: oneshot::Sender<Option<TaskId>>,
    },
    PushSelected {
        positions: Vec<usize>,
        reply: oneshot::Sender<Vec<TaskId>>,
    },
    PushAll {
        reply: oneshot::Sender<Vec<TaskId>>,
    },

    // Abort operations (advisory; never wait for workers)
    AbortOne {
        position: usize,
        reply: oneshot::Sender<()>,
    },
    AbortSelected {
        positions: Vec<usize>,
        reply: oneshot::Sender<()>,
    },
    AbortAll {
        reply: oneshot::Sender<()>,
    },

    // Worker feedback; no reply, workers never block on the board's answer
    StatusUpdate {
        task: TaskId,
        worker: WorkerId,
        status: PushStatus,
    },

    // Shutdown
    Shutdown,
}

/// Events broadcast to presentation subscribers (CLI progress, future TUI,
/// tests). Fire-and-forget: the board does not care whether anyone listens.
#[derive(Debug, Clone)]
pub enum BoardEvent {
    /// A task's status changed
    StatusChanged {
        position: usize,
        task: TaskId,
        status: PushStatus,
    },
    /// The task at `position` was removed
    TaskRemoved { position: usize },
    /// Every task was removed at once
    Cleared,
}
