//! Cloneable client handle for the board actor

use tokio::sync::{broadcast, mpsc, oneshot};

use crate::domain::{Task, TaskId};

use super::messages::{BoardError, BoardEvent, BoardRequest, BoardResponse, ImportStats};

/// Sends commands to a running [`PushBoard`](super::PushBoard) and hands out
/// event subscriptions. Cheap to clone; all clones talk to the same actor.
#[derive(Clone)]
pub struct BoardHandle {
    tx: mpsc::Sender<BoardRequest>,
    event_tx: broadcast::Sender<BoardEvent>,
}

impl BoardHandle {
    pub(crate) fn new(tx: mpsc::Sender<BoardRequest>, event_tx: broadcast::Sender<BoardEvent>) -> Self {
        Self { tx, event_tx }
    }

    /// Subscribe to board events. Each receiver sees every event emitted
    /// after the call; slow receivers can lag and lose the oldest entries.
    pub fn subscribe(&self) -> broadcast::Receiver<BoardEvent> {
        self.event_tx.subscribe()
    }

    /// Append a new pending task.
    pub async fn add(
        &self,
        target: impl Into<String>,
        config: impl Into<String>,
        save: bool,
    ) -> BoardResponse<TaskId> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(BoardRequest::Add {
                target: target.into(),
                config: config.into(),
                save,
                reply: reply_tx,
            })
            .await
            .map_err(|_| BoardError::ChannelClosed)?;
        reply_rx.await.map_err(|_| BoardError::ChannelClosed)?
    }

    /// Append tasks from `(target, config)` rows, skipping invalid ones.
    pub async fn import(&self, rows: Vec<(String, String)>) -> BoardResponse<ImportStats> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(BoardRequest::Import { rows, reply: reply_tx })
            .await
            .map_err(|_| BoardError::ChannelClosed)?;
        reply_rx.await.map_err(|_| BoardError::ChannelClosed)?
    }

    /// Remove the task at `position`, aborting its worker if one is running.
    pub async fn remove(&self, position: usize) -> BoardResponse<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(BoardRequest::Remove { position, reply: reply_tx })
            .await
            .map_err(|_| BoardError::ChannelClosed)?;
        reply_rx.await.map_err(|_| BoardError::ChannelClosed)?
    }

    /// Remove every task, aborting all running workers.
    pub async fn clear(&self) -> BoardResponse<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(BoardRequest::Clear { reply: reply_tx })
            .await
            .map_err(|_| BoardError::ChannelClosed)?;
        reply_rx.await.map_err(|_| BoardError::ChannelClosed)?
    }

    /// Flip the save flag of the task at `position`.
    pub async fn set_save(&self, position: usize, save: bool) -> BoardResponse<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(BoardRequest::SetSave { position, save, reply: reply_tx })
            .await
            .map_err(|_| BoardError::ChannelClosed)?;
        reply_rx.await.map_err(|_| BoardError::ChannelClosed)?
    }

    /// Snapshot of all tasks in board order.
    pub async fn tasks(&self) -> BoardResponse<Vec<Task>> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(BoardRequest::Tasks { reply: reply_tx })
            .await
            .map_err(|_| BoardError::ChannelClosed)?;
        reply_rx.await.map_err(|_| BoardError::ChannelClosed)
    }

    /// Start a push for the task at `position`. Returns the task id, or
    /// `None` when the position is vacant or the task is already pushed.
    pub async fn push_one(&self, position: usize) -> BoardResponse<Option<TaskId>> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(BoardRequest::PushOne { position, reply: reply_tx })
            .await
            .map_err(|_| BoardError::ChannelClosed)?;
        reply_rx.await.map_err(|_| BoardError::ChannelClosed)
    }

    /// Start pushes for the given positions, skipping vacant and already
    /// pushed ones. Returns the ids of the tasks that actually started.
    pub async fn push_selected(&self, positions: Vec<usize>) -> BoardResponse<Vec<TaskId>> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(BoardRequest::PushSelected { positions, reply: reply_tx })
            .await
            .map_err(|_| BoardError::ChannelClosed)?;
        reply_rx.await.map_err(|_| BoardError::ChannelClosed)
    }

    /// Start pushes for every task not already pushed.
    pub async fn push_all(&self) -> BoardResponse<Vec<TaskId>> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(BoardRequest::PushAll { reply: reply_tx })
            .await
            .map_err(|_| BoardError::ChannelClosed)?;
        reply_rx.await.map_err(|_| BoardError::ChannelClosed)
    }

    /// Request an abort of the worker at `position`, if any is running.
    pub async fn abort_one(&self, position: usize) -> BoardResponse<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(BoardRequest::AbortOne { position, reply: reply_tx })
            .await
            .map_err(|_| BoardError::ChannelClosed)?;
        reply_rx.await.map_err(|_| BoardError::ChannelClosed)
    }

    /// Request aborts at the given positions.
    pub async fn abort_selected(&self, positions: Vec<usize>) -> BoardResponse<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(BoardRequest::AbortSelected { positions, reply: reply_tx })
            .await
            .map_err(|_| BoardError::ChannelClosed)?;
        reply_rx.await.map_err(|_| BoardError::ChannelClosed)
    }

    /// Request aborts for every running worker.
    pub async fn abort_all(&self) -> BoardResponse<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(BoardRequest::AbortAll { reply: reply_tx })
            .await
            .map_err(|_| BoardError::ChannelClosed)?;
        reply_rx.await.map_err(|_| BoardError::ChannelClosed)
    }

    /// Stop the board actor. Workers already running keep going, but their
    /// status updates have nowhere to land.
    pub async fn shutdown(&self) -> BoardResponse<()> {
        self.tx
            .send(BoardRequest::Shutdown)
            .await
            .map_err(|_| BoardError::ChannelClosed)
    }
}
