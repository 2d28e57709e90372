//! Concurrent push orchestration
//!
//! The board is a single actor that owns the [`TaskStore`](crate::store::TaskStore)
//! and a slot table pairing each task position with its most recent worker.
//! [`PushBoard::spawn`] starts the actor and returns a [`BoardHandle`];
//! handles send commands over an mpsc channel and workers report status over
//! the same channel, so every store mutation goes through one consumer.
//! Subscribers watch [`BoardEvent`]s on a broadcast channel.

mod config;
mod core;
mod handle;
mod messages;
mod worker;

pub use self::core::PushBoard;
pub use config::BoardConfig;
pub use handle::BoardHandle;
pub use messages::{BoardError, BoardEvent, BoardRequest, BoardResponse, ImportStats};
