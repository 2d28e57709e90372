//! PushBoard - concurrent configuration push orchestration
//!
//! Keeps an ordered board of push tasks (target device, configuration blob,
//! save flag) persisted as a single JSON document, and pushes them to their
//! targets concurrently while the board stays responsive. One worker runs per
//! pushed task; aborts are cooperative and take effect at the worker's next
//! checkpoint.
//!
//! # Architecture
//!
//! ```text
//!  BoardHandle ──commands──▶ PushBoard (actor) ──owns──▶ TaskStore (board.json)
//!       │                      │       ▲
//!       │                  spawns      │ status updates
//!       │                      ▼       │
//!       │                  push workers ──▶ ConfigPusher sessions
//!       └──◀──────────── board events (broadcast)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use pushboard::{BoardConfig, Credentials, DryRunPusher, PushBoard, TaskStore};
//!
//! let store = TaskStore::open("board.json")?;
//! let handle = PushBoard::spawn(
//!     BoardConfig::default(),
//!     store,
//!     std::sync::Arc::new(DryRunPusher),
//!     Credentials::default(),
//!     None,
//! );
//! handle.add("r1.example.com", "hostname r1", true).await?;
//! handle.push_all().await?;
//! ```

pub mod board;
pub mod cli;
pub mod config;
pub mod domain;
pub mod import;
pub mod pusher;
pub mod store;

pub use board::{BoardConfig, BoardError, BoardEvent, BoardHandle, ImportStats, PushBoard};
pub use domain::{PushStatus, Task, TaskError, TaskId, WorkerId};
pub use pusher::{ConfigPusher, ConfigSession, Credentials, DryRunPusher, Proxy, PusherError};
pub use store::{StoreError, TaskStore};
