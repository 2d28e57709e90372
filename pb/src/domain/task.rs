//! Task domain type
//!
//! One task = one configuration blob to push to one target device.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors raised when constructing a [`Task`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("target must not be empty")]
    EmptyTarget,
    #[error("config must not be empty")]
    EmptyConfig,
}

/// Push lifecycle status.
///
/// Variant names are the wire format: persisted documents carry them
/// capitalized, so no serde rename is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PushStatus {
    /// Queued, no worker started
    #[default]
    Pending,
    /// Worker is establishing a session
    Connecting,
    /// Session up, configuration being applied
    Pushing,
    /// Configuration applied (and saved if requested)
    Pushed,
    /// Worker observed an abort request at a checkpoint
    Aborted,
    /// Connect or transport failure
    Failed,
}

impl PushStatus {
    /// Terminal statuses admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Pushed | Self::Aborted | Self::Failed)
    }
}

impl std::fmt::Display for PushStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Connecting => write!(f, "Connecting"),
            Self::Pushing => write!(f, "Pushing"),
            Self::Pushed => write!(f, "Pushed"),
            Self::Aborted => write!(f, "Aborted"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

/// Stable opaque task identifier used to route status events.
///
/// Minted at creation and again at load; never persisted. Position in the
/// board remains the public iteration/selection key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
    /// Mint a fresh identifier.
    pub fn fresh() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-spawn worker generation identifier.
///
/// A new push at a position mints a new WorkerId; events carrying an older
/// generation are dropped by the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkerId(String);

impl WorkerId {
    pub fn fresh() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }
}

impl std::fmt::Display for WorkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One (target, config, save, status) record.
///
/// `target` and `config` are immutable after construction; only `save` is
/// editable and `status` is driven by workers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Regenerated on load; the persisted document carries only the four
    /// public fields.
    #[serde(skip, default = "TaskId::fresh")]
    pub id: TaskId,

    /// Hostname or address to push to
    pub target: String,

    /// Configuration lines to apply
    pub config: String,

    /// Persist the configuration on the device after applying
    pub save: bool,

    /// Current lifecycle status
    pub status: PushStatus,
}

impl Task {
    /// Create a new Pending task, rejecting blank target or config.
    ///
    /// Values are stored as given; emptiness is judged after trimming.
    pub fn new(target: impl Into<String>, config: impl Into<String>, save: bool) -> Result<Self, TaskError> {
        let target = target.into();
        let config = config.into();
        if target.trim().is_empty() {
            return Err(TaskError::EmptyTarget);
        }
        if config.trim().is_empty() {
            return Err(TaskError::EmptyConfig);
        }
        Ok(Self {
            id: TaskId::fresh(),
            target,
            config,
            save,
            status: PushStatus::Pending,
        })
    }
}
