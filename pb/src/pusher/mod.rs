//! ConfigPusher capability
//!
//! The transport used to reach a target device, abstracted behind object-safe
//! traits. The engine only ever talks to these; real SSH/Telnet transports
//! live outside this crate. [`DryRunPusher`] is the built-in rehearsal
//! implementation.

use async_trait::async_trait;
use thiserror::Error;

mod dryrun;

pub use dryrun::DryRunPusher;

/// Errors surfaced by ConfigPusher implementations.
///
/// Each maps to status `Failed` at the worker boundary; none propagates
/// further.
#[derive(Debug, Error)]
pub enum PusherError {
    /// Session could not be established
    #[error("connect failed: {0}")]
    Connect(String),
    /// Applying configuration lines failed mid-session
    #[error("push failed: {0}")]
    Push(String),
    /// Persisting the configuration on the device failed
    #[error("save failed: {0}")]
    Save(String),
}

/// Login material for a device session.
#[derive(Clone, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Jumphost hop for targets that are not directly reachable.
#[derive(Clone)]
pub struct Proxy {
    pub host: String,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Proxy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Proxy")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Factory for device sessions.
#[async_trait]
pub trait ConfigPusher: Send + Sync {
    /// Establish a session with `target`, optionally hopping through a
    /// jumphost.
    async fn connect(
        &self,
        target: &str,
        credentials: &Credentials,
        proxy: Option<&Proxy>,
    ) -> Result<Box<dyn ConfigSession>, PusherError>;
}

/// One established session with a device.
#[async_trait]
pub trait ConfigSession: Send {
    /// Apply configuration lines to the device.
    async fn send_config(&mut self, config: &str) -> Result<(), PusherError>;

    /// Persist the running configuration on the device.
    async fn save_config(&mut self) -> Result<(), PusherError>;

    /// Release the session. Implementations handle their own close failures.
    async fn close(&mut self);
}
