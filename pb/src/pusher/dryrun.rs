//! Built-in rehearsal transport
//!
//! Opens no real session: logs what a push would do and reports success, so a
//! board can be exercised end to end before a real transport is wired in.

use async_trait::async_trait;
use tracing::{debug, info};

use super::{ConfigPusher, ConfigSession, Credentials, Proxy, PusherError};

/// Transport that announces each step instead of performing it.
pub struct DryRunPusher;

#[async_trait]
impl ConfigPusher for DryRunPusher {
    async fn connect(
        &self,
        target: &str,
        credentials: &Credentials,
        proxy: Option<&Proxy>,
    ) -> Result<Box<dyn ConfigSession>, PusherError> {
        match proxy {
            Some(p) => info!("dry-run: connect to {} as {} via {}", target, credentials.username, p.host),
            None => info!("dry-run: connect to {} as {}", target, credentials.username),
        }
        Ok(Box::new(DryRunSession {
            target: target.to_string(),
        }))
    }
}

struct DryRunSession {
    target: String,
}

#[async_trait]
impl ConfigSession for DryRunSession {
    async fn send_config(&mut self, config: &str) -> Result<(), PusherError> {
        for line in config.lines() {
            info!("dry-run [{}]> {}", self.target, line);
        }
        Ok(())
    }

    async fn save_config(&mut self) -> Result<(), PusherError> {
        info!("dry-run [{}]> write memory", self.target);
        Ok(())
    }

    async fn close(&mut self) {
        debug!("dry-run: closed session with {}", self.target);
    }
}
