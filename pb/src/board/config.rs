//! Board configuration

use serde::{Deserialize, Serialize};

/// Channel sizing for the board actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Request queue depth (commands plus worker status updates)
    #[serde(rename = "channel-buffer")]
    pub channel_buffer: usize,

    /// Broadcast buffer for presentation events; slow subscribers that lag
    /// past this many events miss the oldest ones
    #[serde(rename = "event-buffer")]
    pub event_buffer: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 256,
            event_buffer: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.channel_buffer, 256);
        assert_eq!(config.event_buffer, 64);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: BoardConfig = serde_yaml::from_str("channel-buffer: 16").unwrap();
        assert_eq!(config.channel_buffer, 16);
        assert_eq!(config.event_buffer, 64);
    }
}
