//! Log sinks.
//!
//! Resolution code records messages through the [`LogSink`] trait it is
//! handed explicitly; there is no global log.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::message::LogMessage;
use crate::core::PlayerId;

/// Destination for game log messages.
pub trait LogSink {
    /// Append a message.
    fn record(&mut self, message: LogMessage);
}

/// The session's game log.
///
/// Backed by a persistent vector so snapshots for clients are O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLog {
    entries: Vector<LogMessage>,
}

impl GameLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogMessage> {
        self.entries.iter()
    }

    /// Most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&LogMessage> {
        self.entries.last()
    }

    /// Render every entry to client text.
    pub fn render_all(&self, player_name: impl Fn(PlayerId) -> String) -> Vec<String> {
        self.entries.iter().map(|m| m.render(&player_name)).collect()
    }

    /// Encode the log as a compact binary record.
    pub fn encode(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a log produced by [`GameLog::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

impl LogSink for GameLog {
    fn record(&mut self, message: LogMessage) {
        tracing::debug!(
            target: "placement_rules::log",
            template = %message.template,
            params = message.data.len(),
            "game log entry"
        );
        self.entries.push_back(message);
    }
}

impl LogSink for Vec<LogMessage> {
    fn record(&mut self, message: LogMessage) {
        self.push(message);
    }
}
