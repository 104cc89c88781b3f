//! Parameterized log messages.
//!
//! A message is a template with `${n}` placeholders plus an ordered list of
//! typed values. The client text and the structured record both come from
//! the same `LogMessage`, so they cannot drift apart.
//!
//! ```
//! use placement_rules::cards::CardName;
//! use placement_rules::core::PlayerId;
//! use placement_rules::log::LogBuilder;
//!
//! let message = LogBuilder::new("${0} gained a bonus ${1} because of ${2}")
//!     .player(PlayerId::new(0))
//!     .string("steel")
//!     .card_name(CardName::GeologicalSurvey)
//!     .build();
//!
//! let text = message.render(|p| format!("P{}", p.0));
//! assert_eq!(text, "P0 gained a bonus steel because of Geological Survey");
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardName;
use crate::core::PlayerId;

/// Kind of a bound placeholder value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogDataType {
    /// A player, rendered through the caller's name lookup.
    Player,
    /// Text rendered as-is (resource names etc).
    String,
    /// A card title.
    Card,
    /// Text the client must not translate.
    RawString,
}

/// One bound placeholder value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogMessageData {
    Player(PlayerId),
    String(String),
    Card(CardName),
    RawString(String),
}

impl LogMessageData {
    /// The value's kind.
    #[must_use]
    pub fn kind(&self) -> LogDataType {
        match self {
            LogMessageData::Player(_) => LogDataType::Player,
            LogMessageData::String(_) => LogDataType::String,
            LogMessageData::Card(_) => LogDataType::Card,
            LogMessageData::RawString(_) => LogDataType::RawString,
        }
    }
}

/// A structured game log entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMessage {
    pub template: String,
    pub data: SmallVec<[LogMessageData; 3]>,
}

impl LogMessage {
    /// Render to client text, naming players via `player_name`.
    ///
    /// A placeholder without a bound value is left verbatim.
    pub fn render(&self, player_name: impl Fn(PlayerId) -> String) -> String {
        let mut out = String::with_capacity(self.template.len() + 16);
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find("${") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            let bound = after.find('}').and_then(|end| {
                let index: usize = after[..end].parse().ok()?;
                let value = self.data.get(index)?;
                Some((end, value))
            });

            match bound {
                Some((end, value)) => {
                    match value {
                        LogMessageData::Player(p) => out.push_str(&player_name(*p)),
                        LogMessageData::String(s) | LogMessageData::RawString(s) => out.push_str(s),
                        LogMessageData::Card(c) => out.push_str(c.as_str()),
                    }
                    rest = &after[end + 1..];
                }
                None => {
                    out.push_str("${");
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }

    /// Players referenced by this message.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.data.iter().filter_map(|d| match d {
            LogMessageData::Player(p) => Some(*p),
            _ => None,
        })
    }
}

/// Builder binding placeholder values in order.
#[derive(Clone, Debug)]
pub struct LogBuilder {
    message: LogMessage,
}

impl LogBuilder {
    /// Start a message from a template.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            message: LogMessage {
                template: template.into(),
                data: SmallVec::new(),
            },
        }
    }

    /// Bind a player.
    #[must_use]
    pub fn player(mut self, player: PlayerId) -> Self {
        self.message.data.push(LogMessageData::Player(player));
        self
    }

    /// Bind a translatable string.
    #[must_use]
    pub fn string(mut self, value: impl Into<String>) -> Self {
        self.message.data.push(LogMessageData::String(value.into()));
        self
    }

    /// Bind a raw, untranslated string.
    #[must_use]
    pub fn raw_string(mut self, value: impl Into<String>) -> Self {
        self.message.data.push(LogMessageData::RawString(value.into()));
        self
    }

    /// Bind a card title.
    #[must_use]
    pub fn card_name(mut self, card: CardName) -> Self {
        self.message.data.push(LogMessageData::Card(card));
        self
    }

    /// Finish the message.
    #[must_use]
    pub fn build(self) -> LogMessage {
        self.message
    }
}
