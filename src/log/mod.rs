//! Game log: parameterized messages and the sinks that collect them.
//!
//! - [`LogMessage`]: template plus ordered, typed values
//! - [`LogBuilder`]: binds values in placeholder order
//! - [`LogSink`]: where resolution code writes messages
//! - [`GameLog`]: the session's persistent log

mod message;
mod sink;

pub use message::{LogBuilder, LogDataType, LogMessage, LogMessageData};
pub use sink::{GameLog, LogSink};
