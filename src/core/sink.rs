//! Sink trait for the physical write of formatted log output

use super::{error::Result, log_level::LogLevel};

/// Destination for text a stream has already formatted
///
/// A stream calls `write` while holding its own lock, so implementations
/// only need to be `Send`.
pub trait Sink: Send {
    fn write(&mut self, level: LogLevel, text: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
