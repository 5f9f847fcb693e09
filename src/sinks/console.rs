//! Console sink implementation

use crate::core::{LogLevel, LoggerError, Result, Sink};
use std::io::Write;

/// Console channel a level is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleChannel {
    Stdout,
    /// Warning tier, written to stderr
    Warn,
    Stderr,
}

impl ConsoleChannel {
    /// DEBUG and INFO go to stdout, WARNING to the warning channel,
    /// ERROR and above to stderr
    pub fn for_level(level: LogLevel) -> Self {
        if level < LogLevel::Warning {
            ConsoleChannel::Stdout
        } else if level < LogLevel::Error {
            ConsoleChannel::Warn
        } else {
            ConsoleChannel::Stderr
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, level: LogLevel, text: &str) -> Result<()> {
        let result = match ConsoleChannel::for_level(level) {
            ConsoleChannel::Stdout => writeln!(std::io::stdout().lock(), "{}", text),
            ConsoleChannel::Warn | ConsoleChannel::Stderr => {
                writeln!(std::io::stderr().lock(), "{}", text)
            }
        };
        result.map_err(|e| {
            LoggerError::io_operation("writing to console", "console sink failed", e)
        })
    }

    fn flush(&mut self) -> Result<()> {
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_split() {
        assert_eq!(ConsoleChannel::for_level(LogLevel::Debug), ConsoleChannel::Stdout);
        assert_eq!(ConsoleChannel::for_level(LogLevel::Info), ConsoleChannel::Stdout);
        assert_eq!(ConsoleChannel::for_level(LogLevel::Warning), ConsoleChannel::Warn);
        assert_eq!(ConsoleChannel::for_level(LogLevel::Error), ConsoleChannel::Stderr);
        assert_eq!(ConsoleChannel::for_level(LogLevel::Critical), ConsoleChannel::Stderr);
        assert_eq!(ConsoleChannel::for_level(LogLevel::Fatal), ConsoleChannel::Stderr);
    }

    #[test]
    fn test_console_write() {
        let mut sink = ConsoleSink::new();
        assert!(sink.write(LogLevel::Info, "console sink test").is_ok());
        assert!(sink.flush().is_ok());
        assert_eq!(sink.name(), "console");
    }
}
