//! # justlog
//!
//! A small, synchronous logging utility. A [`Logger`] filters calls by level,
//! renders its arguments into one message and fans it out to any number of
//! [`OutputStream`]s, each of which formats the entry (timestamp, level name,
//! logger name, optional ANSI colours) and hands it to a [`Sink`].
//!
//! ## Features
//!
//! - **Six levels**: debug, info, warning, error, critical, fatal
//! - **Terminal colours**: per-level colour policy, switchable per stream
//! - **Custom formatting**: date and message formatter hooks that can inspect their stream
//! - **Fan-out**: one call, many streams, one shared timestamp
//! - **Thread safe**: each stream serializes its own writes
//!
//! ```
//! use justlog::prelude::*;
//! use justlog::error;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let stream = Arc::new(OutputStream::detached(false));
//! let logger = Logger::with_stream("example", LogLevel::Error, stream.clone());
//!
//! error!(logger, "Test", json!({"value": 255}));
//! assert!(stream.last_output().ends_with("[error] [example]  Test {\"value\":255}"));
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        ColorPicker, ColorString, DefaultColorPicker, LogArg, LogLevel, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, OutputStream, OutputStreamBuilder,
        PlainColorPicker, Result, Sink, Stream, StreamConfig, StreamTarget, TermColor,
        TimestampFormat,
    };
    pub use crate::sinks::{
        ConsoleChannel, ConsoleSink, FileSink, MemoryHandle, MemorySink, NullSink,
    };
}

pub use crate::core::{
    render_message, ColorPicker, ColorString, DateFormatterFn, DefaultColorPicker, LogArg,
    LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics,
    MessageFormatterFn, OutputStream, OutputStreamBuilder, PlainColorPicker, Result, Sink, Stream,
    StreamConfig, StreamTarget, TermColor, TimestampFormat, DEFAULT_LEVEL_NAMES,
    MAX_PRETTY_PRINT_SPACE,
};
pub use crate::sinks::{ConsoleChannel, ConsoleSink, FileSink, MemoryHandle, MemorySink, NullSink};
