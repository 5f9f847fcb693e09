//! Core logger types and traits

pub mod color_picker;
pub mod color_string;
pub mod config;
pub mod error;
pub mod log_arg;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod sink;
pub mod stream;
pub mod timestamp;

pub use color_picker::{ColorPicker, DefaultColorPicker, PlainColorPicker};
pub use color_string::{ColorString, TermColor};
pub use config::{LoggerConfig, StreamConfig, StreamTarget};
pub use error::{LoggerError, Result};
pub use log_arg::{render_message, LogArg, MAX_PRETTY_PRINT_SPACE};
pub use log_level::{LogLevel, DEFAULT_LEVEL_NAMES};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use sink::Sink;
pub use stream::{DateFormatterFn, MessageFormatterFn, OutputStream, OutputStreamBuilder, Stream};
pub use timestamp::TimestampFormat;
