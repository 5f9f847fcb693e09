//! Declarative logger configuration
//!
//! Lets an application describe its loggers in JSON (or anything serde can
//! read) instead of wiring streams by hand. Custom formatters and colour
//! pickers are code, so they stay on the builder API.

use super::{
    error::{LoggerError, Result},
    log_level::LogLevel,
    logger::Logger,
    stream::OutputStream,
    timestamp::TimestampFormat,
};
use crate::sinks::{ConsoleSink, FileSink, NullSink};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where a configured stream writes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StreamTarget {
    #[default]
    Console,
    /// Format only
    Null,
    File { path: PathBuf },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    pub target: StreamTarget,
    pub levels: Option<Vec<String>>,
    /// Defaults to colour on for the console, off for everything else
    pub color: Option<bool>,
    pub timestamp_format: TimestampFormat,
}

impl StreamConfig {
    pub fn build(&self) -> Result<OutputStream> {
        let mut builder = OutputStream::builder().timestamp_format(self.timestamp_format.clone());
        if let Some(ref levels) = self.levels {
            builder = builder.levels(levels.iter().cloned());
        }

        let default_color = matches!(self.target, StreamTarget::Console);
        builder = builder.color(self.color.unwrap_or(default_color));

        builder = match self.target {
            StreamTarget::Console => builder.sink(ConsoleSink::new()),
            StreamTarget::Null => builder.sink(NullSink),
            StreamTarget::File { ref path } => builder.sink(FileSink::new(path.clone())?),
        };

        builder.build()
    }
}

/// # Example
/// ```
/// use justlog::{LoggerConfig, LogLevel};
///
/// let config = LoggerConfig::from_json(r#"{
///     "name": "api",
///     "min_level": "info",
///     "pretty_print_space": 2,
///     "streams": [{ "target": { "type": "null" }, "color": false }]
/// }"#).unwrap();
///
/// let logger = config.build().unwrap();
/// assert_eq!(logger.min_level(), LogLevel::Info);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub name: String,
    #[serde(default)]
    pub min_level: LogLevel,
    #[serde(default)]
    pub pretty_print_space: Option<usize>,
    /// Empty means a single console stream
    #[serde(default)]
    pub streams: Vec<StreamConfig>,
}

impl LoggerConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_level: LogLevel::default(),
            pretty_print_space: None,
            streams: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        if config.name.is_empty() {
            return Err(LoggerError::config("LoggerConfig", "logger name must not be empty"));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn build(&self) -> Result<Logger> {
        let mut builder = Logger::builder(self.name.clone()).min_level(self.min_level);
        if let Some(space) = self.pretty_print_space {
            builder = builder.pretty_print_space(space);
        }
        for stream in &self.streams {
            builder = builder.stream(stream.build()?);
        }
        Ok(builder.build())
    }
}
