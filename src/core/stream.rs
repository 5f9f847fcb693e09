//! Output streams: formatting and dispatch to a sink
//!
//! An [`OutputStream`] turns `(level, name, message, time, args)` into a line
//! of text, remembers it as its last output, and hands it to its [`Sink`].
//! The default line is
//!
//! ```text
//! <date> [<level name>] [<logger name>] <message>
//! ```
//!
//! wrapped in the colour codes chosen by the stream's [`ColorPicker`]. A
//! custom message formatter replaces the whole default layout.
//!
//! Each stream serializes its own writes: buffer reset, formatting, the
//! `last_output` update and the sink write happen under one lock, so a stream
//! shared between loggers or threads never interleaves two entries.

use super::{
    color_picker::{ColorPicker, DefaultColorPicker},
    color_string::ColorString,
    error::{LoggerError, Result},
    log_arg::LogArg,
    log_level::{LogLevel, DEFAULT_LEVEL_NAMES},
    sink::Sink,
    timestamp::TimestampFormat,
};
use crate::sinks::{ConsoleSink, FileSink, MemoryHandle, MemorySink, NullSink};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Custom date formatter; receives the owning stream
pub type DateFormatterFn = Arc<dyn Fn(&DateTime<Utc>, &OutputStream) -> String + Send + Sync>;

/// Custom message formatter; receives the owning stream and the raw arguments
pub type MessageFormatterFn = Arc<
    dyn Fn(LogLevel, &str, &str, &DateTime<Utc>, &[LogArg], &OutputStream) -> String + Send + Sync,
>;

/// A log destination the [`Logger`](crate::Logger) fans out to
pub trait Stream: Send + Sync {
    /// Format an entry, perform the physical write, and return the formatted text
    fn write(
        &self,
        level: LogLevel,
        name: &str,
        message: &str,
        time: DateTime<Utc>,
        args: &[LogArg],
    ) -> Result<String>;

    /// The most recently formatted entry, empty before the first write
    fn last_output(&self) -> String;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn label(&self) -> &str;
}

struct StreamState {
    buffer: ColorString,
    last_output: String,
    sink: Box<dyn Sink>,
}

pub struct OutputStream {
    label: String,
    levels: Vec<String>,
    color: bool,
    timestamp_format: TimestampFormat,
    date_formatter: Option<DateFormatterFn>,
    message_formatter: Option<MessageFormatterFn>,
    color_picker: Box<dyn ColorPicker>,
    state: Mutex<StreamState>,
}

impl OutputStream {
    #[must_use]
    pub fn builder() -> OutputStreamBuilder {
        OutputStreamBuilder::new()
    }

    /// Coloured stream writing to stdout/stderr; the default for a logger
    pub fn console() -> Self {
        Self::builder().sink(ConsoleSink::new()).assemble()
    }

    /// Console stream with colour enabled only when the environment allows it
    ///
    /// Honors `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE` through `colored`.
    pub fn console_auto_color() -> Self {
        let color = colored::control::SHOULD_COLORIZE.should_colorize();
        Self::builder().color(color).sink(ConsoleSink::new()).assemble()
    }

    /// Stream that only formats; nothing is physically written
    pub fn detached(color: bool) -> Self {
        Self::builder().color(color).sink(NullSink).assemble()
    }

    /// Uncoloured stream collecting its output in memory
    pub fn memory() -> (Self, MemoryHandle) {
        let sink = MemorySink::new();
        let handle = sink.handle();
        (Self::builder().color(false).sink(sink).assemble(), handle)
    }

    /// Uncoloured stream appending to a file
    pub fn file(path: impl Into<PathBuf>) -> Result<Self> {
        let sink = FileSink::new(path)?;
        Ok(Self::builder().color(false).sink(sink).assemble())
    }

    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    /// Display name for a level, empty when the table has no entry for it
    pub fn level_name(&self, level: LogLevel) -> &str {
        self.levels
            .get(level.ordinal() as usize)
            .map(String::as_str)
            .unwrap_or("")
    }

    #[inline]
    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    pub fn has_message_formatter(&self) -> bool {
        self.message_formatter.is_some()
    }

    /// Format the timestamp segment
    pub fn date_formatter(&self, time: &DateTime<Utc>) -> String {
        match self.date_formatter {
            Some(ref formatter) => formatter(time, self),
            None => self.timestamp_format.format(time),
        }
    }

    /// Apply this stream's colour for `level` to its buffer
    pub fn color_picker(&self, level: LogLevel) {
        let mut state = self.state.lock();
        self.color_picker.pick(level, &mut state.buffer);
    }

    /// Run the default layout regardless of any custom message formatter
    ///
    /// Only the returned string is produced; `last_output` and the sink are
    /// left alone.
    pub fn format_default(
        &self,
        level: LogLevel,
        name: &str,
        message: &str,
        time: &DateTime<Utc>,
    ) -> String {
        let date = self.date_formatter(time);
        let mut state = self.state.lock();
        self.format_locked(&mut state, level, name, message, &date)
    }

    /// Write with the current time and no raw arguments
    pub fn write_at_now(&self, level: LogLevel, name: &str, message: &str) -> Result<String> {
        Stream::write(self, level, name, message, Utc::now(), &[])
    }

    fn format_locked(
        &self,
        state: &mut StreamState,
        level: LogLevel,
        name: &str,
        message: &str,
        date: &str,
    ) -> String {
        let buffer = &mut state.buffer;
        buffer.clear().reset();
        self.color_picker.pick(level, buffer);
        buffer.append(&format!(
            "{} [{}] [{}] {}",
            date,
            self.level_name(level),
            name,
            message
        ));
        buffer.reset();
        buffer.to_string()
    }
}

impl Stream for OutputStream {
    fn write(
        &self,
        level: LogLevel,
        name: &str,
        message: &str,
        time: DateTime<Utc>,
        args: &[LogArg],
    ) -> Result<String> {
        // Formatters run unlocked so they may call back into the stream
        let (output, mut state) = match self.message_formatter {
            Some(ref formatter) => {
                let output = formatter(level, name, message, &time, args, self);
                (output, self.state.lock())
            }
            None => {
                let date = self.date_formatter(&time);
                let mut state = self.state.lock();
                let output = self.format_locked(&mut state, level, name, message, &date);
                (output, state)
            }
        };

        state.last_output = output.clone();
        state.sink.write(level, &output)?;
        Ok(output)
    }

    fn last_output(&self) -> String {
        self.state.lock().last_output.clone()
    }

    fn flush(&self) -> Result<()> {
        self.state.lock().sink.flush()
    }

    fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for OutputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputStream")
            .field("label", &self.label)
            .field("levels", &self.levels)
            .field("color", &self.color)
            .field("timestamp_format", &self.timestamp_format)
            .field("custom_date_formatter", &self.date_formatter.is_some())
            .field("custom_message_formatter", &self.message_formatter.is_some())
            .finish()
    }
}

/// Builder for [`OutputStream`]
///
/// # Example
/// ```
/// use justlog::prelude::*;
///
/// let stream = OutputStream::builder()
///     .color(false)
///     .levels(["D", "I", "W", "E", "C", "F"])
///     .date_formatter(|_time, _stream| "now".to_string())
///     .build()
///     .unwrap();
///
/// let out = stream.write_at_now(LogLevel::Warning, "app", "disk low").unwrap();
/// assert_eq!(out, "now [W] [app] disk low");
/// ```
pub struct OutputStreamBuilder {
    label: Option<String>,
    levels: Option<Vec<String>>,
    color: bool,
    timestamp_format: TimestampFormat,
    date_formatter: Option<DateFormatterFn>,
    message_formatter: Option<MessageFormatterFn>,
    color_picker: Option<Box<dyn ColorPicker>>,
    sink: Option<Box<dyn Sink>>,
}

impl OutputStreamBuilder {
    pub fn new() -> Self {
        Self {
            label: None,
            levels: None,
            color: true,
            timestamp_format: TimestampFormat::default(),
            date_formatter: None,
            message_formatter: None,
            color_picker: None,
            sink: None,
        }
    }

    /// Name used in diagnostics; defaults to the sink's name
    #[must_use = "builder methods return a new value"]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Level display names, indexed by level ordinal; at least six entries
    #[must_use = "builder methods return a new value"]
    pub fn levels<I, S>(mut self, levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.levels = Some(levels.into_iter().map(Into::into).collect());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Preset date format; ignored when a custom date formatter is set
    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn date_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&DateTime<Utc>, &OutputStream) -> String + Send + Sync + 'static,
    {
        self.date_formatter = Some(Arc::new(formatter));
        self
    }

    /// Replace the default layout entirely, colours included
    #[must_use = "builder methods return a new value"]
    pub fn message_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(LogLevel, &str, &str, &DateTime<Utc>, &[LogArg], &OutputStream) -> String
            + Send
            + Sync
            + 'static,
    {
        self.message_formatter = Some(Arc::new(formatter));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn color_picker<P: ColorPicker + 'static>(mut self, picker: P) -> Self {
        self.color_picker = Some(Box::new(picker));
        self
    }

    /// Physical destination; without one the stream only formats
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn boxed_sink(mut self, sink: Box<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn build(self) -> Result<OutputStream> {
        if let Some(ref levels) = self.levels {
            if levels.len() < DEFAULT_LEVEL_NAMES.len() {
                return Err(LoggerError::config(
                    "OutputStream",
                    format!(
                        "expected at least {} level names, got {}",
                        DEFAULT_LEVEL_NAMES.len(),
                        levels.len()
                    ),
                ));
            }
        }
        Ok(self.assemble())
    }

    fn assemble(self) -> OutputStream {
        let sink = self.sink.unwrap_or_else(|| Box::new(NullSink));
        let levels = self
            .levels
            .unwrap_or_else(|| DEFAULT_LEVEL_NAMES.iter().map(|s| s.to_string()).collect());

        OutputStream {
            label: self.label.unwrap_or_else(|| sink.name().to_string()),
            levels,
            color: self.color,
            timestamp_format: self.timestamp_format,
            date_formatter: self.date_formatter,
            message_formatter: self.message_formatter,
            color_picker: self
                .color_picker
                .unwrap_or_else(|| Box::new(DefaultColorPicker)),
            state: Mutex::new(StreamState {
                buffer: ColorString::new(self.color),
                last_output: String::new(),
                sink,
            }),
        }
    }
}

impl Default for OutputStreamBuilder {
    fn default() -> Self {
        Self::new()
    }
}
