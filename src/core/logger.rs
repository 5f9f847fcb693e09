//! Main logger implementation

use super::{
    error::Result,
    log_arg::{render_message, LogArg},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    stream::{OutputStream, Stream},
};
use chrono::Utc;
use std::fmt;
use std::sync::Arc;

/// A named log channel with a level threshold and an ordered set of streams
///
/// Every accepted call is rendered once and written to each stream in the
/// order the streams were added, all with the same timestamp.
///
/// # Example
/// ```
/// use justlog::prelude::*;
/// use std::sync::Arc;
///
/// let stream = Arc::new(OutputStream::detached(false));
/// let logger = Logger::with_stream("db", LogLevel::Warning, stream.clone());
///
/// logger.info(&["ignored".into()]).error(&["lost connection".into()]);
/// assert!(stream.last_output().ends_with("[error] [db]  lost connection"));
/// ```
pub struct Logger {
    name: String,
    min_level: LogLevel,
    streams: Vec<Arc<dyn Stream>>,
    pretty_print_space: Option<usize>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    pub const LEVEL_DEBUG: LogLevel = LogLevel::Debug;
    pub const LEVEL_INFO: LogLevel = LogLevel::Info;
    pub const LEVEL_WARNING: LogLevel = LogLevel::Warning;
    pub const LEVEL_ERROR: LogLevel = LogLevel::Error;
    pub const LEVEL_CRITICAL: LogLevel = LogLevel::Critical;
    pub const LEVEL_FATAL: LogLevel = LogLevel::Fatal;

    /// Logger at the ERROR threshold writing to a coloured console stream
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_stream(name, LogLevel::default(), Arc::new(OutputStream::console()))
    }

    #[must_use]
    pub fn with_stream(
        name: impl Into<String>,
        min_level: LogLevel,
        stream: Arc<dyn Stream>,
    ) -> Self {
        Self {
            name: name.into(),
            min_level,
            streams: vec![stream],
            pretty_print_space: None,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn set_min_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    pub fn pretty_print_space(&self) -> Option<usize> {
        self.pretty_print_space
    }

    pub fn streams(&self) -> &[Arc<dyn Stream>] {
        &self.streams
    }

    /// Append a stream to the end of the dispatch order
    ///
    /// The same stream may be added more than once, or to several loggers.
    pub fn add_stream(&mut self, stream: Arc<dyn Stream>) {
        self.streams.push(stream);
    }

    #[inline]
    pub fn is_min_level(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Filter, render and fan out one log call
    ///
    /// A stream that fails or panics is reported on stderr and skipped; the
    /// remaining streams still receive the entry.
    pub fn output(&self, level: LogLevel, args: &[LogArg]) {
        if !self.is_min_level(level) {
            self.metrics.record_filtered();
            return;
        }

        let message = render_message(args, self.pretty_print_space);
        let time = Utc::now();

        for (idx, stream) in self.streams.iter().enumerate() {
            let write_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                stream.write(level, &self.name, &message, time, args)
            }));

            match write_result {
                Ok(Ok(_)) => {
                    self.metrics.record_delivered();
                }
                Ok(Err(e)) => {
                    eprintln!(
                        "[LOGGER ERROR] Stream #{} ({}) failed: {}",
                        idx,
                        stream.label(),
                        e
                    );
                    self.metrics.record_failed();
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Stream #{} ({}) panicked: {}. \
                         Other streams continue to function.",
                        idx,
                        stream.label(),
                        panic_msg
                    );
                    self.metrics.record_failed();
                }
            }
        }
    }

    #[inline]
    pub fn log(&self, level: LogLevel, args: &[LogArg]) -> &Self {
        self.output(level, args);
        self
    }

    #[inline]
    pub fn debug(&self, args: &[LogArg]) -> &Self {
        self.log(LogLevel::Debug, args)
    }

    #[inline]
    pub fn info(&self, args: &[LogArg]) -> &Self {
        self.log(LogLevel::Info, args)
    }

    #[inline]
    pub fn warning(&self, args: &[LogArg]) -> &Self {
        self.log(LogLevel::Warning, args)
    }

    #[inline]
    pub fn error(&self, args: &[LogArg]) -> &Self {
        self.log(LogLevel::Error, args)
    }

    #[inline]
    pub fn crit(&self, args: &[LogArg]) -> &Self {
        self.log(LogLevel::Critical, args)
    }

    #[inline]
    pub fn fatal(&self, args: &[LogArg]) -> &Self {
        self.log(LogLevel::Fatal, args)
    }

    /// Flush every stream's sink, stopping at the first failure
    pub fn flush(&self) -> Result<()> {
        for stream in &self.streams {
            stream.flush()?;
        }
        Ok(())
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("min_level", &self.min_level)
            .field(
                "streams",
                &self.streams.iter().map(|s| s.label()).collect::<Vec<_>>(),
            )
            .field("pretty_print_space", &self.pretty_print_space)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use justlog::prelude::*;
///
/// let logger = Logger::builder("worker")
///     .min_level(LogLevel::Info)
///     .stream(OutputStream::detached(false))
///     .pretty_print_space(2)
///     .build();
///
/// assert!(logger.is_min_level(LogLevel::Info));
/// assert_eq!(logger.streams().len(), 1);
/// ```
pub struct LoggerBuilder {
    name: String,
    min_level: LogLevel,
    streams: Vec<Arc<dyn Stream>>,
    pretty_print_space: Option<usize>,
}

impl LoggerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_level: LogLevel::default(),
            streams: Vec::new(),
            pretty_print_space: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn stream<S: Stream + 'static>(mut self, stream: S) -> Self {
        self.streams.push(Arc::new(stream));
        self
    }

    /// Add a stream that is also held elsewhere
    #[must_use = "builder methods return a new value"]
    pub fn shared_stream(mut self, stream: Arc<dyn Stream>) -> Self {
        self.streams.push(stream);
        self
    }

    /// Indentation for JSON arguments; `0` keeps them compact
    #[must_use = "builder methods return a new value"]
    pub fn pretty_print_space(mut self, space: usize) -> Self {
        self.pretty_print_space = Some(space);
        self
    }

    /// Build the Logger, falling back to a console stream if none was added
    pub fn build(self) -> Logger {
        let mut streams = self.streams;
        if streams.is_empty() {
            streams.push(Arc::new(OutputStream::console()));
        }

        Logger {
            name: self.name,
            min_level: self.min_level,
            streams,
            pretty_print_space: self.pretty_print_space,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LoggerError;
    use chrono::DateTime;
    use serde_json::json;

    fn quiet_stream() -> Arc<OutputStream> {
        Arc::new(OutputStream::detached(false))
    }

    struct BrokenStream;

    impl Stream for BrokenStream {
        fn write(
            &self,
            _level: LogLevel,
            _name: &str,
            _message: &str,
            _time: DateTime<Utc>,
            _args: &[LogArg],
        ) -> Result<String> {
            Err(LoggerError::writer("broken pipe"))
        }

        fn last_output(&self) -> String {
            String::new()
        }

        fn label(&self) -> &str {
            "broken"
        }
    }

    struct PanickingStream;

    impl Stream for PanickingStream {
        fn write(
            &self,
            _level: LogLevel,
            _name: &str,
            _message: &str,
            _time: DateTime<Utc>,
            _args: &[LogArg],
        ) -> Result<String> {
            panic!("stream exploded");
        }

        fn last_output(&self) -> String {
            String::new()
        }

        fn label(&self) -> &str {
            "panicking"
        }
    }

    #[test]
    fn test_is_min_level() {
        let logger = Logger::with_stream("name", LogLevel::Error, quiet_stream());
        for level in LogLevel::ALL {
            assert_eq!(logger.is_min_level(level), level >= LogLevel::Error);
        }
    }

    #[test]
    fn test_filtering_leaves_streams_untouched() {
        let stream = quiet_stream();
        let logger = Logger::with_stream("name", LogLevel::Error, stream.clone());

        logger.debug(&["test".into()]);
        assert_eq!(stream.last_output(), "");
        logger.info(&["test".into()]);
        assert_eq!(stream.last_output(), "");
        logger.warning(&["test".into()]);
        assert_eq!(stream.last_output(), "");
        assert_eq!(logger.metrics().filtered_count(), 3);

        logger.error(&["test".into()]);
        assert_ne!(stream.last_output(), "");
        logger.crit(&["test".into()]);
        assert!(stream.last_output().contains("[critical]"));
        logger.fatal(&["test".into()]);
        assert!(stream.last_output().contains("[fatal]"));
        assert!(!stream.color_enabled());
        assert_eq!(logger.metrics().delivered_count(), 3);
    }

    #[test]
    fn test_leveled_methods_chain() {
        let logger = Logger::with_stream("name", LogLevel::Debug, quiet_stream());
        let returned = logger.debug(&[]).info(&[]).warning(&[]).error(&[]).crit(&[]).fatal(&[]);
        assert!(std::ptr::eq(returned, &logger));
    }

    #[test]
    fn test_fan_out_same_output() {
        let first = quiet_stream();
        let second = quiet_stream();
        let mut logger = Logger::with_stream("name", LogLevel::Error, first.clone());
        logger.add_stream(second.clone());

        logger.error(&["test".into()]);
        assert_ne!(first.last_output(), "");
        assert_eq!(first.last_output(), second.last_output());

        logger.info(&["testing".into()]);
        assert_eq!(first.last_output(), second.last_output());
    }

    #[test]
    fn test_pretty_print_objects() {
        let stream = Arc::new(
            OutputStream::builder()
                .date_formatter(|_, _| String::new())
                .build()
                .unwrap(),
        );
        let logger = Logger::builder("name")
            .shared_stream(stream.clone())
            .pretty_print_space(0)
            .build();

        logger.error(&["Test".into(), json!({"value": 255}).into()]);
        assert_eq!(
            stream.last_output(),
            "\x1b[0m\x1b[31m [error] [name]  Test {\"value\":255}\x1b[0m"
        );
    }

    #[test]
    fn test_failing_stream_does_not_block_others() {
        let healthy = quiet_stream();
        let mut logger = Logger::with_stream("name", LogLevel::Debug, Arc::new(BrokenStream));
        logger.add_stream(Arc::new(PanickingStream));
        logger.add_stream(healthy.clone());

        logger.warning(&["still delivered".into()]);
        assert!(healthy.last_output().ends_with("[warning] [name]  still delivered"));
        assert_eq!(logger.metrics().failed_count(), 2);
        assert_eq!(logger.metrics().delivered_count(), 1);
    }

    #[test]
    fn test_shared_stream_between_loggers() {
        let shared = quiet_stream();
        let a = Logger::with_stream("a", LogLevel::Debug, shared.clone());
        let b = Logger::with_stream("b", LogLevel::Debug, shared.clone());

        a.info(&["from a".into()]);
        assert!(shared.last_output().contains("[a]"));
        b.info(&["from b".into()]);
        assert!(shared.last_output().contains("[b]"));
    }

    #[test]
    fn test_builder_defaults() {
        let logger = Logger::builder("svc").build();
        assert_eq!(logger.name(), "svc");
        assert_eq!(logger.min_level(), LogLevel::Error);
        assert_eq!(logger.streams().len(), 1);
        assert_eq!(logger.streams()[0].label(), "console");
        assert_eq!(logger.pretty_print_space(), None);
    }

    #[test]
    fn test_level_constants() {
        assert_eq!(Logger::LEVEL_DEBUG.ordinal(), 0);
        assert_eq!(Logger::LEVEL_INFO.ordinal(), 1);
        assert_eq!(Logger::LEVEL_WARNING.ordinal(), 2);
        assert_eq!(Logger::LEVEL_ERROR.ordinal(), 3);
        assert_eq!(Logger::LEVEL_CRITICAL.ordinal(), 4);
        assert_eq!(Logger::LEVEL_FATAL.ordinal(), 5);
    }

    #[test]
    fn test_set_min_level() {
        let stream = quiet_stream();
        let mut logger = Logger::with_stream("name", LogLevel::Error, stream.clone());
        logger.set_min_level(LogLevel::Debug);
        logger.debug(&["now visible".into()]);
        assert!(stream.last_output().contains("[debug]"));
    }
}
