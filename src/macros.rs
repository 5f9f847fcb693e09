//! Variadic logging macros.
//!
//! Each macro converts its arguments to [`LogArg`](crate::LogArg) values in
//! order and passes them to the matching leveled method, so primitives and
//! JSON values can be mixed freely.
//!
//! # Examples
//!
//! ```
//! use justlog::prelude::*;
//! use justlog::{info, warning};
//! use serde_json::json;
//!
//! let logger = Logger::builder("server")
//!     .min_level(LogLevel::Info)
//!     .stream(OutputStream::detached(false))
//!     .build();
//!
//! info!(logger, "Server started");
//! warning!(logger, "Slow request", json!({"path": "/api", "ms": 1200}));
//! ```

/// Build a `Vec<LogArg>` from a list of values.
///
/// ```
/// use justlog::{log_args, LogArg};
///
/// let args = log_args!["retry", 3, true];
/// assert_eq!(args[1], LogArg::Int(3));
/// ```
#[macro_export]
macro_rules! log_args {
    ($($arg:expr),* $(,)?) => {
        ::std::vec![$($crate::LogArg::from($arg)),*]
    };
}

/// Log at an explicit level.
///
/// ```
/// # use justlog::prelude::*;
/// # let logger = Logger::builder("doc").stream(OutputStream::detached(false)).build();
/// use justlog::log;
/// log!(logger, LogLevel::Error, "Error code:", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $logger.log($level, &[$($crate::LogArg::from($arg)),*])
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.debug(&[$($crate::LogArg::from($arg)),*])
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.info(&[$($crate::LogArg::from($arg)),*])
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.warning(&[$($crate::LogArg::from($arg)),*])
    };
}

/// Log an error-level message.
///
/// ```
/// # use justlog::prelude::*;
/// # let logger = Logger::builder("doc").stream(OutputStream::detached(false)).build();
/// use justlog::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code:", 500, "message:", "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.error(&[$($crate::LogArg::from($arg)),*])
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! crit {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.crit(&[$($crate::LogArg::from($arg)),*])
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.fatal(&[$($crate::LogArg::from($arg)),*])
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogArg, LogLevel, Logger, OutputStream, Stream};
    use serde_json::json;
    use std::sync::Arc;

    fn logger_with_stream(min_level: LogLevel) -> (Logger, Arc<OutputStream>) {
        let stream = Arc::new(OutputStream::detached(false));
        (Logger::with_stream("macros", min_level, stream.clone()), stream)
    }

    #[test]
    fn test_log_args_macro() {
        let args = log_args!["a", 1u8, 2.5_f64, json!(null)];
        assert_eq!(
            args,
            vec![
                LogArg::Str("a".to_string()),
                LogArg::UInt(1),
                LogArg::Float(2.5),
                LogArg::Json(serde_json::Value::Null),
            ]
        );
        let empty: Vec<LogArg> = log_args![];
        assert!(empty.is_empty());
    }

    #[test]
    fn test_log_macro() {
        let (logger, stream) = logger_with_stream(LogLevel::Debug);
        log!(logger, LogLevel::Info, "Formatted:", 42);
        assert!(stream.last_output().ends_with("[info] [macros]  Formatted: 42"));
    }

    #[test]
    fn test_leveled_macros() {
        let (logger, stream) = logger_with_stream(LogLevel::Debug);

        debug!(logger, "Count:", 5);
        assert!(stream.last_output().ends_with("[debug] [macros]  Count: 5"));
        info!(logger, "Items:", 100);
        assert!(stream.last_output().ends_with("[info] [macros]  Items: 100"));
        warning!(logger, "Retry", 1, "of", 3);
        assert!(stream.last_output().ends_with("[warning] [macros]  Retry 1 of 3"));
        error!(logger, "Code:", 500,);
        assert!(stream.last_output().ends_with("[error] [macros]  Code: 500"));
        crit!(logger, json!({"disk": "full"}));
        assert!(stream.last_output().ends_with("[critical] [macros]  {\"disk\":\"full\"}"));
        fatal!(logger);
        assert!(stream.last_output().ends_with("[fatal] [macros] "));
    }

    #[test]
    fn test_macros_respect_threshold() {
        let (logger, stream) = logger_with_stream(LogLevel::Fatal);
        error!(logger, "hidden");
        assert_eq!(stream.last_output(), "");
    }
}
