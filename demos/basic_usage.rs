//! Basic logger usage example
//!
//! Demonstrates leveled console logging, extra streams and custom formatters.
//!
//! Run with: cargo run --example basic_usage

use justlog::prelude::*;
use justlog::{crit, debug, error, fatal, info, warning};
use serde_json::json;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== justlog - Basic Usage Example ===\n");

    // Coloured console stream, debug messages filtered out
    let mut logger = Logger::with_stream(
        "Example Logger",
        LogLevel::Info,
        Arc::new(OutputStream::console_auto_color()),
    );

    println!("1. Logging at different levels:");
    debug!(logger, "Debug message (hidden)");
    info!(logger, "Info message");
    warning!(logger, "Warning message");
    error!(logger, "Error message", json!({"code": 500}));
    crit!(logger, "Critical message");
    fatal!(logger, "Fatal message");

    println!("\n2. Adding a second stream with a custom layout:");
    let (memory, handle) = OutputStream::memory();
    let custom = OutputStream::builder()
        .message_formatter(|level, name, message, time, _args, stream| {
            format!(
                "{} {} <{}>{}",
                stream.date_formatter(time),
                level.to_str().to_uppercase(),
                name,
                message
            )
        })
        .timestamp_format(TimestampFormat::Iso8601)
        .sink(ConsoleSink::new())
        .build()?;
    logger.add_stream(Arc::new(memory));
    logger.add_stream(Arc::new(custom));

    logger
        .info(&["Chained".into(), 1.into()])
        .error(&["calls".into(), 2.into()]);

    println!("\n3. Captured in memory:");
    for line in handle.lines() {
        println!("   {}", line);
    }

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
