//! In-memory sinks

use crate::core::{LogLevel, Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Discards output; the stream only formats and records `last_output`
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl Sink for NullSink {
    fn write(&mut self, _level: LogLevel, _text: &str) -> Result<()> {
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}

type Records = Arc<Mutex<Vec<(LogLevel, String)>>>;

/// Keeps every written entry in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Records,
}

/// Read access to the entries a [`MemorySink`] has collected
#[derive(Debug, Clone)]
pub struct MemoryHandle {
    records: Records,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> MemoryHandle {
        MemoryHandle {
            records: Arc::clone(&self.records),
        }
    }
}

impl MemoryHandle {
    pub fn records(&self) -> Vec<(LogLevel, String)> {
        self.records.lock().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.records.lock().iter().map(|(_, text)| text.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&mut self, level: LogLevel, text: &str) -> Result<()> {
        self.records.lock().push((level, text.to_string()));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
