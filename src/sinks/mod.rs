//! Sink implementations

pub mod console;
pub mod file;
pub mod memory;

pub use console::{ConsoleChannel, ConsoleSink};
pub use file::FileSink;
pub use memory::{MemoryHandle, MemorySink, NullSink};

pub use crate::core::Sink;
