//! Appender implementations

pub mod callback;
pub mod console;
pub mod memory;

pub use callback::FnAppender;
pub use console::{ConsoleAppender, ConsoleTarget};
pub use memory::MemoryAppender;

// Re-export the trait next to its implementations
pub use crate::core::Appender;
