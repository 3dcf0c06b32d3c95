//! Capture reading module
//!
//! This module provides readers for the different on-disk shapes a camera
//! capture arrives in: binary word dumps, binary byte dumps, and console
//! log dumps.

mod byte_dump;
mod console_log;
mod source;
pub mod types;
mod word_dump;


pub use byte_dump::ByteDumpSource;
pub use console_log::ConsoleLogSource;
pub use source::CaptureSource;
pub use types::PackedCapture;
pub use word_dump::WordDumpSource;
