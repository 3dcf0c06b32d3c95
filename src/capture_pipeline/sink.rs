//! Output sink module
//!
//! This module provides the two ends a decoded capture can go to: an
//! image file writer and an interactive window.

mod display;
mod png_writer;
mod types;
mod window_sink;
mod writer;


pub use display::DisplaySink;
pub use png_writer::PngWriter;
pub use types::{ViewConfig, ViewConfigBuilder};
pub use window_sink::WindowSink;
pub use writer::ImageWriter;
