//! Capture processing pipeline module
//!
//! This module turns raw camera captures into viewable images, with
//! separate modules for capture reading, pixel unpacking, output sinks,
//! and conversion orchestration.

pub mod capture;
pub mod common;
pub mod conversions;
pub mod decode;
pub mod sink;

pub use common::{CaptureError, Result};

pub use capture::{ByteDumpSource, CaptureSource, ConsoleLogSource, PackedCapture, WordDumpSource};

pub use decode::{
    CaptureFormat, ChannelOrder, ChannelPlane, NormalizedImage, RGB565_SIDE, RGB888_SIDE,
    RawChannels, normalize, pack_rgb565, unpack,
};

pub use sink::{DisplaySink, ImageWriter, PngWriter, ViewConfig, ViewConfigBuilder, WindowSink};

pub use conversions::CaptureViewPipeline;
