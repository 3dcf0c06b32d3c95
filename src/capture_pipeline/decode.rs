//! Capture decoding module
//!
//! Pure transforms from packed captures to channel planes: bit-level
//! unpacking, normalization, and plane ordering. Nothing in here touches
//! a file or a window.

pub mod format;
pub mod types;
mod unpacker;


pub use format::{CaptureFormat, RGB565_SIDE, RGB888_SIDE};
pub use types::{ChannelOrder, ChannelPlane, NormalizedImage, RawChannels};
pub use unpacker::{normalize, pack_rgb565, unpack};
