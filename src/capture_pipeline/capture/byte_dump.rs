//! Reader for binary byte dumps (headerless interleaved RGB888 frames).

use crate::capture_pipeline::capture::source::CaptureSource;
use crate::capture_pipeline::capture::types::PackedCapture;
use crate::capture_pipeline::common::error::Result;

pub struct ByteDumpSource;

impl CaptureSource for ByteDumpSource {
    fn read_capture(&self, data: &[u8]) -> Result<PackedCapture> {
        Ok(PackedCapture::Bytes(data.to_vec()))
    }
}
