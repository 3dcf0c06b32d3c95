use crate::capture_pipeline::capture::types::PackedCapture;
use crate::capture_pipeline::common::error::Result;

pub trait CaptureSource {
    fn read_capture(&self, data: &[u8]) -> Result<PackedCapture>;
}
