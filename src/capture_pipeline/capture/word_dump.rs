//! Reader for binary word dumps.
//!
//! The host-side capture tool stores RGB565 frames as a flat run of
//! little-endian 16-bit words with no header or padding.

use tracing::debug;

use crate::capture_pipeline::capture::source::CaptureSource;
use crate::capture_pipeline::capture::types::PackedCapture;
use crate::capture_pipeline::common::error::{CaptureError, Result};

pub struct WordDumpSource;

impl CaptureSource for WordDumpSource {
    fn read_capture(&self, data: &[u8]) -> Result<PackedCapture> {
        if data.len() % 2 != 0 {
            return Err(CaptureError::SourceError(format!(
                "word dump has odd length {} bytes",
                data.len()
            )));
        }

        let words: Vec<u16> = data
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();

        debug!("Read {} capture words", words.len());

        Ok(PackedCapture::Words(words))
    }
}
