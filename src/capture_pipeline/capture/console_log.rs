//! Reader for console capture dumps.
//!
//! The firmware prints small captures on the UART console as hex byte
//! tokens, three per line (`0x12 0x34 0x56`). This reader parses such a
//! log back into the flat byte buffer the camera sent.

use tracing::debug;

use crate::capture_pipeline::capture::source::CaptureSource;
use crate::capture_pipeline::capture::types::PackedCapture;
use crate::capture_pipeline::common::error::{CaptureError, Result};

pub struct ConsoleLogSource;

impl CaptureSource for ConsoleLogSource {
    /// Parses every whitespace-separated token as a hex byte. The `0x`
    /// prefix the firmware prints is optional; blank lines are skipped.
    fn read_capture(&self, data: &[u8]) -> Result<PackedCapture> {
        let text = std::str::from_utf8(data)
            .map_err(|e| CaptureError::SourceError(format!("console log is not UTF-8: {e}")))?;

        let mut bytes = Vec::new();
        for token in text.split_whitespace() {
            let digits = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token);

            let value = u8::from_str_radix(digits, 16).map_err(|_| {
                CaptureError::SourceError(format!("invalid hex byte token {token:?} in console log"))
            })?;
            bytes.push(value);
        }

        debug!("Parsed {} capture bytes from console log", bytes.len());

        Ok(PackedCapture::Bytes(bytes))
    }
}
