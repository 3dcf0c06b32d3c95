use std::io::Write;

use image::{ImageBuffer, Rgb};
use tracing::debug;

use crate::capture_pipeline::common::error::{CaptureError, Result};
use crate::capture_pipeline::decode::types::{ChannelPlane, NormalizedImage};
use crate::capture_pipeline::sink::writer::ImageWriter;

/// Export sink that writes captures as 8-bit PNG files.
///
/// Each channel plane is stretched so its own brightest sample maps to
/// 255, which keeps dim console captures visible in the exported file.
/// The interactive display path does not apply this stretch.
pub struct PngWriter;

impl PngWriter {
    fn quantize(plane: &ChannelPlane) -> Vec<u8> {
        let max = plane.max();
        if max == 0.0 {
            return vec![0; plane.samples.len()];
        }

        plane
            .samples
            .iter()
            .map(|&v| (v / max * 255.0) as u8)
            .collect()
    }
}

impl ImageWriter for PngWriter {
    fn write_image(&self, image: &NormalizedImage, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding {}x{} PNG", image.side, image.side);

        let red = Self::quantize(image.red());
        let green = Self::quantize(image.green());
        let blue = Self::quantize(image.blue());

        let mut pixels = Vec::with_capacity(red.len() * 3);
        for i in 0..red.len() {
            pixels.extend_from_slice(&[red[i], green[i], blue[i]]);
        }

        let side = image.side as u32;
        let buffer: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_vec(side, side, pixels)
            .ok_or_else(|| {
                CaptureError::ExportError(format!(
                    "plane size does not match {side}x{side} image"
                ))
            })?;

        let mut encoded = Vec::new();
        buffer
            .write_to(
                &mut std::io::Cursor::new(&mut encoded),
                image::ImageFormat::Png,
            )
            .map_err(|e| CaptureError::ExportError(e.to_string()))?;

        output.write_all(&encoded)?;

        debug!("PNG encoding complete");
        Ok(())
    }
}
