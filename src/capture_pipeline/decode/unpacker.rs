//! Packed-pixel unpacking and normalization.
//!
//! The camera ships frames in two packings. RGB565 frames arrive as one
//! 16-bit word per pixel with the channels split across the word the way
//! the sensor bus delivers them:
//!
//! ```text
//! red   = (word & 0x00F8) >> 3                          5 bits
//! blue  = (word & 0x1F00) >> 8                          5 bits
//! green = ((word & 0x0007) << 3) | ((word & 0xE000) >> 13)   6 bits
//! ```
//!
//! RGB888 frames arrive as three interleaved bytes per pixel. Both unpack
//! into [`RawChannels`] and normalize into unit-interval planes; only the
//! scaling rule differs per format.

use tracing::debug;

use crate::capture_pipeline::capture::types::PackedCapture;
use crate::capture_pipeline::common::error::{CaptureError, Result};
use crate::capture_pipeline::decode::format::{CaptureFormat, MAX_5BIT, MAX_6BIT};
use crate::capture_pipeline::decode::types::{
    ChannelOrder, ChannelPlane, NormalizedImage, RawChannels,
};

/// Extract the three raw channel planes from a packed capture.
///
/// Pure bit manipulation, lossless for both packings; the inverse of the
/// RGB565 extraction is [`pack_rgb565`]. A capture whose sample count does
/// not match the format's geometry is rejected whole rather than decoded
/// partially.
pub fn unpack(format: &CaptureFormat, capture: &PackedCapture) -> Result<RawChannels> {
    match (format, capture) {
        (CaptureFormat::Rgb565 { side }, PackedCapture::Words(words)) => {
            unpack_rgb565(*side, words)
        }
        (CaptureFormat::Rgb888 { side }, PackedCapture::Bytes(bytes)) => {
            unpack_rgb888(*side, bytes)
        }
        (CaptureFormat::Rgb565 { .. }, PackedCapture::Bytes(_)) => {
            Err(CaptureError::UnsupportedFormat(
                "RGB565 capture must contain 16-bit words, got bytes".to_string(),
            ))
        }
        (CaptureFormat::Rgb888 { .. }, PackedCapture::Words(_)) => {
            Err(CaptureError::UnsupportedFormat(
                "RGB888 capture must contain bytes, got 16-bit words".to_string(),
            ))
        }
    }
}

fn unpack_rgb565(side: usize, words: &[u16]) -> Result<RawChannels> {
    let expected = side * side;
    if words.len() != expected {
        return Err(CaptureError::FormatError {
            expected,
            actual: words.len(),
        });
    }

    debug!("Unpacking {} RGB565 words", words.len());

    let mut red = Vec::with_capacity(expected);
    let mut green = Vec::with_capacity(expected);
    let mut blue = Vec::with_capacity(expected);

    for &word in words {
        red.push((word & 0x00F8) >> 3);
        blue.push((word & 0x1F00) >> 8);

        let green_high = (word & 0x0007) << 3;
        let green_low = (word & 0xE000) >> 13;
        green.push(green_high | green_low);
    }

    Ok(RawChannels {
        side,
        red,
        green,
        blue,
    })
}

fn unpack_rgb888(side: usize, bytes: &[u8]) -> Result<RawChannels> {
    let expected = 3 * side * side;
    if bytes.len() != expected {
        return Err(CaptureError::FormatError {
            expected,
            actual: bytes.len(),
        });
    }

    debug!("Unpacking {} RGB888 bytes", bytes.len());

    let mut red = Vec::with_capacity(side * side);
    let mut green = Vec::with_capacity(side * side);
    let mut blue = Vec::with_capacity(side * side);

    for pixel in bytes.chunks_exact(3) {
        red.push(u16::from(pixel[0]));
        green.push(u16::from(pixel[1]));
        blue.push(u16::from(pixel[2]));
    }

    Ok(RawChannels {
        side,
        red,
        green,
        blue,
    })
}

/// Re-pack raw channel planes into RGB565 words.
///
/// Exact inverse of the RGB565 unpacking for samples within their channel
/// bit widths; samples wider than 5/6/5 bits have their excess bits
/// dropped.
pub fn pack_rgb565(raw: &RawChannels) -> Vec<u16> {
    raw.red
        .iter()
        .zip(&raw.green)
        .zip(&raw.blue)
        .map(|((&r, &g), &b)| {
            let mut word = (r << 3) & 0x00F8;
            word |= (b << 8) & 0x1F00;
            word |= (g >> 3) & 0x0007;
            word |= (g << 13) & 0xE000;
            word
        })
        .collect()
}

/// Rescale raw channel planes to unit-interval floats.
///
/// RGB565 planes divide by the fixed channel maxima (31/63/31). RGB888
/// planes divide by each channel's own observed maximum, so the brightest
/// sample of every non-empty channel lands on 1.0.
pub fn normalize(format: &CaptureFormat, raw: &RawChannels) -> NormalizedImage {
    let (red, green, blue) = match format {
        CaptureFormat::Rgb565 { .. } => (
            scale_fixed(&raw.red, MAX_5BIT),
            scale_fixed(&raw.green, MAX_6BIT),
            scale_fixed(&raw.blue, MAX_5BIT),
        ),
        CaptureFormat::Rgb888 { .. } => (
            scale_by_max(&raw.red),
            scale_by_max(&raw.green),
            scale_by_max(&raw.blue),
        ),
    };

    let plane = |samples| ChannelPlane {
        side: raw.side,
        samples,
    };

    NormalizedImage {
        side: raw.side,
        planes: [plane(red), plane(green), plane(blue)],
        order: ChannelOrder::Rgb,
    }
}

fn scale_fixed(samples: &[u16], max: u16) -> Vec<f32> {
    samples
        .iter()
        .map(|&v| f32::from(v) / f32::from(max))
        .collect()
}

/// An all-zero plane stays all zero instead of dividing by zero.
fn scale_by_max(samples: &[u16]) -> Vec<f32> {
    let max = samples.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return vec![0.0; samples.len()];
    }

    samples
        .iter()
        .map(|&v| f32::from(v) / f32::from(max))
        .collect()
}
