//! Interactive capture display.
//!
//! Opens a window upscaled from the capture with nearest-neighbour
//! sampling and blocks until the user closes it or presses Escape.

use minifb::{Key, Window, WindowOptions};
use tracing::debug;

use crate::capture_pipeline::common::error::{CaptureError, Result};
use crate::capture_pipeline::decode::types::NormalizedImage;
use crate::capture_pipeline::sink::display::DisplaySink;

fn rgb_pixel(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) << 16 | (g as u32) << 8 | (b as u32)
}

pub struct WindowSink {
    title: String,
    scale: usize,
}

impl WindowSink {
    pub fn new(title: impl Into<String>, scale: usize) -> Self {
        Self {
            title: title.into(),
            scale: scale.max(1),
        }
    }

    fn render(&self, image: &NormalizedImage) -> (usize, Vec<u32>) {
        let out = image.side * self.scale;
        let red = image.red();
        let green = image.green();
        let blue = image.blue();

        let mut framebuffer = vec![0u32; out * out];
        for y in 0..out {
            let row = y / self.scale;
            for x in 0..out {
                let col = x / self.scale;
                framebuffer[y * out + x] = rgb_pixel(
                    (red.get(row, col) * 255.0) as u8,
                    (green.get(row, col) * 255.0) as u8,
                    (blue.get(row, col) * 255.0) as u8,
                );
            }
        }

        (out, framebuffer)
    }
}

impl DisplaySink for WindowSink {
    fn display(&mut self, image: &NormalizedImage) -> Result<()> {
        let (out, framebuffer) = self.render(image);

        debug!(
            "Displaying {}x{} capture at {}x{}",
            image.side, image.side, out, out
        );

        let mut window = Window::new(&self.title, out, out, WindowOptions::default())
            .map_err(|e| CaptureError::DisplayError(e.to_string()))?;
        window.set_target_fps(60);

        while window.is_open() && !window.is_key_down(Key::Escape) {
            window
                .update_with_buffer(&framebuffer, out, out)
                .map_err(|e| CaptureError::DisplayError(e.to_string()))?;
        }

        Ok(())
    }
}
