//! Viewer configuration types

use crate::capture_pipeline::decode::format::CaptureFormat;

/// Configuration for capture decoding and presentation
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Packing scheme expected from the capture source
    pub format: CaptureFormat,
    /// Integer upscale factor for the interactive window
    pub window_scale: usize,
    /// Title of the interactive window
    pub window_title: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            format: CaptureFormat::rgb565(),
            window_scale: 5,
            window_title: "capture".to_string(),
        }
    }
}

impl ViewConfig {
    pub fn builder() -> ViewConfigBuilder {
        ViewConfigBuilder::default()
    }
}

/// Builder for ViewConfig
#[derive(Default)]
pub struct ViewConfigBuilder {
    format: Option<CaptureFormat>,
    window_scale: Option<usize>,
    window_title: Option<String>,
}

impl ViewConfigBuilder {
    pub fn format(mut self, format: CaptureFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn window_scale(mut self, scale: usize) -> Self {
        self.window_scale = Some(scale);
        self
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = Some(title.into());
        self
    }

    pub fn build(self) -> ViewConfig {
        let default = ViewConfig::default();
        ViewConfig {
            format: self.format.unwrap_or(default.format),
            window_scale: self.window_scale.unwrap_or(default.window_scale),
            window_title: self.window_title.unwrap_or(default.window_title),
        }
    }
}
