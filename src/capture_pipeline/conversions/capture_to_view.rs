use std::io::Write;
use std::path::Path;

use tracing::{info, instrument};

use crate::capture_pipeline::{
    capture::{CaptureSource, WordDumpSource},
    common::error::{CaptureError, Result},
    decode::{self, NormalizedImage},
    sink::{DisplaySink, ImageWriter, PngWriter, ViewConfig},
};

pub struct CaptureViewPipeline<S: CaptureSource, W: ImageWriter> {
    source: S,
    writer: W,
    config: ViewConfig,
}

impl CaptureViewPipeline<WordDumpSource, PngWriter> {
    pub fn new(config: ViewConfig) -> Self {
        Self {
            source: WordDumpSource,
            writer: PngWriter,
            config,
        }
    }
}

impl<S: CaptureSource, W: ImageWriter> CaptureViewPipeline<S, W> {
    pub fn with_custom(source: S, writer: W, config: ViewConfig) -> Self {
        Self {
            source,
            writer,
            config,
        }
    }

    /// Decode a capture into sink-ready planes: read, unpack, normalize,
    /// then swap into the B,G,R order the sinks consume. The swap happens
    /// here and nowhere else.
    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn decode(&self, input_data: &[u8]) -> Result<NormalizedImage> {
        let capture = {
            let _span = tracing::info_span!("read_capture").entered();
            self.source.read_capture(input_data)?
        };

        let raw = {
            let _span = tracing::info_span!("unpack", samples = capture.len()).entered();
            decode::unpack(&self.config.format, &capture)?
        };

        let image = {
            let _span = tracing::info_span!("normalize").entered();
            decode::normalize(&self.config.format, &raw)
        };

        Ok(image.into_display_order())
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn export(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting capture export");

        let image = self.decode(input_data)?;

        {
            let _span = tracing::info_span!("encode_image").entered();
            self.writer.write_image(&image, output)?;
        }

        info!(side = image.side, "Export complete");
        Ok(())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn export_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Exporting capture file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                CaptureError::SourceError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                CaptureError::ExportError(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.export(&input_data, &mut output_file)?;

        Ok(())
    }

    #[instrument(skip(self, input_data, sink), fields(input_size = input_data.len()))]
    pub fn display(&self, input_data: &[u8], sink: &mut dyn DisplaySink) -> Result<()> {
        let image = self.decode(input_data)?;

        info!(side = image.side, "Displaying capture");
        sink.display(&image)
    }

    pub fn display_file<P: AsRef<Path>>(
        &self,
        input_path: P,
        sink: &mut dyn DisplaySink,
    ) -> Result<()> {
        let input_path = input_path.as_ref();

        let input_data = std::fs::read(input_path).map_err(|e| {
            CaptureError::SourceError(format!("{}: {}", input_path.display(), e))
        })?;

        self.display(&input_data, sink)
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ViewConfig) {
        self.config = config;
    }
}
