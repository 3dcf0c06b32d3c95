use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use crate::capture_pipeline::capture::{CaptureSource, PackedCapture};
use crate::capture_pipeline::common::error::{CaptureError, Result};
use crate::capture_pipeline::conversions::CaptureViewPipeline;
use crate::capture_pipeline::decode::format::CaptureFormat;
use crate::capture_pipeline::decode::types::{ChannelOrder, NormalizedImage};
use crate::capture_pipeline::sink::{DisplaySink, ImageWriter, ViewConfig};

struct MockSource {
    should_fail: bool,
    capture: Option<PackedCapture>,
}

impl CaptureSource for MockSource {
    fn read_capture(&self, _data: &[u8]) -> Result<PackedCapture> {
        if self.should_fail {
            return Err(CaptureError::SourceError("Mock source error".to_string()));
        }
        Ok(self
            .capture
            .clone()
            .unwrap_or(PackedCapture::Words(vec![0x00F8; 96 * 96])))
    }
}

struct MockWriter {
    should_fail: bool,
    written: Arc<Mutex<Vec<NormalizedImage>>>,
}

impl ImageWriter for MockWriter {
    fn write_image(&self, image: &NormalizedImage, _output: &mut dyn Write) -> Result<()> {
        if self.should_fail {
            return Err(CaptureError::ExportError("Mock export error".to_string()));
        }
        self.written.lock().unwrap().push(image.clone());
        Ok(())
    }
}

struct MockDisplay {
    shown: Vec<NormalizedImage>,
}

impl DisplaySink for MockDisplay {
    fn display(&mut self, image: &NormalizedImage) -> Result<()> {
        self.shown.push(image.clone());
        Ok(())
    }
}

#[test]
fn test_successful_export() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let source = MockSource {
        should_fail: false,
        capture: None,
    };
    let writer = MockWriter {
        should_fail: false,
        written: written.clone(),
    };

    let pipeline = CaptureViewPipeline::with_custom(source, writer, ViewConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.export(b"fake capture data", &mut output);

    assert!(result.is_ok());
    let written = written.lock().unwrap();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].side, 96);
    assert_eq!(written[0].order, ChannelOrder::Bgr);
}

#[test]
fn test_decode_hands_sinks_swapped_planes() {
    // A full-red capture: after the one R<->B swap the red values must
    // sit in the last plane.
    let source = MockSource {
        should_fail: false,
        capture: Some(PackedCapture::Words(vec![0x00F8; 96 * 96])),
    };
    let writer = MockWriter {
        should_fail: false,
        written: Arc::new(Mutex::new(Vec::new())),
    };
    let pipeline = CaptureViewPipeline::with_custom(source, writer, ViewConfig::default());

    let image = pipeline.decode(b"fake capture data").unwrap();

    assert_eq!(image.order, ChannelOrder::Bgr);
    assert!(image.planes[0].samples.iter().all(|&v| v == 0.0));
    assert!(image.planes[2].samples.iter().all(|&v| v == 1.0));
    assert_eq!(image.red().samples[0], 1.0);
}

#[test]
fn test_source_failure() {
    let source = MockSource {
        should_fail: true,
        capture: None,
    };
    let writer = MockWriter {
        should_fail: false,
        written: Arc::new(Mutex::new(Vec::new())),
    };
    let pipeline = CaptureViewPipeline::with_custom(source, writer, ViewConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.export(b"fake capture data", &mut output);

    assert!(matches!(result.unwrap_err(), CaptureError::SourceError(_)));
}

#[test]
fn test_writer_failure() {
    let source = MockSource {
        should_fail: false,
        capture: None,
    };
    let writer = MockWriter {
        should_fail: true,
        written: Arc::new(Mutex::new(Vec::new())),
    };
    let pipeline = CaptureViewPipeline::with_custom(source, writer, ViewConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.export(b"fake capture data", &mut output);

    assert!(matches!(result.unwrap_err(), CaptureError::ExportError(_)));
}

#[test]
fn test_truncated_capture_aborts_export() {
    let source = MockSource {
        should_fail: false,
        capture: Some(PackedCapture::Words(vec![0x00F8; 96 * 96 - 1])),
    };
    let written = Arc::new(Mutex::new(Vec::new()));
    let writer = MockWriter {
        should_fail: false,
        written: written.clone(),
    };
    let pipeline = CaptureViewPipeline::with_custom(source, writer, ViewConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.export(b"fake capture data", &mut output);

    assert!(matches!(
        result.unwrap_err(),
        CaptureError::FormatError {
            expected: 9216,
            actual: 9215,
        }
    ));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_display_goes_through_sink() {
    let config = ViewConfig::builder()
        .format(CaptureFormat::Rgb888 { side: 2 })
        .build();
    let source = MockSource {
        should_fail: false,
        capture: Some(PackedCapture::Bytes(vec![
            10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120,
        ])),
    };
    let writer = MockWriter {
        should_fail: false,
        written: Arc::new(Mutex::new(Vec::new())),
    };
    let pipeline = CaptureViewPipeline::with_custom(source, writer, config);

    let mut display = MockDisplay { shown: Vec::new() };
    pipeline.display(b"fake capture data", &mut display).unwrap();

    assert_eq!(display.shown.len(), 1);
    assert_eq!(display.shown[0].side, 2);
    assert_eq!(display.shown[0].order, ChannelOrder::Bgr);
}

#[test]
fn test_export_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("capture96x96.raw");
    let output_path = dir.path().join("capture96x96.png");

    // A full-red frame as the host tool dumps it: little-endian words.
    let mut dump = Vec::with_capacity(96 * 96 * 2);
    for _ in 0..96 * 96 {
        dump.extend_from_slice(&0x00F8u16.to_le_bytes());
    }
    std::fs::write(&input_path, &dump).unwrap();

    let pipeline = CaptureViewPipeline::new(ViewConfig::default());
    pipeline.export_file(&input_path, &output_path).unwrap();

    let decoded = image::open(&output_path).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (96, 96));
    assert!(decoded.pixels().all(|p| p.0 == [255, 0, 0]));
}

#[test]
fn test_export_file_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = CaptureViewPipeline::new(ViewConfig::default());

    let result = pipeline.export_file(
        dir.path().join("missing.raw"),
        dir.path().join("missing.png"),
    );

    assert!(matches!(result.unwrap_err(), CaptureError::SourceError(_)));
}
