use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{error, info};

use capview_rs::capture_pipeline::{
    ByteDumpSource, CaptureFormat, CaptureSource, CaptureViewPipeline, ConsoleLogSource,
    PngWriter, RGB565_SIDE, RGB888_SIDE, ViewConfig, WindowSink, WordDumpSource,
};
use capview_rs::logger;

#[derive(Parser, Debug)]
#[command(author, version, about = "Raw camera capture viewer")]
struct Args {
    /// Path to the capture file
    file: PathBuf,

    /// Pixel packing of the capture
    #[arg(short, long, value_enum, default_value = "rgb565")]
    format: FormatArg,

    /// How the capture file stores its samples (defaults to the usual
    /// dump kind for the chosen format)
    #[arg(short, long, value_enum)]
    source: Option<SourceArg>,

    /// Capture side length override in pixels
    #[arg(long)]
    side: Option<usize>,

    /// Write a PNG here instead of opening a window
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Integer window upscale factor
    #[arg(long, default_value_t = 5)]
    scale: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Rgb565,
    Rgb888,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SourceArg {
    /// Binary little-endian 16-bit word dump
    Words,
    /// Binary byte dump
    Bytes,
    /// UART console log of hex byte tokens
    ConsoleLog,
}

fn capture_format(args: &Args) -> CaptureFormat {
    match args.format {
        FormatArg::Rgb565 => CaptureFormat::Rgb565 {
            side: args.side.unwrap_or(RGB565_SIDE),
        },
        FormatArg::Rgb888 => CaptureFormat::Rgb888 {
            side: args.side.unwrap_or(RGB888_SIDE),
        },
    }
}

fn run<S: CaptureSource>(source: S, config: ViewConfig, args: &Args) -> anyhow::Result<()> {
    let title = config.window_title.clone();
    let scale = config.window_scale;
    let pipeline = CaptureViewPipeline::with_custom(source, PngWriter, config);

    match &args.output {
        Some(output) => {
            pipeline.export_file(&args.file, output)?;
            info!("Wrote {}", output.display());
        }
        None => {
            let mut sink = WindowSink::new(title, scale);
            pipeline.display_file(&args.file, &mut sink)?;
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let args = Args::parse();

    let format = capture_format(&args);
    let source = args.source.unwrap_or(match args.format {
        FormatArg::Rgb565 => SourceArg::Words,
        FormatArg::Rgb888 => SourceArg::ConsoleLog,
    });

    let title = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "capture".to_string());

    let config = ViewConfig::builder()
        .format(format)
        .window_scale(args.scale)
        .window_title(title)
        .build();

    info!("Capture viewer starting");
    info!("Format: {:?}", config.format);
    info!("Source: {:?}", source);

    let result = match source {
        SourceArg::Words => run(WordDumpSource, config, &args),
        SourceArg::Bytes => run(ByteDumpSource, config, &args),
        SourceArg::ConsoleLog => run(ConsoleLogSource, config, &args),
    };

    if let Err(e) = result {
        error!("Capture processing failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
