//! svg-attrs CLI
//!
//! Renders a single rectangle with the given device paint settings so the
//! resulting SVG attributes can be inspected.
//!
//! Usage:
//!   svg-attrs [OPTIONS]
//!
//! Options:
//!   --fill <COLOR>       Fill color (#RRGGBB, #RRGGBBAA or none)
//!   --stroke <COLOR>     Stroke color
//!   --lwd <WIDTH>        Line width in device units
//!   --lty <TYPE>         Line type name or hex digits (e.g. dashed, 44, 13)
//!   -o, --output <FILE>  Write to a file instead of stdout
//!   -h, --help           Print help

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use svg_attrs::{
    Color, LineCap, LineJoin, LineType, StrokeStyle, SvgConfig, SvgError, Swatch,
};

#[derive(Parser)]
#[command(name = "svg-attrs")]
#[command(about = "Preview how device paint settings map to SVG attributes")]
struct Cli {
    /// Fill color (#RRGGBB, #RRGGBBAA or none)
    #[arg(long, default_value = "none")]
    fill: Color,

    /// Stroke color (#RRGGBB, #RRGGBBAA or none)
    #[arg(long, default_value = "#000000")]
    stroke: Color,

    /// Line width in device units (1/96 inch)
    #[arg(long, default_value_t = 1.0)]
    lwd: f64,

    /// Line type: blank, solid, dashed, dotted, dotdash, longdash, twodash or hex digits
    #[arg(long, default_value = "solid")]
    lty: LineType,

    /// Line join: round, mitre or bevel
    #[arg(long, default_value = "round")]
    join: LineJoin,

    /// Line cap: round, butt or square
    #[arg(long, default_value = "round")]
    cap: LineCap,

    /// Swatch width
    #[arg(long, default_value_t = 100.0)]
    width: f64,

    /// Swatch height
    #[arg(long, default_value_t = 100.0)]
    height: f64,

    /// Output config file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write without whitespace between elements
    #[arg(long)]
    compact: bool,

    /// Omit the XML declaration
    #[arg(long)]
    no_declaration: bool,

    /// Start the output with a UTF-8 byte-order mark
    #[arg(long)]
    bom: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Debug mode: log attribute decisions to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::WARN })
        .init();

    // Load config, then let flags override it
    let mut config = match &cli.config {
        Some(path) => match SvgConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => SvgConfig::default(),
    };
    if cli.compact {
        config.compact = true;
    }
    if cli.no_declaration {
        config.declaration = false;
    }
    if cli.bom {
        config.bom = true;
    }

    let swatch = Swatch {
        width: cli.width,
        height: cli.height,
        fill: cli.fill,
        stroke: StrokeStyle::new(cli.lwd, cli.stroke)
            .with_line_type(cli.lty)
            .with_join(cli.join)
            .with_cap(cli.cap),
        description: Some(format!(
            "lwd={} lty={:#x} join={} cap={}",
            cli.lwd,
            cli.lty.code(),
            cli.join,
            cli.cap
        )),
    };

    if let Err(e) = run(&swatch, &config, cli.output.as_ref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(swatch: &Swatch, config: &SvgConfig, output: Option<&PathBuf>) -> Result<(), SvgError> {
    let doc = swatch.to_document(config)?;
    let options = config.print_options();

    match output {
        Some(path) => {
            let mut sink = BufWriter::new(File::create(path)?);
            svg_attrs::dom::write_document(&doc, &mut sink, options)?;
        }
        None => {
            let stdout = io::stdout();
            let mut sink = stdout.lock();
            svg_attrs::dom::write_document(&doc, &mut sink, options)?;
            if config.compact {
                sink.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}
