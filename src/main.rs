//! `component-inspect`: parse a component payload, lay it out, and print the
//! resulting display list as JSON.
//!
//! ```text
//! component-inspect card.json --width 375 --config inspect.toml
//! ```
//!
//! Parse diagnostics go to stderr through `tracing`; set `RUST_LOG=debug` (or
//! `trace_level` in the config file) to also see unrecognized enum values.
//! Exits non-zero when the file cannot be read, is not JSON, or parses to no
//! component at all.

use clap::Parser;
use component_kit::diagnostics::init_tracing;
use component_kit::{initialize, ComponentError, Config};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "component-inspect")]
#[command(about = "Lay out a server-driven component payload and dump its display list")]
#[command(version)]
struct Cli {
    /// Component payload (JSON)
    file: PathBuf,

    /// Available width in points
    #[arg(short, long, default_value_t = 320.0)]
    width: f64,

    /// Config file (TOML)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,

    /// Print the laid-out frames instead of the display list
    #[arg(long)]
    frames: bool,
}

fn run(cli: &Cli) -> component_kit::Result<String> {
    let config = cli
        .config
        .as_ref()
        .map_or_else(|| Ok(Config::default()), Config::from_file)?;
    init_tracing(&config);

    if !(cli.width.is_finite() && cli.width >= 0.0) {
        return Err(ComponentError::Config(format!("invalid width {}", cli.width)));
    }

    let pipeline = initialize(&config);
    let text = std::fs::read_to_string(&cli.file)?;
    let root = pipeline.parse_str(&text)?.ok_or_else(|| {
        ComponentError::Config(format!("{} contains no valid component", cli.file.display()))
    })?;

    tracing::info!(
        root = %root.component_type(),
        nodes = root.node_count(),
        width = cli.width,
        "parsed payload"
    );

    let output = if cli.frames {
        serde_json::to_string_pretty(&pipeline.layout(&root, cli.width))?
    } else {
        serde_json::to_string_pretty(&pipeline.render(&root, cli.width))?
    };
    Ok(output)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("component-inspect: {e}");
            ExitCode::FAILURE
        }
    }
}
