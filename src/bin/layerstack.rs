use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "layerstack", version, about = "Flatten a layer template into one image")]
struct Cli {
    /// Template JSON. Component paths are relative to its directory.
    template: PathBuf,

    /// Write the result as PNG instead of opening a viewer.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let template = layerstack::Template::from_path(&cli.template)
        .with_context(|| format!("load template '{}'", cli.template.display()))?;
    let image = template
        .compose(&layerstack::ComposeOpts::default())
        .with_context(|| format!("compose '{}'", cli.template.display()))?;

    match cli.out {
        Some(out) => {
            layerstack::save_png(&image, &out)?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let shown = layerstack::show(&image)?;
            tracing::info!(path = %shown.display(), "opened viewer");
        }
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
