use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use art_testgen::Layout;

/// Regenerates the art test wrappers from the fixture tree.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Directory the default fixture and output paths resolve against
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Fixture root holding one directory per toolchain
    #[arg(long)]
    test_dir: Option<PathBuf>,

    /// Root of the generated sources
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// More logging (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn layout(&self) -> Layout {
        let mut layout = Layout::rooted(&self.root);
        if let Some(dir) = &self.test_dir {
            layout.test_dir = self.root.join(dir);
        }
        if let Some(dir) = &self.output_dir {
            layout.output_dir = self.root.join(dir);
        }
        layout
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let layout = args.layout();
    let summary = art_testgen::generate(&layout).with_context(|| {
        format!(
            "generating art tests from {} into {}",
            layout.test_dir.display(),
            layout.output_dir.display()
        )
    })?;
    info!(
        configurations = summary.configurations,
        files = summary.files_written,
        "done"
    );
    Ok(())
}
