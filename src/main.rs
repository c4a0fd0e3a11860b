use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::path::{Path, PathBuf};
use tracing::info;

use pixinfo::{probe, sidecar, walk};

#[derive(Parser)]
#[command(name = "pixinfo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "For each image file, write a <path>.info sidecar with its width, height and format")]
struct Cli {
    /// Image files or directories to probe
    paths: Vec<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if cli.paths.is_empty() {
        Cli::command().print_help()?;
        println!();
        std::process::exit(1);
    }

    for path in &cli.paths {
        process_path(path)?;
    }

    Ok(())
}

fn process_path(path: &Path) -> Result<()> {
    let mut files = Vec::new();
    walk::collect_images(path, &mut files)
        .with_context(|| format!("Failed to list {}", path.display()))?;

    for file in &files {
        let dims =
            probe::decode(file).with_context(|| format!("Failed to probe {}", file.display()))?;

        let out = sidecar::write_info(file, &dims)
            .with_context(|| format!("Failed to write sidecar for {}", file.display()))?;

        info!(
            "{}: {}x{} {} -> {}",
            file.display(),
            dims.width,
            dims.height,
            dims.format,
            out.display()
        );
    }

    Ok(())
}
