//! filterize - apply PhotoStag filters to an image
//!
//! Writes one output per selected filter to `<out>/<family>/<name>.<ext>`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use photostag::io::{apply_to_image, load_image, output_path, save_image};
use photostag::{select_filters, FilterFamily};

#[derive(Parser)]
#[command(name = "filterize")]
#[command(author, version, about = "Apply per-pixel photo filters to an image")]
#[command(long_about = "
Applies each selected filter to a fresh copy of the input image and saves
the results grouped by filter family.

Examples:
  filterize chameleon.jpg                       # every filter into ./filterized
  filterize chameleon.jpg -o out -f negative    # one filter
  filterize chameleon.jpg --family grayscale    # grayscale filters only
")]
struct Cli {
    /// Input image
    input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "filterized")]
    output: PathBuf,

    /// Filter to apply (repeatable, default: all)
    #[arg(short, long = "filter")]
    filters: Vec<String>,

    /// Only apply filters of this family (simple, grayscale)
    #[arg(long)]
    family: Option<FilterFamily>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let filters = select_filters(&cli.filters, cli.family).context("Invalid filter selection")?;
    let extension = cli
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("png")
        .to_string();

    info!("Filtering {} with {} filter(s)", cli.input.display(), filters.len());

    for filter in filters {
        let mut image = load_image(&cli.input)
            .with_context(|| format!("Failed to load {}", cli.input.display()))?;
        debug!("{}: {}x{}", filter.name, image.width(), image.height());

        apply_to_image(&mut image, filter)
            .with_context(|| format!("Filter '{}' failed", filter.name))?;

        let path = output_path(&cli.output, filter, &extension);
        save_image(&image, &path).with_context(|| format!("Failed to save {}", path.display()))?;
        info!("{} -> {}", filter.name, path.display());
    }

    Ok(())
}
