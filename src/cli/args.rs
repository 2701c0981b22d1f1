//! CLI argument definitions.
//!
//! Every flag is optional; running with none reproduces the default check.

use clap::Parser;
use std::path::PathBuf;

/// Check that the movie recommendation notebook environment is ready.
#[derive(Debug, Parser)]
#[command(name = "movierec-validate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Python interpreter used to probe packages (default: virtualenv, then PATH)
    #[arg(long, value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Program used to list Jupyter kernels
    #[arg(long, value_name = "PATH", default_value = "jupyter")]
    pub jupyter: PathBuf,

    /// Seconds to wait for the kernel listing
    #[arg(long, value_name = "SECS", default_value_t = 10,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub kernel_timeout: u64,

    /// Seconds to wait for each package import
    #[arg(long, value_name = "SECS", default_value_t = 30,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub import_timeout: u64,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
