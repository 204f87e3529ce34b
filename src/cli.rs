//! Command line argument parsing
use clap::Parser;
use std::path::PathBuf;

/// Interactive guide for choosing and starting a Kiro + Strands course
#[derive(Parser, Debug)]
#[command(name = "start-learning")]
#[command(version)]
#[command(about = "Interactive guide for choosing and starting a Kiro + Strands course")]
pub struct Cli {
    /// Directory containing the course materials
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Never clear the screen between pages
    #[arg(long)]
    pub no_clear: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
