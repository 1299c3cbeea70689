//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "instance-config")]
#[command(about = "Seed and inspect instance configuration", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Path to the YAML configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Seed configuration from environment variables without overwriting existing keys
    Seed(SeedArgs),

    /// List stored configuration
    List(ListArgs),

    /// Show a single stored configuration key
    Get(GetArgs),

    /// Print the keys the seeder manages
    Catalog,
}

#[derive(Args, Debug, Default)]
pub struct SeedArgs {
    /// Report what would be written without changing the store
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only show keys in this category (e.g. SMTP, OIDC)
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Decrypt encrypted values instead of masking them
    #[arg(long)]
    pub reveal: bool,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,

    /// Decrypt the value if it is stored encrypted
    #[arg(short, long)]
    pub decrypt: bool,
}
