use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fma",
    about = "Factory Method Adventures progression service",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the REST API server
    Serve(ServeArgs),
    /// List catalog units and their badges
    Catalog(CatalogArgs),
    /// Show the level for an XP total
    Level(LevelArgs),
    /// Print the effective configuration as TOML
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Override the bind address, e.g. 0.0.0.0:3001
    #[arg(long)]
    pub bind: Option<String>,
    /// Accept completions for units whose prerequisite is not done
    #[arg(long)]
    pub no_unlock_checks: bool,
}

#[derive(Args)]
pub struct CatalogArgs {
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct LevelArgs {
    pub xp: u64,
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
