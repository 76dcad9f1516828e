use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "velo", about = "Velo — in-memory item service", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the item HTTP server
    Serve(ServeArgs),
    /// Print the effective server configuration
    Config(ConfigArgs),
}

/// Options shared by every command that resolves a server configuration.
#[derive(Args, Clone, Debug, Default)]
pub struct ConfigSource {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Address to listen on (overrides the file)
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Start with the sample records (overrides the file)
    #[arg(long)]
    pub seed: bool,
}

#[derive(Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub source: ConfigSource,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub source: ConfigSource,
}
