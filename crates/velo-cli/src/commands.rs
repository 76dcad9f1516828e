use colored::Colorize;
use velo_server::{ServerConfig, VeloServer};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Config(args) => cmd_config(args, &cli.format),
    }
}

/// Load the config file if one was given, then apply flag overrides.
pub fn resolve_config(source: &ConfigSource) -> anyhow::Result<ServerConfig> {
    let mut config = match &source.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = source.bind {
        config.bind_addr = bind;
    }
    if source.seed {
        config.seed_sample_items = true;
    }
    Ok(config)
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args.source)?;
    let seeded = if config.seed_sample_items { " (seeded)" } else { "" };
    println!(
        "{} Velo item server on {}{}",
        "✓".green().bold(),
        config.bind_addr.to_string().bold(),
        seeded.dimmed()
    );
    VeloServer::new(config).serve().await?;
    Ok(())
}

fn cmd_config(args: ConfigArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let config = resolve_config(&args.source)?;
    match format {
        OutputFormat::Text => print!("{}", config.to_toml_string()?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
    }
    Ok(())
}
