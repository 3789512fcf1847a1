use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use fma_engine::UnitKind;
use fma_server::{AppConfig, FmaServer};
use serde_json::json;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let format = cli.format;
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Catalog(args) => cmd_catalog(args, format),
        Command::Level(args) => cmd_level(args, format),
        Command::Config(args) => cmd_config(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(AppConfig::default()),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = &args.bind {
        config.server.bind_addr = bind
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid bind address: {bind}"))?;
    }
    if args.no_unlock_checks {
        config.service.enforce_unlocks = false;
    }
    tracing::debug!(?config, "effective configuration");

    println!("{}", "=".repeat(50));
    println!("{}", "Factory Method Adventures API".bold());
    println!("  Server: {}", format!("http://{}", config.server.bind_addr).cyan());
    println!("  Health: {}", format!("http://{}/health", config.server.bind_addr).cyan());
    let unlocks = if config.service.enforce_unlocks {
        "enforced".green()
    } else {
        "off".yellow()
    };
    println!("  Unlock checks: {unlocks}");
    println!("{}", "=".repeat(50));

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    runtime.block_on(FmaServer::new(config).serve())?;
    Ok(())
}

fn cmd_catalog(args: CatalogArgs, format: OutputFormat) -> anyhow::Result<()> {
    let engine = load_config(args.config.as_deref())?.engine();
    let catalog = engine.catalog();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(catalog)?);
        return Ok(());
    }

    for kind in UnitKind::ALL {
        println!("{}", format!("{kind} track").bold());
        for unit in catalog.track(kind) {
            println!(
                "  {:>2}. {:<10} {}  {} {} (+{} XP)",
                unit.order,
                unit.key.as_str().yellow(),
                unit.title,
                "badge:".dimmed(),
                unit.badge.name.green(),
                unit.badge.xp_value,
            );
        }
    }
    Ok(())
}

fn cmd_level(args: LevelArgs, format: OutputFormat) -> anyhow::Result<()> {
    let rules = load_config(args.config.as_deref())?.rules;
    let level = rules.level_from_xp(args.xp);
    let to_next = rules.xp_to_next_level(args.xp);

    match format {
        OutputFormat::Json => println!(
            "{}",
            json!({ "xp": args.xp, "level": level, "xpToNextLevel": to_next })
        ),
        OutputFormat::Text => println!(
            "{} XP {} level {} ({} XP to next)",
            args.xp.to_string().bold(),
            "->".dimmed(),
            level.to_string().green().bold(),
            to_next
        ),
    }
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    print!("{}", toml::to_string_pretty(&config).context("failed to render config")?);
    Ok(())
}
