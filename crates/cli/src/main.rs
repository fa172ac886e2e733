mod config;
mod render;
mod shell;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use orchestrator::TriggerBoard;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{DemoConfig, CONFIG_FILE};
use crate::render::{OutputFormat, Renderer};

#[derive(Parser)]
#[command(name = "ask-mom")]
#[command(about = "Ask mom for a new phone, four asynchronous ways", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file to read (defaults to ./ask-mom.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Mom says no, whatever the config file says
    #[arg(long, global = true)]
    unhappy: bool,

    /// Delay before each phone request settles
    #[arg(long, global = true)]
    latency_ms: Option<u64>,

    /// Print bus events as JSON lines instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init {
        #[arg(long)]
        force: bool,
    },
    /// Fire a trigger (run1..run4, a style name, or "all")
    Run {
        #[arg(default_value = "all")]
        trigger: String,

        #[arg(short, long, default_value_t = 1)]
        repeat: u32,
    },
    /// Fire triggers interactively
    Shell,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

    match cli.command {
        Some(Commands::Init { force }) => init_config(&config_path, force).await,
        Some(Commands::Run {
            ref trigger,
            repeat,
        }) => {
            let (board, renderer) = load_board(&cli, &config_path).await?;
            run(&board, renderer, trigger, repeat).await
        }
        Some(Commands::Shell) => {
            let (board, renderer) = load_board(&cli, &config_path).await?;
            shell::run(board, renderer).await
        }
        None => {
            let (board, renderer) = load_board(&cli, &config_path).await?;
            run(&board, renderer, "all", 1).await
        }
    }
}

async fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        println!("Config already exists at {}", path.display());
        println!("Use --force to overwrite it.");
        return Ok(());
    }

    DemoConfig::default().write(path).await?;
    println!("Wrote {}", path.display());
    println!();
    println!("  mom_happy  = true   set to false to see the refusal path");
    println!("  latency_ms = 0      delay before a phone request settles");
    Ok(())
}

async fn load_board(cli: &Cli, config_path: &Path) -> Result<(TriggerBoard, Renderer)> {
    let config = DemoConfig::read(config_path)
        .await?
        .with_overrides(cli.unhappy, cli.latency_ms);
    tracing::info!(
        mom_happy = config.mom_happy,
        latency_ms = config.latency_ms,
        "Configuration loaded"
    );

    let board = TriggerBoard::new(config.engine_config());
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let renderer = Renderer::new(format, board.subscribe());
    Ok((board, renderer))
}

async fn run(board: &TriggerBoard, mut renderer: Renderer, trigger: &str, repeat: u32) -> Result<()> {
    for _ in 0..repeat {
        if trigger.eq_ignore_ascii_case("all") {
            for report in board.fire_all().await? {
                renderer.report(&report)?;
            }
        } else {
            let report = board
                .fire_named(trigger)
                .await
                .with_context(|| format!("Cannot fire '{}'", trigger))?;
            renderer.report(&report)?;
        }
    }
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ask_mom=warn,orchestrator=warn".into()),
        )
        .init();
}
