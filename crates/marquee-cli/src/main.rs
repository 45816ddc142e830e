use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use marquee_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(author, version, about = "A terminal news ticker")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the ticker
    Run {
        /// Items file (.toml or .json), overrides ticker.items_path
        #[arg(short, long)]
        items: Option<PathBuf>,
        /// Theme name, overrides ui.theme
        #[arg(short, long)]
        theme: Option<String>,
        /// Seconds per full lap of the content
        #[arg(short, long)]
        period: Option<f64>,
        /// Seconds of inactivity before autoplay resumes (0 disables)
        #[arg(long)]
        idle: Option<f64>,
    },
    /// List built-in themes
    Themes,
    /// Print the items the ticker would show
    Items {
        /// Items file (.toml or .json), overrides ticker.items_path
        #[arg(short, long)]
        items: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;

    let command = cli.command.unwrap_or(Commands::Run {
        items: None,
        theme: None,
        period: None,
        idle: None,
    });

    match command {
        Commands::Run {
            items,
            theme,
            period,
            idle,
        } => {
            if let Some(items) = items {
                config.ticker.items_path = Some(items);
            }
            if let Some(theme) = theme {
                config.ui.theme.name = theme;
            }
            if let Some(period) = period {
                config.ticker.scroll_period_secs = period;
            }
            if let Some(idle) = idle {
                config.ticker.idle_timeout_secs = idle;
            }

            // The alternate screen owns stdout, so the TUI logs to a file
            init_file_logging(&config)?;
            commands::run::run(Arc::new(config)).await
        }
        Commands::Themes => {
            init_stderr_logging(&config);
            commands::themes::run(&config)
        }
        Commands::Items { items } => {
            init_stderr_logging(&config);
            if let Some(items) = items {
                config.ticker.items_path = Some(items);
            }
            commands::items::run(&config)
        }
    }
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.general.log_level))
}

fn init_stderr_logging(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn init_file_logging(config: &AppConfig) -> Result<()> {
    let log_path = config.log_path();
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}
