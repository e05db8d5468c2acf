//! Tape Planner CLI entry point

use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use colored::*;
use eyre::{Context, Result};
use tracing::{Level, debug, info};
use tracing_subscriber::EnvFilter;

use tapeplanner::cli::{Cli, Command};
use tapeplanner::config::Config;
use tapeplanner::render::{OutputFormat, render, render_ranges};
use tapeplanner::session::Session;
use tapeplanner::{NO_SOLUTION_WARNING, TapeList};

/// `<data_local_dir>/tapeplanner/logs/tapeplanner.log`
fn log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tapeplanner")
        .join("logs")
        .join("tapeplanner.log")
}

/// `--log-level` wins over the config file; unknown names fall back to INFO
fn resolve_level(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Level {
    let Some(name) = cli_log_level.or(config_log_level) else {
        return Level::INFO;
    };
    let parsed = if name.eq_ignore_ascii_case("warning") {
        Ok(Level::WARN)
    } else {
        name.parse::<Level>()
    };
    parsed.unwrap_or_else(|_| {
        eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", name);
        Level::INFO
    })
}

fn setup_logging(level: Level) -> Result<()> {
    let path = log_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create log directory")?;
    }
    let log_file = fs::File::create(&path).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!(?level, path = %path.display(), "Logging initialized");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    let level = resolve_level(cli.log_level.as_deref(), config_log_level.as_deref());
    setup_logging(level).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Some(Command::Plan {
            lengths,
            format,
            no_color,
        }) => {
            let format = format.unwrap_or(config.output.format);
            let color = config.output.color && !no_color;
            cmd_plan(&config, lengths, format, color)
        }
        Some(Command::Ranges) => {
            println!("{}", render_ranges(config.output.color));
            Ok(())
        }
        Some(Command::Session) => Session::from_config(&config).run(),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

fn cmd_plan(config: &Config, lengths: Vec<String>, format: OutputFormat, color: bool) -> Result<()> {
    debug!(?lengths, %format, color, "cmd_plan: called");
    let tapes: TapeList = lengths.into_iter().collect();

    let plan = match tapes.plan(&config.input) {
        Ok(Some(plan)) => plan,
        Ok(None) => warn_and_exit(NO_SOLUTION_WARNING),
        Err(e) => warn_and_exit(&e.to_string()),
    };

    info!(ratio = %plan.ratio, lines = plan.lines.len(), "cmd_plan: plan found");
    println!("{}", render(&plan, format, color)?);
    Ok(())
}

fn warn_and_exit(message: &str) -> ! {
    info!(message, "warning shown to operator");
    eprintln!("{} {}", "Warning:".yellow(), message);
    std::process::exit(1);
}
