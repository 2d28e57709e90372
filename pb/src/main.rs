use std::collections::HashSet;
use std::fs;
use std::sync::Arc;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tokio::sync::broadcast;
use tracing::{info, warn};

use pushboard::cli::{Cli, Command};
use pushboard::config::Config;
use pushboard::import;
use pushboard::{
    BoardEvent, BoardHandle, Credentials, DryRunPusher, PushBoard, PushStatus, TaskId, TaskStore,
};

fn setup_logging(cli_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > RUST_LOG > default (info)
    let directives = cli_log_level
        .map(str::to_string)
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_string());

    let filter = tracing_subscriber::EnvFilter::try_new(&directives)
        .context(format!("Invalid log filter '{directives}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Only pushing needs real login material; row management runs without it.
    let (credentials, proxy) = match &cli.command {
        Command::Push { .. } => {
            let credentials = config.network.resolve()?;
            let proxy = config.proxy.as_ref().map(|p| p.resolve()).transpose()?;
            (credentials, proxy)
        }
        _ => (Credentials::default(), None),
    };

    let store = TaskStore::open(&config.storage.board_path).context("Failed to open the task board")?;
    info!("pushboard starting with {} task(s)", store.len());

    let handle = PushBoard::spawn(config.board.clone(), store, Arc::new(DryRunPusher), credentials, proxy);

    let mut failed_pushes = 0;
    match cli.command {
        Command::Add { target, config, no_save } => {
            let config_text = match config.strip_prefix('@') {
                Some(path) => fs::read_to_string(path).context(format!("Failed to read config from {path}"))?,
                None => config,
            };
            handle.add(target.as_str(), config_text, !no_save).await?;
            println!("{} Added task for {}", "✓".green(), target.cyan());
        }
        Command::Import { path } => {
            let batch = import::read_rows_from_path(&path)
                .context(format!("Failed to import from {}", path.display()))?;
            let malformed = batch.skipped;
            let stats = handle.import(batch.rows).await?;
            println!(
                "{} Imported {} task(s) ({} row(s) skipped)",
                "✓".green(),
                stats.added,
                malformed + stats.skipped
            );
        }
        Command::List => {
            let tasks = handle.tasks().await?;
            if tasks.is_empty() {
                println!("No tasks on the board");
            } else {
                println!("{:<4} {:<30} {:<6} {:<10}", "POS", "TARGET", "SAVE", "STATUS");
                println!("{}", "-".repeat(54));
                for (position, task) in tasks.iter().enumerate() {
                    println!(
                        "{:<4} {:<30} {:<6} {:<10}",
                        position,
                        task.target,
                        if task.save { "yes" } else { "no" },
                        task.status
                    );
                }
            }
        }
        Command::SetSave { position, save } => {
            handle.set_save(position, save).await?;
            println!("{} Task {} save flag set to {}", "✓".green(), position, save);
        }
        Command::Remove { position } => {
            handle.remove(position).await?;
            println!("{} Removed task {}", "✓".green(), position);
        }
        Command::Clear => {
            handle.clear().await?;
            println!("{} Cleared the board", "✓".green());
        }
        Command::Push { positions } => {
            failed_pushes = cmd_push(&handle, positions).await?;
        }
    }

    handle.shutdown().await?;
    if failed_pushes > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Start pushes and follow board events until every started task settles.
/// Returns how many pushes failed.
async fn cmd_push(handle: &BoardHandle, positions: Vec<usize>) -> Result<usize> {
    let tasks = handle.tasks().await?;
    if tasks.is_empty() {
        println!("No tasks on the board");
        return Ok(0);
    }
    let targets: Vec<String> = tasks.iter().map(|t| t.target.clone()).collect();

    // Subscribe before starting so no status event slips past.
    let mut events = handle.subscribe();
    let started = if positions.is_empty() {
        handle.push_all().await?
    } else {
        handle.push_selected(positions).await?
    };
    if started.is_empty() {
        println!("Nothing to push");
        return Ok(0);
    }
    println!("Pushing {} task(s), Ctrl+C to abort", started.len());

    let mut remaining: HashSet<TaskId> = started.into_iter().collect();
    let mut pushed = 0;
    let mut failed = 0;
    let mut aborted = 0;
    while !remaining.is_empty() {
        tokio::select! {
            event = events.recv() => match event {
                Ok(BoardEvent::StatusChanged { position, task, status }) => {
                    let target = targets.get(position).map(String::as_str).unwrap_or("?");
                    match status {
                        PushStatus::Pending => {}
                        PushStatus::Connecting => println!("  {} connecting", target.cyan()),
                        PushStatus::Pushing => println!("  {} pushing", target.cyan()),
                        PushStatus::Pushed => {
                            pushed += 1;
                            println!("{} {} pushed", "✓".green(), target.cyan());
                        }
                        PushStatus::Failed => {
                            failed += 1;
                            println!("{} {} failed", "✗".red(), target.cyan());
                        }
                        PushStatus::Aborted => {
                            aborted += 1;
                            println!("{} {} aborted", "⚠".yellow(), target.cyan());
                        }
                    }
                    if status.is_terminal() {
                        remaining.remove(&task);
                    }
                }
                Ok(_) => {}
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    warn!("event stream lagged by {missed}, resyncing from the board");
                    let snapshot = handle.tasks().await?;
                    remaining.retain(|id| snapshot.iter().any(|t| &t.id == id && !t.status.is_terminal()));
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
            _ = tokio::signal::ctrl_c() => {
                println!("{} Aborting, waiting for running pushes to settle", "⚠".yellow());
                handle.abort_all().await?;
            }
        }
    }

    let glyph = if failed > 0 {
        "✗".red()
    } else if aborted > 0 {
        "⚠".yellow()
    } else {
        "✓".green()
    };
    println!();
    println!("{glyph} {pushed} pushed, {failed} failed, {aborted} aborted");
    Ok(failed)
}
