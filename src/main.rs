//! taskmuse CLI entry point

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result, eyre};
use tracing::{debug, info};

use taskmuse::cli::{Cli, Command};
use taskmuse::config::Config;
use taskmuse::llm::create_client;
use taskmuse::store::TaskStore;
use taskmuse::suggest::{DraftSession, suggest};

fn setup_logging(cli_log_level: Option<&str>) -> Result<()> {
    let level = match cli_log_level.map(str::to_uppercase).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("INFO") | None => tracing::Level::INFO,
        Some("WARN") | Some("WARNING") => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{other}', defaulting to INFO");
            tracing::Level::INFO
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    debug!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    let store_path = cli.store.clone().unwrap_or_else(|| config.storage.resolve());
    let mut store = TaskStore::load(&store_path).context("Failed to load task store")?;

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Command::Add { title, description } => cmd_add(&mut store, &title, &description),
        Command::List => cmd_list(&store),
        Command::Done { index } => cmd_done(&mut store, index),
        Command::Rm { index } => cmd_rm(&mut store, index),
        Command::Suggest { hint, accept } => cmd_suggest(&config, &mut store, &hint, accept).await,
    }
}

fn cmd_add(store: &mut TaskStore, title: &str, description: &str) -> Result<()> {
    store.add(title, description)?;
    println!("Added: {}", title.trim().bold());
    Ok(())
}

fn cmd_list(store: &TaskStore) -> Result<()> {
    if store.tasks().is_empty() {
        println!("{}", "No tasks yet.".dimmed());
        return Ok(());
    }

    for (i, task) in store.tasks().iter().enumerate() {
        let marker = if task.completed { "[x]".green() } else { "[ ]".normal() };
        let title = if task.completed {
            task.title.dimmed().strikethrough()
        } else {
            task.title.bold()
        };
        if task.description.is_empty() {
            println!("{:>3}. {} {}", i + 1, marker, title);
        } else {
            println!("{:>3}. {} {} - {}", i + 1, marker, title, task.description);
        }
    }

    let (completed, pending) = store.counts();
    println!("{}", format!("{completed} completed, {pending} pending").dimmed());
    Ok(())
}

fn cmd_done(store: &mut TaskStore, index: usize) -> Result<()> {
    let index = index.checked_sub(1).ok_or_else(|| eyre!("task numbers start at 1"))?;
    let completed = store.toggle(index)?;
    let task = &store.tasks()[index];
    if completed {
        println!("Done: {}", task.title.green());
    } else {
        println!("Reopened: {}", task.title.bold());
    }
    Ok(())
}

fn cmd_rm(store: &mut TaskStore, index: usize) -> Result<()> {
    let index = index.checked_sub(1).ok_or_else(|| eyre!("task numbers start at 1"))?;
    let task = store.remove(index)?;
    println!("Removed: {}", task.title);
    Ok(())
}

async fn cmd_suggest(config: &Config, store: &mut TaskStore, hint: &str, accept: bool) -> Result<()> {
    // Fail fast on misconfiguration before anything touches the network
    config.validate()?;

    let client = create_client(&config.llm)?;

    let mut session = DraftSession::new();
    let token = session.begin();

    match suggest(client.as_ref(), config.llm.mode, hint).await {
        Ok(draft) => {
            info!(title = %draft.title, "Suggestion accepted");
            session.apply(token, draft);
        }
        Err(e) => {
            // Rejections leave the draft untouched; surface the reason only
            debug!(error = %e, "Suggestion rejected");
            return Err(eyre!(e)).context("No suggestion staged");
        }
    }

    let draft = session.draft();
    println!("{}", "Suggested:".bold());
    println!("  title:       {}", draft.title);
    if !draft.description.is_empty() {
        println!("  description: {}", draft.description);
    }

    if accept {
        store.add(&draft.title, &draft.description)?;
        println!("Added: {}", draft.title.bold());
    } else {
        println!("{}", "Run with --accept to add it to the list.".dimmed());
    }

    Ok(())
}
