//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// taskmuse - task list with AI-assisted suggestions
#[derive(Parser)]
#[command(
    name = "taskmuse",
    about = "Task list with AI-assisted suggestions",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Path to the task snapshot file (overrides config)
    #[arg(long, global = true, help = "Path to the task snapshot file")]
    pub store: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a task
    Add {
        /// Task title
        title: String,

        /// Task description
        #[arg(default_value = "")]
        description: String,
    },

    /// List tasks with a completed/pending summary
    List,

    /// Toggle completion of a task (1-based index from `list`)
    Done {
        /// Task number as shown by `list`
        index: usize,
    },

    /// Remove a task (1-based index from `list`)
    Rm {
        /// Task number as shown by `list`
        index: usize,
    },

    /// Ask the model to turn a vague hint into a task suggestion
    Suggest {
        /// Free-text hint to seed the suggestion
        hint: String,

        /// Also add the staged suggestion to the task list
        #[arg(long)]
        accept: bool,
    },
}
