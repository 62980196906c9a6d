//! Command-line surface.

use clap::{Parser, Subcommand, ValueEnum};
use mvpkit_core::TaskFilter;
use std::path::PathBuf;

/// Task list and post feed sample backed by a local SQLite file.
#[derive(Parser)]
#[command(name = "mvpkit", version, about = "Task and post sample CLI")]
pub struct Cli {
    /// Path to the SQLite database file.
    #[arg(long, global = true, default_value = "mvpkit.sqlite3")]
    pub db: PathBuf,

    /// Log level: trace | debug | info | warn | error.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when omitted.
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Task(TaskCommands),
    /// Post feed commands.
    #[command(subcommand)]
    Posts(PostCommands),
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a new active task.
    Add {
        /// Short title for the task.
        #[arg(long)]
        title: Option<String>,
        /// Optional longer description.
        #[arg(long)]
        description: Option<String>,
    },
    /// Replace title and description of a task.
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// List tasks.
    List {
        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,
        /// Print JSON instead of text rows.
        #[arg(long)]
        json: bool,
    },
    /// Show one task.
    Show { id: String },
    /// Mark a task completed.
    Complete { id: String },
    /// Mark a task active again.
    Activate { id: String },
    /// Delete one task.
    Delete { id: String },
    /// Delete all completed tasks.
    ClearCompleted,
    /// Print active/completed counts.
    Stats,
}

#[derive(Subcommand)]
pub enum PostCommands {
    /// List posts from the local cache.
    List,
    /// Fetch posts from a JSON feed file and refresh the local cache.
    Sync {
        /// JSON array of posts (`id`, `userId`, `title`, `body`).
        feed: PathBuf,
    },
    /// Drop cached posts.
    Clear,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FilterArg {
    All,
    Active,
    Completed,
}

impl From<FilterArg> for TaskFilter {
    fn from(value: FilterArg) -> Self {
        match value {
            FilterArg::All => TaskFilter::All,
            FilterArg::Active => TaskFilter::Active,
            FilterArg::Completed => TaskFilter::Completed,
        }
    }
}
