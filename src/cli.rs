use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;
use crate::db::DEFAULT_TASKS_FILE;

/// Add, view, complete and delete to-do items kept in one JSON file.
#[derive(Parser, Debug)]
#[command(name = "taskfile", version, about = "Task Manager CLI")]
pub struct Cli {
    /// Path to the JSON task file.
    #[arg(long, global = true, default_value = DEFAULT_TASKS_FILE)]
    pub db: PathBuf,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
