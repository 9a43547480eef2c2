//! Command implementations for the CLI interface.
//!
//! Each handler runs one store operation and writes the user-facing message
//! to `out`. `main` passes stdout; tests pass a buffer.

use std::io::Write;

use clap::{CommandFactory, Subcommand};
use clap_complete::{generate, Shell};
use tracing::debug;

use crate::cli::Cli;
use crate::db::TaskStore;
use crate::error::CmdError;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task.
    Add {
        /// Description of the task.
        description: String,
        /// Due date of the task (YYYY-MM-DD).
        due_date: String,
    },

    /// View all tasks.
    View,

    /// Delete a task.
    Delete {
        /// ID of the task to delete.
        #[arg(allow_negative_numbers = true)]
        task_id: i64,
    },

    /// Mark a task as completed.
    Complete {
        /// ID of the task to mark as completed.
        #[arg(allow_negative_numbers = true)]
        task_id: i64,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Run a single parsed command. `None` prints usage help.
pub fn dispatch(
    store: &TaskStore,
    command: Option<Commands>,
    out: &mut impl Write,
) -> Result<(), CmdError> {
    debug!(path = %store.path().display(), ?command, "dispatching");
    match command {
        Some(Commands::Add { description, due_date }) => {
            cmd_add(store, &description, &due_date, out)
        }
        Some(Commands::View) => cmd_view(store, out),
        Some(Commands::Delete { task_id }) => cmd_delete(store, task_id, out),
        Some(Commands::Complete { task_id }) => cmd_complete(store, task_id, out),
        Some(Commands::Completions { shell }) => cmd_completions(shell, out),
        None => cmd_help(out),
    }
}

/// Add a new task to the store.
pub fn cmd_add(
    store: &TaskStore,
    description: &str,
    due_date: &str,
    out: &mut impl Write,
) -> Result<(), CmdError> {
    let task = store.add(description, due_date)?;
    writeln!(out, "Task added: {} (Due: {})", task.description, task.due_date)?;
    Ok(())
}

/// Print every task in stored order.
pub fn cmd_view(store: &TaskStore, out: &mut impl Write) -> Result<(), CmdError> {
    let tasks = store.list()?;
    if tasks.is_empty() {
        writeln!(out, "No tasks found.")?;
        return Ok(());
    }
    for t in &tasks {
        writeln!(out, "{t}")?;
    }
    Ok(())
}

/// Delete tasks by id. Confirms whether or not anything matched.
pub fn cmd_delete(store: &TaskStore, task_id: i64, out: &mut impl Write) -> Result<(), CmdError> {
    store.delete(task_id)?;
    writeln!(out, "Task with ID {task_id} has been deleted.")?;
    Ok(())
}

/// Mark the first task with `task_id` as completed.
pub fn cmd_complete(
    store: &TaskStore,
    task_id: i64,
    out: &mut impl Write,
) -> Result<(), CmdError> {
    if store.complete(task_id)? {
        writeln!(out, "Task ID {task_id} marked as completed.")?;
    } else {
        writeln!(out, "Task with ID {task_id} not found.")?;
    }
    Ok(())
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell, out: &mut impl Write) -> Result<(), CmdError> {
    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, out);
    Ok(())
}

/// Print usage help when no command was given.
pub fn cmd_help(out: &mut impl Write) -> Result<(), CmdError> {
    Cli::command().write_help(out)?;
    writeln!(out)?;
    Ok(())
}
