//! # taskfile - personal task tracker
//!
//! A small command-line tool that keeps a to-do list in a single JSON file.
//!
//! ```bash
//! taskfile add "Buy milk" 2024-01-01
//! taskfile view
//! taskfile complete 1
//! taskfile delete 1
//! ```
//!
//! Tasks live in `./tasks.json` unless `--db <PATH>` is given. The file is a
//! pretty-printed JSON array and is rewritten in full on every change.

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod db;
pub mod error;
pub mod logging;
pub mod task;

use cli::Cli;
use cmd::dispatch;
use db::TaskStore;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let store = TaskStore::new(cli.db);
    if let Err(e) = dispatch(&store, cli.command, &mut std::io::stdout()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
