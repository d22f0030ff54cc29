use clap::{Parser, Subcommand};

use crate::models::Status;

const VERSION: &str = env!("GIT_VERSION");

#[derive(Parser)]
#[command(
    name = "taskly",
    version = VERSION,
    about = "File-backed task tracker CLI",
    after_help = "\
NOTE:
  Tasks are stored in ./tasks.json, created on first use.
  Statuses: todo, in-progress, done. New tasks start as todo.
  Ids are assigned max+1 and never reused after deletion."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task description; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },

    /// Replace a task's description
    Update {
        /// Task ID
        id: u64,
        /// New description; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: u64,
    },

    /// Mark a task as in-progress
    MarkInProgress {
        /// Task ID
        id: u64,
    },

    /// Mark a task as done
    MarkDone {
        /// Task ID
        id: u64,
    },

    /// List tasks, optionally filtered by status
    List {
        /// One of: todo, in-progress, done
        #[arg(value_parser = parse_status)]
        status: Option<Status>,
    },
}

fn parse_status(s: &str) -> Result<Status, String> {
    Status::from_str(s)
        .ok_or_else(|| "Invalid status. Use 'todo', 'in-progress', or 'done'".to_string())
}
