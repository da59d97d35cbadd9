use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use todo_core::{FileSlot, Record, SortOrder, TodoStore};

#[derive(Parser, Debug)]
#[command(about = "A file-backed todo list")]
struct Cli {
    /// Path of the JSON file holding the todo list.
    #[arg(long, global = true, default_value = "todos.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
enum Commands {
    /// Add a new todo.
    Add {
        text: String,
        /// Optional calendar date, YYYY-MM-DD.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Flip the completed flag of a todo.
    Toggle { id: Uuid },
    /// Delete a todo.
    Remove { id: Uuid },
    /// Print the todo list.
    List {
        /// Show completed todos first.
        #[arg(long, conflicts_with = "by_date")]
        by_completed: bool,
        /// Show dated todos first, earliest date first.
        #[arg(long)]
        by_date: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Cli::parse();
    let mut store = TodoStore::restore(FileSlot::new(&args.file));

    match args.command {
        Commands::Add { text, date } => match store.add(&text, date) {
            Some(id) => println!("Added todo with ID {id}"),
            None => println!("Nothing added: todo text is empty"),
        },
        Commands::Toggle { id } => {
            if store.toggle_completed(id) {
                println!("Toggled todo {id}");
            } else {
                println!("No todo with ID {id}");
            }
        }
        Commands::Remove { id } => {
            if store.remove(id) {
                println!("Removed todo {id}");
            } else {
                println!("No todo with ID {id}");
            }
        }
        Commands::List {
            by_completed,
            by_date,
        } => {
            let order = if by_completed {
                SortOrder::CompletedFirst
            } else if by_date {
                SortOrder::DateAscending
            } else {
                SortOrder::Insertion
            };
            let view = store.view(order);
            if view.is_empty() {
                println!("No todos yet.");
            }
            for record in view {
                println!("{}", render(record));
            }
        }
    }

    Ok(())
}

fn render(record: &Record) -> String {
    let mark = if record.completed { "x" } else { " " };
    match record.date {
        Some(date) => format!("[{mark}] {} ({date}) {}", record.text, record.id),
        None => format!("[{mark}] {} {}", record.text, record.id),
    }
}
