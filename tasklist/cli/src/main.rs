use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use log4rs::Config;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use tasklist_core::{TaskStore, query};

#[derive(Parser, Debug)]
#[command(name = "tasklist", about = "Personal to-do list, grouped by category")]
struct Cli {
    /// Task file to read and write
    #[arg(long, global = true, default_value = "tasks.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        name: String,
        #[arg(long)]
        category: String,
        /// Due date, YYYY-MM-DD
        #[arg(long)]
        due: String,
        /// High, Medium or Low
        #[arg(long, default_value = "Medium")]
        priority: String,
    },
    /// Overwrite every field of an existing task
    Edit {
        name: String,
        /// New task name (may repeat the old one)
        #[arg(long = "name")]
        new_name: String,
        #[arg(long)]
        category: String,
        /// New due date, YYYY-MM-DD
        #[arg(long)]
        due: String,
        #[arg(long)]
        priority: String,
    },
    /// Delete a task by name
    Delete { name: String },
    /// Mark a task complete
    Done { name: String },
    /// Mark a task incomplete again
    Undone { name: String },
    /// Show tasks
    List {
        /// Show completed tasks instead of open ones
        #[arg(long)]
        completed: bool,
        /// Only tasks due in this month (1-12)
        #[arg(long)]
        month: Option<u32>,
        /// Only tasks in this category
        #[arg(long)]
        category: Option<String>,
        /// Sort by due date, then priority
        #[arg(long)]
        sort: bool,
    },
    /// Delete every task in every category
    Clear,
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    let mut store = TaskStore::open(&cli.file);

    match cli.command {
        Commands::Add {
            name,
            category,
            due,
            priority,
        } => {
            check_due_date(&due)?;
            store.add(&name, &category, &due, &priority);
            println!("Added '{name}' to {category}");
        }
        Commands::Edit {
            name,
            new_name,
            category,
            due,
            priority,
        } => {
            check_due_date(&due)?;
            store.edit(&name, &new_name, &category, &due, &priority)?;
            println!("Updated '{new_name}'");
        }
        Commands::Delete { name } => {
            store.delete(&name)?;
            println!("Deleted '{name}'");
        }
        Commands::Done { name } => {
            store.mark_complete(&name)?;
            println!("Marked '{name}' complete");
        }
        Commands::Undone { name } => {
            store.mark_incomplete(&name)?;
            println!("Marked '{name}' incomplete");
        }
        Commands::List {
            completed,
            month,
            category,
            sort,
        } => {
            list_tasks(&store, completed, month, category.as_deref(), sort)?;
        }
        Commands::Clear => {
            store.clear_all();
            println!("All tasks deleted");
        }
    }

    Ok(())
}

fn init_logging() -> Result<()> {
    let stdout = ConsoleAppender::builder().build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}

/// The same shape check the original entry form enforced: four digits, a
/// dash, two digits, a dash, two digits. The store itself stays permissive
/// so legacy data that slipped past older versions still loads.
fn check_due_date(due: &str) -> Result<()> {
    let bytes = due.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && due
            .chars()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit());
    if !well_formed {
        bail!("invalid due date '{due}', expected YYYY-MM-DD");
    }
    Ok(())
}

fn list_tasks(
    store: &TaskStore,
    completed: bool,
    month: Option<u32>,
    category: Option<&str>,
    sort: bool,
) -> Result<()> {
    let snapshot = store.all_tasks();
    let mut tasks = query::by_completion(&snapshot, completed);
    if let Some(month) = month {
        tasks = query::by_month(&tasks, month, completed)?;
    }
    if let Some(category) = category {
        tasks = query::by_category(&tasks, category, completed);
    }
    if sort {
        tasks = query::sorted(&tasks);
    }

    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }
    println!(
        "{:<30} {:<15} {:<12} {:<8}",
        "Name", "Category", "Due Date", "Priority"
    );
    for task in &tasks {
        println!(
            "{:<30} {:<15} {:<12} {:<8}",
            task.name, task.category, task.due_date, task.priority
        );
    }
    Ok(())
}
