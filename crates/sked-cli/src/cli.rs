use clap::{Parser, Subcommand};

/// A small personal task scheduler with date recurrence
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a new task
    Add(AddCommand),
    /// List scheduled tasks
    List(ListCommand),
    /// Mark a task as completed
    Done(DoneCommand),
    /// Edit a task
    Edit(EditCommand),
    /// Delete a task
    Delete(DeleteCommand),
    /// Preview the next due date for a recurrence rule
    Next(NextCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The task title
    pub title: String,
    /// Free-text comment
    #[clap(short, long, default_value = "")]
    pub comment: String,
    /// Due date (YYYYMMDD); defaults to today
    #[clap(short, long)]
    pub date: Option<String>,
    /// Recurrence rule: "y" (yearly) or "d:N" (every N days, N <= 399)
    #[clap(short, long)]
    pub repeat: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Print tasks as JSON instead of a table
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DoneCommand {
    /// The ID of the task to complete
    pub id: i64,
}

#[derive(Parser, Debug, Clone)]
pub struct EditCommand {
    /// The ID of the task to edit
    pub id: i64,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub comment: Option<String>,

    /// New due date (YYYYMMDD)
    #[arg(long)]
    pub date: Option<String>,

    /// New recurrence rule
    #[arg(long)]
    pub repeat: Option<String>,
    /// Remove the recurrence rule (convert to a one-off task)
    #[arg(long, conflicts_with = "repeat")]
    pub repeat_clear: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    /// The ID of the task to delete
    pub id: i64,
    /// Force deletion without confirmation
    #[clap(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct NextCommand {
    /// Start date of the schedule (YYYYMMDD)
    #[clap(long)]
    pub date: String,
    /// Recurrence rule to apply
    #[clap(long)]
    pub repeat: String,
    /// Reference date (YYYYMMDD); defaults to today
    #[clap(long)]
    pub from: Option<String>,
}
