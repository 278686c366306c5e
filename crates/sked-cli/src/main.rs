use clap::Parser;
use owo_colors::{OwoColorize, Style};
use sked_core::clock::SystemClock;
use sked_core::db;
use sked_core::error::{CoreError, RuleError};
use sked_core::repository::SqliteRepository;
use sked_core::scheduler::Scheduler;

mod cli;
mod commands;
mod config;
mod views;

#[tokio::main]
async fn main() {
    let config = config::Config::new().unwrap_or_default();
    let pool = match db::establish_connection(&config.db_path).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };
    let scheduler = Scheduler::new(SqliteRepository::new(pool), SystemClock);

    let cli = cli::Cli::parse();

    let result = match cli.command {
        cli::Commands::Add(command) => commands::add::add_task(&scheduler, command).await,
        cli::Commands::List(command) => commands::list::list_tasks(&scheduler, command).await,
        cli::Commands::Done(command) => commands::done::done_task(&scheduler, command).await,
        cli::Commands::Edit(command) => commands::edit::edit_task(&scheduler, command).await,
        cli::Commands::Delete(command) => commands::delete::delete_task(&scheduler, command).await,
        cli::Commands::Next(command) => commands::next::next_date(&scheduler, command),
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::NotFound(id) => {
                eprintln!("{} Task {} not found.", "Error:".style(error_style), id);
            }
            CoreError::EmptyTitle => {
                eprintln!(
                    "{} A task needs a non-empty title.",
                    "Error:".style(error_style)
                );
            }
            CoreError::InvalidDate(s) => {
                eprintln!(
                    "{} Invalid date '{}': expected YYYYMMDD.",
                    "Error:".style(error_style),
                    s.yellow()
                );
            }
            CoreError::Recurrence(rule_err) => {
                eprintln!("{} {}", "Error:".style(error_style), rule_err);
            }
            _ => eprintln!("{} {}", "Error:".style(error_style), err),
        }
    } else if let Some(rule_err) = err.downcast_ref::<RuleError>() {
        eprintln!("{} {}", "Error:".style(error_style), rule_err);
    } else {
        eprintln!("{} {}", "Error:".style(error_style), err);
    }
}
