use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use sked_core::clock::Clock;
use sked_core::models::{format_date, Completion};
use sked_core::repository::Repository;
use sked_core::scheduler::Scheduler;

use crate::cli::DoneCommand;

pub async fn done_task<R: Repository, C: Clock>(
    scheduler: &Scheduler<R, C>,
    command: DoneCommand,
) -> Result<()> {
    let success_style = Style::new().green().bold();

    match scheduler.complete(command.id).await? {
        Completion::Finished => {
            println!("{} Task {} completed and removed.", "✓".style(success_style), command.id);
        }
        Completion::Rescheduled(next) => {
            println!(
                "{} Task {} completed; next due {}.",
                "✓".style(success_style),
                command.id,
                format_date(next).cyan()
            );
        }
    }

    Ok(())
}
