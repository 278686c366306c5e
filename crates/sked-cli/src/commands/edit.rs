use anyhow::Result;
use sked_core::clock::Clock;
use sked_core::models::{parse_date, NewTask, Rule};
use sked_core::repository::Repository;
use sked_core::scheduler::Scheduler;

use crate::cli::EditCommand;

/// Merges the given flags over the stored task and runs a full-record
/// update, which re-applies the overdue-date policy.
pub async fn edit_task<R: Repository, C: Clock>(
    scheduler: &Scheduler<R, C>,
    command: EditCommand,
) -> Result<()> {
    let existing = scheduler.get(command.id).await?;

    let date = match command.date.as_deref() {
        Some(s) => parse_date(s)?,
        None => existing.date,
    };
    let repeat = if command.repeat_clear {
        None
    } else {
        match command.repeat.as_deref() {
            Some(s) => Some(s.parse::<Rule>()?),
            None => existing.repeat,
        }
    };

    scheduler
        .update(
            command.id,
            NewTask {
                title: command.title.unwrap_or(existing.title),
                comment: command.comment.unwrap_or(existing.comment),
                date: Some(date),
                repeat,
            },
        )
        .await?;

    println!("Updated task {}.", command.id);
    Ok(())
}
