use anyhow::Result;
use sked_core::clock::Clock;
use sked_core::repository::Repository;
use sked_core::scheduler::Scheduler;

use crate::cli::ListCommand;
use crate::views::table;

pub async fn list_tasks<R: Repository, C: Clock>(
    scheduler: &Scheduler<R, C>,
    command: ListCommand,
) -> Result<()> {
    let tasks = scheduler.list().await?;

    if command.json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
    } else {
        table::display_tasks(&tasks, scheduler.today());
    }

    Ok(())
}
