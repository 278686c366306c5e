use anyhow::Result;
use dialoguer::Confirm;
use sked_core::clock::Clock;
use sked_core::repository::Repository;
use sked_core::scheduler::Scheduler;

use crate::cli::DeleteCommand;

pub async fn delete_task<R: Repository, C: Clock>(
    scheduler: &Scheduler<R, C>,
    command: DeleteCommand,
) -> Result<()> {
    let task = scheduler.get(command.id).await?;

    if !command.force {
        let confirmation = Confirm::new()
            .with_prompt(format!(
                "Are you sure you want to delete task '{}'?",
                task.title
            ))
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirmation {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    scheduler.delete(command.id).await?;
    println!("Deleted task {}.", command.id);
    Ok(())
}
