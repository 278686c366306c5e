use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use sked_core::clock::Clock;
use sked_core::models::{format_date, parse_date, NewTask, Rule};
use sked_core::repository::Repository;
use sked_core::scheduler::Scheduler;

use crate::cli::AddCommand;

pub async fn add_task<R: Repository, C: Clock>(
    scheduler: &Scheduler<R, C>,
    command: AddCommand,
) -> Result<()> {
    let date = command.date.as_deref().map(parse_date).transpose()?;
    let repeat = command
        .repeat
        .as_deref()
        .map(|s| s.parse::<Rule>())
        .transpose()?;

    let id = scheduler
        .create(NewTask {
            title: command.title,
            comment: command.comment,
            date,
            repeat,
        })
        .await?;

    let task = scheduler.get(id).await?;

    let success_style = Style::new().green().bold();
    let info_style = Style::new().blue();

    println!(
        "{} Created task: {}",
        "✓".style(success_style),
        task.title.bold()
    );
    println!("  {} ID: {}", "→".style(info_style), id.yellow());
    println!(
        "  {} Due: {}",
        "→".style(info_style),
        format_date(task.date).cyan()
    );
    if let Some(rule) = task.repeat {
        println!("  {} Repeats: {}", "→".style(info_style), rule);
    }

    Ok(())
}
