use anyhow::Result;
use sked_core::clock::Clock;
use sked_core::models::{format_date, parse_date};
use sked_core::repository::Repository;
use sked_core::scheduler::Scheduler;

use crate::cli::NextCommand;

pub fn next_date<R: Repository, C: Clock>(
    scheduler: &Scheduler<R, C>,
    command: NextCommand,
) -> Result<()> {
    let start = parse_date(&command.date)?;
    let reference = command.from.as_deref().map(parse_date).transpose()?;

    let next = scheduler.next_date(reference, start, &command.repeat)?;
    println!("{}", format_date(next));
    Ok(())
}
