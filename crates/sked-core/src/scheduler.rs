//! Task lifecycle: create, update, complete, delete.
//!
//! The scheduler owns the overdue-date policy and calls the recurrence
//! engine to derive concrete due dates; persistence goes through the
//! injected [`Repository`] and "today" comes from the injected [`Clock`].

use chrono::NaiveDate;

use crate::clock::Clock;
use crate::error::CoreError;
use crate::models::{Completion, NewTask, Task};
use crate::recurrence;
use crate::repository::Repository;

pub struct Scheduler<R, C> {
    repo: R,
    clock: C,
}

impl<R: Repository, C: Clock> Scheduler<R, C> {
    pub fn new(repo: R, clock: C) -> Self {
        Self { repo, clock }
    }

    /// Resolves the due date shared by [`create`](Self::create) and
    /// [`update`](Self::update), evaluated once against today:
    ///
    /// - missing date defaults to today;
    /// - a date on-or-after today is kept as requested;
    /// - an overdue one-off snaps to today (treated as due now);
    /// - an overdue recurring task advances through the engine until it is
    ///   due in the future.
    fn resolve_date(&self, task: &NewTask) -> NaiveDate {
        let today = self.clock.today();
        let requested = task.date.unwrap_or(today);
        if requested >= today {
            return requested;
        }
        match task.repeat {
            None => today,
            Some(rule) => rule.next_after(today, requested),
        }
    }

    /// Creates a task and returns its assigned identifier.
    pub async fn create(&self, task: NewTask) -> Result<i64, CoreError> {
        if task.title.is_empty() {
            return Err(CoreError::EmptyTitle);
        }
        let date = self.resolve_date(&task);
        self.repo
            .insert_task(date, &task.title, &task.comment, task.repeat)
            .await
    }

    /// Replaces a task's fields, applying the same validation and
    /// overdue-date policy as [`create`](Self::create).
    pub async fn update(&self, id: i64, task: NewTask) -> Result<(), CoreError> {
        if task.title.is_empty() {
            return Err(CoreError::EmptyTitle);
        }
        let date = self.resolve_date(&task);
        self.repo
            .update_task(id, date, &task.title, &task.comment, task.repeat)
            .await
    }

    /// Completes a task: a one-off is deleted, a recurring task has its due
    /// date advanced strictly past today. On any error the stored row is
    /// left untouched.
    ///
    /// Completing an already-completed one-off yields
    /// [`CoreError::NotFound`], which callers should read as "already done".
    pub async fn complete(&self, id: i64) -> Result<Completion, CoreError> {
        let task = self.repo.get_task(id).await?;
        match task.repeat {
            None => {
                self.repo.delete_task(id).await?;
                Ok(Completion::Finished)
            }
            Some(rule) => {
                let next = rule.next_after(self.clock.today(), task.date);
                self.repo
                    .update_task(id, next, &task.title, &task.comment, task.repeat)
                    .await?;
                Ok(Completion::Rescheduled(next))
            }
        }
    }

    /// Today according to the injected clock, exposed for display layers.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub async fn delete(&self, id: i64) -> Result<(), CoreError> {
        self.repo.delete_task(id).await
    }

    pub async fn get(&self, id: i64) -> Result<Task, CoreError> {
        self.repo.get_task(id).await
    }

    pub async fn list(&self) -> Result<Vec<Task>, CoreError> {
        self.repo.list_tasks().await
    }

    /// Previews the next due date for a rule without touching the store.
    /// `reference` defaults to today.
    pub fn next_date(
        &self,
        reference: Option<NaiveDate>,
        start: NaiveDate,
        repeat: &str,
    ) -> Result<NaiveDate, CoreError> {
        let reference = reference.unwrap_or_else(|| self.clock.today());
        Ok(recurrence::next_due_date(reference, start, repeat)?)
    }
}
