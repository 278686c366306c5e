//! # Sked Core Library
//!
//! The engine room of `sked`, a small personal task scheduler. Tasks carry a
//! due date in the canonical `YYYYMMDD` form and an optional recurrence rule
//! (`y` for yearly, `d:N` for every `N` days). This crate owns the two pieces
//! of real logic in the system:
//!
//! - [`recurrence`]: a pure engine computing the next due date strictly after
//!   a reference date
//! - [`scheduler`]: the task lifecycle (create, update, complete, delete) and
//!   its overdue-date policy
//!
//! Everything else is a collaborator: [`repository`] persists tasks in
//! SQLite, [`clock`] supplies "today" so the lifecycle is deterministic under
//! test, and [`error`] carries the failure kinds.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use sked_core::{
//!     clock::SystemClock, db, models::NewTask,
//!     repository::SqliteRepository, scheduler::Scheduler,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = db::establish_connection("sked.db").await?;
//!     let scheduler = Scheduler::new(SqliteRepository::new(pool), SystemClock);
//!
//!     let id = scheduler
//!         .create(NewTask {
//!             title: "Water the plants".to_string(),
//!             repeat: Some("d:3".parse()?),
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("Created task {id}");
//!
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod db;
pub mod error;
pub mod models;
pub mod recurrence;
pub mod repository;
pub mod scheduler;
