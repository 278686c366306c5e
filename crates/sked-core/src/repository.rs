//! Data access layer. Dates and rules cross this boundary in their canonical
//! textual forms (`YYYYMMDD`, `""`/`"y"`/`"d:N"`) and nowhere else.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::FromRow;

use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{format_date, parse_date, Rule, Task};

#[async_trait]
pub trait Repository: Send + Sync {
    async fn get_task(&self, id: i64) -> Result<Task, CoreError>;
    async fn insert_task(
        &self,
        date: NaiveDate,
        title: &str,
        comment: &str,
        repeat: Option<Rule>,
    ) -> Result<i64, CoreError>;
    async fn update_task(
        &self,
        id: i64,
        date: NaiveDate,
        title: &str,
        comment: &str,
        repeat: Option<Rule>,
    ) -> Result<(), CoreError>;
    async fn delete_task(&self, id: i64) -> Result<(), CoreError>;
    async fn list_tasks(&self) -> Result<Vec<Task>, CoreError>;
}

/// Row shape of the `scheduler` table; conversion to [`Task`] parses the
/// textual date and rule columns.
#[derive(Debug, FromRow)]
struct TaskRow {
    id: i64,
    date: String,
    title: String,
    comment: String,
    repeat: String,
}

impl TryFrom<TaskRow> for Task {
    type Error = CoreError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        Ok(Task {
            id: row.id,
            date: parse_date(&row.date)?,
            title: row.title,
            comment: row.comment,
            repeat: Rule::parse_opt(&row.repeat)?,
        })
    }
}

pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for SqliteRepository {
    async fn get_task(&self, id: i64) -> Result<Task, CoreError> {
        let row: Option<TaskRow> =
            sqlx::query_as("SELECT id, date, title, comment, repeat FROM scheduler WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        row.ok_or(CoreError::NotFound(id))?.try_into()
    }

    async fn insert_task(
        &self,
        date: NaiveDate,
        title: &str,
        comment: &str,
        repeat: Option<Rule>,
    ) -> Result<i64, CoreError> {
        let result =
            sqlx::query("INSERT INTO scheduler (date, title, comment, repeat) VALUES ($1, $2, $3, $4)")
                .bind(format_date(date))
                .bind(title)
                .bind(comment)
                .bind(repeat.map(|r| r.to_string()).unwrap_or_default())
                .execute(&self.pool)
                .await?;
        Ok(result.last_insert_rowid())
    }

    async fn update_task(
        &self,
        id: i64,
        date: NaiveDate,
        title: &str,
        comment: &str,
        repeat: Option<Rule>,
    ) -> Result<(), CoreError> {
        let result = sqlx::query(
            "UPDATE scheduler SET date = $1, title = $2, comment = $3, repeat = $4 WHERE id = $5",
        )
        .bind(format_date(date))
        .bind(title)
        .bind(comment)
        .bind(repeat.map(|r| r.to_string()).unwrap_or_default())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id));
        }
        Ok(())
    }

    async fn delete_task(&self, id: i64) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM scheduler WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id));
        }
        Ok(())
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, CoreError> {
        let rows: Vec<TaskRow> =
            sqlx::query_as("SELECT id, date, title, comment, repeat FROM scheduler ORDER BY date, id")
                .fetch_all(&self.pool)
                .await?;
        rows.into_iter().map(Task::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::establish_connection;

    // Each idle pool connection would get its own `:memory:` database, so
    // tests run against a throwaway file instead.
    async fn setup() -> (SqliteRepository, tempfile::TempDir) {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let pool = establish_connection(&db_path.to_string_lossy())
            .await
            .expect("Failed to establish test database connection");
        (SqliteRepository::new(pool), temp_dir)
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let (repo, _temp_dir) = setup().await;
        let first = repo
            .insert_task(ymd(2025, 1, 1), "first", "", None)
            .await
            .unwrap();
        let second = repo
            .insert_task(ymd(2025, 1, 2), "second", "", Some(Rule::Yearly))
            .await
            .unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn round_trips_date_and_rule_through_text_columns() {
        let (repo, _temp_dir) = setup().await;
        let id = repo
            .insert_task(ymd(2024, 2, 29), "leap", "note", Some(Rule::EveryDays(399)))
            .await
            .unwrap();

        let task = repo.get_task(id).await.unwrap();
        assert_eq!(task.date, ymd(2024, 2, 29));
        assert_eq!(task.title, "leap");
        assert_eq!(task.comment, "note");
        assert_eq!(task.repeat, Some(Rule::EveryDays(399)));
    }

    #[tokio::test]
    async fn missing_ids_report_not_found() {
        let (repo, _temp_dir) = setup().await;
        assert!(matches!(repo.get_task(42).await, Err(CoreError::NotFound(42))));
        assert!(matches!(
            repo.delete_task(42).await,
            Err(CoreError::NotFound(42))
        ));
        assert!(matches!(
            repo.update_task(42, ymd(2025, 1, 1), "t", "", None).await,
            Err(CoreError::NotFound(42))
        ));
    }

    #[tokio::test]
    async fn list_orders_by_date() {
        let (repo, _temp_dir) = setup().await;
        repo.insert_task(ymd(2025, 3, 1), "b", "", None).await.unwrap();
        repo.insert_task(ymd(2025, 1, 1), "a", "", None).await.unwrap();
        repo.insert_task(ymd(2026, 1, 1), "c", "", None).await.unwrap();

        let titles: Vec<String> = repo
            .list_tasks()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }
}
