//! SQLite-backed project document store.
//!
//! Each project is one row; its tasks live in a JSON array column. Appends are
//! done in SQL with `json_insert(.., '$[#]', ..)` so existing tasks are never
//! rewritten, and every mutating call commits as one unit.

use crate::{DbError, ProjectStore, Result as DbErrorResult};

use pom_core::{NewProject, Project, ProjectPatch, Task};

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::debug;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteRow, SqliteSynchronous,
};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const FIND_ALL: &str = "SELECT id, project_name, tasks FROM projects ORDER BY seq";
const FIND_BY_ID: &str = "SELECT id, project_name, tasks FROM projects WHERE id = ?";

/// Pool settings for [`SqliteProjectStore::connect`]
#[derive(Debug, Clone, Copy)]
pub struct StoreOptions {
    pub max_connections: u32,
    pub busy_timeout: Duration,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            max_connections: 5,
            busy_timeout: Duration::from_secs(5),
        }
    }
}

#[derive(Clone)]
pub struct SqliteProjectStore {
    pool: SqlitePool,
}

impl SqliteProjectStore {
    /// Wrap an existing pool. The caller is responsible for migrations.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database file and run migrations.
    pub async fn connect(path: &Path, options: StoreOptions) -> DbErrorResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(options.max_connections)
            .connect_with(
                SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true)
                    .journal_mode(SqliteJournalMode::Wal)
                    .synchronous(SqliteSynchronous::Normal)
                    .busy_timeout(options.busy_timeout),
            )
            .await?;

        let store = Self::new(pool);
        store.migrate().await?;
        Ok(store)
    }

    /// Private in-memory database, migrated. One connection, since every
    /// `:memory:` connection is a separate database.
    pub async fn connect_in_memory() -> DbErrorResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(SqliteConnectOptions::new().filename(":memory:"))
            .await?;

        let store = Self::new(pool);
        store.migrate().await?;
        Ok(store)
    }

    pub async fn migrate(&self) -> DbErrorResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn row_to_project(row: &SqliteRow) -> DbErrorResult<Project> {
        let tasks_json: String = row.try_get("tasks")?;
        let tasks: Vec<Task> = serde_json::from_str(&tasks_json)?;

        Ok(Project {
            id: row.try_get("id")?,
            project_name: row.try_get("project_name")?,
            tasks,
        })
    }
}

#[async_trait]
impl ProjectStore for SqliteProjectStore {
    async fn find_all(&self) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query(FIND_ALL).fetch_all(&self.pool).await?;

        rows.iter()
            .map(Self::row_to_project)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query(FIND_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_project).transpose()
    }

    async fn create(&self, project: NewProject) -> DbErrorResult<Project> {
        let id = Uuid::new_v4().to_string();
        let tasks_json = serde_json::to_string(&project.tasks)?;

        sqlx::query("INSERT INTO projects (id, project_name, tasks) VALUES (?, ?, ?)")
            .bind(&id)
            .bind(&project.project_name)
            .bind(&tasks_json)
            .execute(&self.pool)
            .await?;

        debug!("Inserted project {} with {} tasks", id, project.tasks.len());

        Ok(project.into_project(id))
    }

    async fn push_tasks(&self, id: &str, tasks: Vec<Task>) -> DbErrorResult<Option<Project>> {
        let mut tx = self.pool.begin().await?;

        // The first UPDATE takes the write lock, so the final SELECT sees
        // exactly this call's appends on top of the committed state.
        for task in &tasks {
            let task_json = serde_json::to_string(task)?;
            let result = sqlx::query(
                "UPDATE projects SET tasks = json_insert(tasks, '$[#]', json(?)) WHERE id = ?",
            )
            .bind(&task_json)
            .bind(id)
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                // Unknown id; dropping the transaction rolls it back.
                return Ok(None);
            }
        }

        let row = sqlx::query(FIND_BY_ID)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!("Pushed {} tasks into project {}", tasks.len(), id);

        row.as_ref().map(Self::row_to_project).transpose()
    }

    async fn set_fields(&self, id: &str, patch: ProjectPatch) -> DbErrorResult<Option<Project>> {
        let Some(project_name) = patch.project_name else {
            return self.find_by_id(id).await;
        };

        let row = sqlx::query(
            "UPDATE projects SET project_name = ? WHERE id = ? RETURNING id, project_name, tasks",
        )
        .bind(&project_name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_project).transpose()
    }

    async fn delete_by_id(&self, id: &str) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query("DELETE FROM projects WHERE id = ? RETURNING id, project_name, tasks")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_project).transpose()
    }

    async fn ping(&self) -> DbErrorResult<()> {
        if self.pool.is_closed() {
            return Err(DbError::Initialization {
                message: "connection pool is closed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
