use crate::Result as DbErrorResult;

use cb_core::Output;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

pub struct OutputRepository;

impl OutputRepository {
    /// Insert one payload and return the stored row.
    pub async fn insert<'e, E>(executor: E, output: &str) -> DbErrorResult<Output>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
              INSERT INTO users (output)
              VALUES (?)
              RETURNING id, output
              "#,
        )
        .bind(output)
        .fetch_one(executor)
        .await?;

        Self::map_row(&row)
    }

    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> DbErrorResult<Option<Output>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
              SELECT id, output
              FROM users
              WHERE id = ?
              "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    /// All rows, most recently inserted first
    pub async fn find_all<'e, E>(executor: E) -> DbErrorResult<Vec<Output>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
              SELECT id, output
              FROM users
              ORDER BY id DESC
              "#,
        )
        .fetch_all(executor)
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    fn map_row(row: &SqliteRow) -> DbErrorResult<Output> {
        Ok(Output {
            id: row.try_get("id")?,
            output: row.try_get("output")?,
        })
    }
}
