use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::Pronouns;

pub struct PronounsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PronounsRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all pronouns reference rows
    pub async fn list(&self) -> Result<Vec<Pronouns>> {
        let rows = sqlx::query_as::<_, Pronouns>(
            r#"
            SELECT pronounsid AS id, pronouns
            FROM ww_pronouns
            ORDER BY pronounsid
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Find pronouns row by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Pronouns> {
        let row = sqlx::query_as::<_, Pronouns>(
            r#"
            SELECT pronounsid AS id, pronouns
            FROM ww_pronouns
            WHERE pronounsid = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(row)
    }
}
