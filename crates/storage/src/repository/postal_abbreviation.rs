use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::PostalAbbreviation;

pub struct PostalAbbreviationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PostalAbbreviationRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all abbreviation strings
    pub async fn list_abbreviations(&self) -> Result<Vec<String>> {
        let abbreviations = sqlx::query_scalar::<_, String>(
            r#"
            SELECT postal_abbreviation
            FROM ww_postal_abbreviations
            ORDER BY postal_abbreviation
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(abbreviations)
    }

    /// List all abbreviation rows with names and countries
    pub async fn list_details(&self) -> Result<Vec<PostalAbbreviation>> {
        let rows = sqlx::query_as::<_, PostalAbbreviation>(
            r#"
            SELECT postal_abbreviation AS abbreviation, name, country
            FROM ww_postal_abbreviations
            ORDER BY postal_abbreviation
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Find one abbreviation row
    pub async fn find_by_abbreviation(&self, abbreviation: &str) -> Result<PostalAbbreviation> {
        let row = sqlx::query_as::<_, PostalAbbreviation>(
            r#"
            SELECT postal_abbreviation AS abbreviation, name, country
            FROM ww_postal_abbreviations
            WHERE postal_abbreviation = $1
            "#,
        )
        .bind(abbreviation)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(row)
    }
}
