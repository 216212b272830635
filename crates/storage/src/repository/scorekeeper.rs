use sqlx::PgPool;

use crate::dto::scorekeeper::ScorekeeperDetailResponse;
use crate::error::{Result, StorageError};
use crate::models::{Scorekeeper, ScorekeeperAppearanceRow};

pub struct ScorekeeperRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScorekeeperRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all scorekeepers
    pub async fn list(&self) -> Result<Vec<Scorekeeper>> {
        let scorekeepers = sqlx::query_as::<_, Scorekeeper>(
            r#"
            SELECT sk.scorekeeperid AS id, sk.scorekeeper AS name, sk.scorekeeperslug AS slug,
                   sk.scorekeepergender AS gender, p.pronouns AS pronouns
            FROM ww_scorekeepers sk
            LEFT JOIN ww_pronouns p ON p.pronounsid = sk.scorekeeperpronounsid
            ORDER BY sk.scorekeeper
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(scorekeepers)
    }

    /// Find scorekeeper by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Scorekeeper> {
        let scorekeeper = sqlx::query_as::<_, Scorekeeper>(
            r#"
            SELECT sk.scorekeeperid AS id, sk.scorekeeper AS name, sk.scorekeeperslug AS slug,
                   sk.scorekeepergender AS gender, p.pronouns AS pronouns
            FROM ww_scorekeepers sk
            LEFT JOIN ww_pronouns p ON p.pronounsid = sk.scorekeeperpronounsid
            WHERE sk.scorekeeperid = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(scorekeeper)
    }

    /// Find scorekeeper by slug
    pub async fn find_by_slug(&self, slug: &str) -> Result<Scorekeeper> {
        let scorekeeper = sqlx::query_as::<_, Scorekeeper>(
            r#"
            SELECT sk.scorekeeperid AS id, sk.scorekeeper AS name, sk.scorekeeperslug AS slug,
                   sk.scorekeepergender AS gender, p.pronouns AS pronouns
            FROM ww_scorekeepers sk
            LEFT JOIN ww_pronouns p ON p.pronounsid = sk.scorekeeperpronounsid
            WHERE sk.scorekeeperslug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(scorekeeper)
    }

    /// Uniformly random scorekeeper ID; NotFound when the table is empty
    pub async fn random_id(&self) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            "SELECT scorekeeperid FROM ww_scorekeepers ORDER BY RANDOM() LIMIT 1",
        )
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(id)
    }

    /// Get detailed scorekeeper info with appearance history
    pub async fn find_detail_by_id(&self, id: i32) -> Result<ScorekeeperDetailResponse> {
        let scorekeeper = self.find_by_id(id).await?;
        let rows = self.appearances(scorekeeper.id).await?;

        Ok(ScorekeeperDetailResponse::compose(scorekeeper, rows))
    }

    pub async fn find_detail_by_slug(&self, slug: &str) -> Result<ScorekeeperDetailResponse> {
        let scorekeeper = self.find_by_slug(slug).await?;
        let rows = self.appearances(scorekeeper.id).await?;

        Ok(ScorekeeperDetailResponse::compose(scorekeeper, rows))
    }

    pub async fn list_details(&self) -> Result<Vec<ScorekeeperDetailResponse>> {
        let scorekeepers = self.list().await?;

        let mut details = Vec::with_capacity(scorekeepers.len());
        for scorekeeper in scorekeepers {
            let rows = self.appearances(scorekeeper.id).await?;
            details.push(ScorekeeperDetailResponse::compose(scorekeeper, rows));
        }

        Ok(details)
    }

    async fn appearances(&self, scorekeeper_id: i32) -> Result<Vec<ScorekeeperAppearanceRow>> {
        let rows = sqlx::query_as::<_, ScorekeeperAppearanceRow>(
            r#"
            SELECT s.showid AS show_id,
                   s.showdate AS date,
                   s.bestof AS best_of,
                   (s.repeatshowid IS NOT NULL) AS repeat_show,
                   skm.guest AS guest,
                   skm.description AS description
            FROM ww_showskmap skm
            JOIN ww_shows s ON s.showid = skm.showid
            WHERE skm.scorekeeperid = $1
            ORDER BY s.showdate ASC
            "#,
        )
        .bind(scorekeeper_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
