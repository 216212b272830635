use sqlx::PgPool;

use crate::dto::panelist::{BluffCounts, PanelistDetailResponse, PanelistScoresResponse};
use crate::error::{Result, StorageError};
use crate::models::{Panelist, PanelistAppearanceRow};
use crate::scoring::ScoringMode;

pub struct PanelistRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PanelistRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all panelists
    pub async fn list(&self) -> Result<Vec<Panelist>> {
        let panelists = sqlx::query_as::<_, Panelist>(
            r#"
            SELECT pn.panelistid AS id, pn.panelist AS name, pn.panelistslug AS slug,
                   pn.panelistgender AS gender, p.pronouns AS pronouns
            FROM ww_panelists pn
            LEFT JOIN ww_pronouns p ON p.pronounsid = pn.panelistpronounsid
            ORDER BY pn.panelist
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(panelists)
    }

    /// Find panelist by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Panelist> {
        let panelist = sqlx::query_as::<_, Panelist>(
            r#"
            SELECT pn.panelistid AS id, pn.panelist AS name, pn.panelistslug AS slug,
                   pn.panelistgender AS gender, p.pronouns AS pronouns
            FROM ww_panelists pn
            LEFT JOIN ww_pronouns p ON p.pronounsid = pn.panelistpronounsid
            WHERE pn.panelistid = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(panelist)
    }

    /// Find panelist by slug
    pub async fn find_by_slug(&self, slug: &str) -> Result<Panelist> {
        let panelist = sqlx::query_as::<_, Panelist>(
            r#"
            SELECT pn.panelistid AS id, pn.panelist AS name, pn.panelistslug AS slug,
                   pn.panelistgender AS gender, p.pronouns AS pronouns
            FROM ww_panelists pn
            LEFT JOIN ww_pronouns p ON p.pronounsid = pn.panelistpronounsid
            WHERE pn.panelistslug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(panelist)
    }

    /// Uniformly random panelist ID; NotFound when the table is empty
    pub async fn random_id(&self) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            "SELECT panelistid FROM ww_panelists ORDER BY RANDOM() LIMIT 1",
        )
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(id)
    }

    /// Get detailed panelist info: appearance history, scoring statistics,
    /// rank breakdown and bluff counts
    pub async fn find_detail_by_id(
        &self,
        id: i32,
        mode: ScoringMode,
    ) -> Result<PanelistDetailResponse> {
        let panelist = self.find_by_id(id).await?;
        self.compose_detail(panelist, mode).await
    }

    pub async fn find_detail_by_slug(
        &self,
        slug: &str,
        mode: ScoringMode,
    ) -> Result<PanelistDetailResponse> {
        let panelist = self.find_by_slug(slug).await?;
        self.compose_detail(panelist, mode).await
    }

    pub async fn list_details(&self, mode: ScoringMode) -> Result<Vec<PanelistDetailResponse>> {
        let panelists = self.list().await?;

        let mut details = Vec::with_capacity(panelists.len());
        for panelist in panelists {
            details.push(self.compose_detail(panelist, mode).await?);
        }

        Ok(details)
    }

    /// Ordered (date, score) pairs for one panelist
    pub async fn scores_by_id(&self, id: i32, mode: ScoringMode) -> Result<PanelistScoresResponse> {
        let panelist = self.find_by_id(id).await?;
        let rows = self.appearances(panelist.id).await?;

        Ok(PanelistScoresResponse::from_rows(panelist.id, rows, mode))
    }

    pub async fn scores_by_slug(
        &self,
        slug: &str,
        mode: ScoringMode,
    ) -> Result<PanelistScoresResponse> {
        let panelist = self.find_by_slug(slug).await?;
        let rows = self.appearances(panelist.id).await?;

        Ok(PanelistScoresResponse::from_rows(panelist.id, rows, mode))
    }

    async fn compose_detail(
        &self,
        panelist: Panelist,
        mode: ScoringMode,
    ) -> Result<PanelistDetailResponse> {
        let rows = self.appearances(panelist.id).await?;
        let bluffs = self.bluff_counts(panelist.id).await?;

        Ok(PanelistDetailResponse::compose(panelist, rows, bluffs, mode))
    }

    async fn appearances(&self, panelist_id: i32) -> Result<Vec<PanelistAppearanceRow>> {
        let rows = sqlx::query_as::<_, PanelistAppearanceRow>(
            r#"
            SELECT s.showid AS show_id,
                   s.showdate AS date,
                   s.bestof AS best_of,
                   (s.repeatshowid IS NOT NULL) AS repeat_show,
                   pm.panelistlrndstart AS lightning_round_start,
                   pm.panelistlrndcorrect AS lightning_round_correct,
                   pm.panelistscore AS score,
                   pm.panelistscore_decimal AS score_decimal,
                   pm.showpnlrank AS rank
            FROM ww_showpnlmap pm
            JOIN ww_shows s ON s.showid = pm.showid
            WHERE pm.panelistid = $1
            ORDER BY s.showdate ASC
            "#,
        )
        .bind(panelist_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    async fn bluff_counts(&self, panelist_id: i32) -> Result<BluffCounts> {
        let counts = sqlx::query_as::<_, BluffCounts>(
            r#"
            SELECT COUNT(*) FILTER (WHERE chosenbluffpnlid = $1) AS chosen,
                   COUNT(*) FILTER (WHERE correctbluffpnlid = $1) AS correct
            FROM ww_showbluffmap
            "#,
        )
        .bind(panelist_id)
        .fetch_one(self.pool)
        .await?;

        Ok(counts)
    }
}
