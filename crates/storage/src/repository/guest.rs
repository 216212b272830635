use sqlx::PgPool;

use crate::dto::guest::GuestDetailResponse;
use crate::error::{Result, StorageError};
use crate::models::{Guest, GuestAppearanceRow};
use crate::scoring::ScoringMode;

pub struct GuestRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> GuestRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all guests
    pub async fn list(&self) -> Result<Vec<Guest>> {
        let guests = sqlx::query_as::<_, Guest>(
            r#"
            SELECT guestid AS id, guest AS name, guestslug AS slug
            FROM ww_guests
            ORDER BY guest
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(guests)
    }

    /// Find guest by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Guest> {
        let guest = sqlx::query_as::<_, Guest>(
            r#"
            SELECT guestid AS id, guest AS name, guestslug AS slug
            FROM ww_guests
            WHERE guestid = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(guest)
    }

    /// Find guest by slug
    pub async fn find_by_slug(&self, slug: &str) -> Result<Guest> {
        let guest = sqlx::query_as::<_, Guest>(
            r#"
            SELECT guestid AS id, guest AS name, guestslug AS slug
            FROM ww_guests
            WHERE guestslug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(guest)
    }

    /// Uniformly random guest ID; NotFound when the table is empty
    pub async fn random_id(&self) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            "SELECT guestid FROM ww_guests ORDER BY RANDOM() LIMIT 1",
        )
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(id)
    }

    /// Get detailed guest info with appearance history
    pub async fn find_detail_by_id(
        &self,
        id: i32,
        mode: ScoringMode,
    ) -> Result<GuestDetailResponse> {
        let guest = self.find_by_id(id).await?;
        let rows = self.appearances(guest.id).await?;

        Ok(GuestDetailResponse::compose(guest, rows, mode))
    }

    pub async fn find_detail_by_slug(
        &self,
        slug: &str,
        mode: ScoringMode,
    ) -> Result<GuestDetailResponse> {
        let guest = self.find_by_slug(slug).await?;
        let rows = self.appearances(guest.id).await?;

        Ok(GuestDetailResponse::compose(guest, rows, mode))
    }

    pub async fn list_details(&self, mode: ScoringMode) -> Result<Vec<GuestDetailResponse>> {
        let guests = self.list().await?;

        let mut details = Vec::with_capacity(guests.len());
        for guest in guests {
            let rows = self.appearances(guest.id).await?;
            details.push(GuestDetailResponse::compose(guest, rows, mode));
        }

        Ok(details)
    }

    async fn appearances(&self, guest_id: i32) -> Result<Vec<GuestAppearanceRow>> {
        let rows = sqlx::query_as::<_, GuestAppearanceRow>(
            r#"
            SELECT s.showid AS show_id,
                   s.showdate AS date,
                   s.bestof AS best_of,
                   (s.repeatshowid IS NOT NULL) AS repeat_show,
                   gm.guestscore AS score,
                   gm.guestscore_decimal AS score_decimal,
                   gm.exception AS score_exception
            FROM ww_showguestmap gm
            JOIN ww_shows s ON s.showid = gm.showid
            WHERE gm.guestid = $1
            ORDER BY s.showdate ASC
            "#,
        )
        .bind(guest_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
