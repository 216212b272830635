use sqlx::PgPool;

use crate::dto::location::LocationDetailResponse;
use crate::error::{Result, StorageError};
use crate::models::{Location, LocationRecordingRow};

pub struct LocationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LocationRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all locations
    pub async fn list(&self) -> Result<Vec<Location>> {
        let locations = sqlx::query_as::<_, Location>(
            r#"
            SELECT locationid AS id, city, state, venue, locationslug AS slug,
                   latitude, longitude
            FROM ww_locations
            ORDER BY venue, city
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(locations)
    }

    /// Find location by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Location> {
        let location = sqlx::query_as::<_, Location>(
            r#"
            SELECT locationid AS id, city, state, venue, locationslug AS slug,
                   latitude, longitude
            FROM ww_locations
            WHERE locationid = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(location)
    }

    /// Find location by slug
    pub async fn find_by_slug(&self, slug: &str) -> Result<Location> {
        let location = sqlx::query_as::<_, Location>(
            r#"
            SELECT locationid AS id, city, state, venue, locationslug AS slug,
                   latitude, longitude
            FROM ww_locations
            WHERE locationslug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(location)
    }

    /// Uniformly random location ID; NotFound when the table is empty
    pub async fn random_id(&self) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            "SELECT locationid FROM ww_locations ORDER BY RANDOM() LIMIT 1",
        )
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(id)
    }

    /// Get detailed location info with recording history
    pub async fn find_detail_by_id(&self, id: i32) -> Result<LocationDetailResponse> {
        let location = self.find_by_id(id).await?;
        let rows = self.recordings(location.id).await?;

        Ok(LocationDetailResponse::compose(location, rows))
    }

    pub async fn find_detail_by_slug(&self, slug: &str) -> Result<LocationDetailResponse> {
        let location = self.find_by_slug(slug).await?;
        let rows = self.recordings(location.id).await?;

        Ok(LocationDetailResponse::compose(location, rows))
    }

    pub async fn list_details(&self) -> Result<Vec<LocationDetailResponse>> {
        let locations = self.list().await?;

        let mut details = Vec::with_capacity(locations.len());
        for location in locations {
            let rows = self.recordings(location.id).await?;
            details.push(LocationDetailResponse::compose(location, rows));
        }

        Ok(details)
    }

    async fn recordings(&self, location_id: i32) -> Result<Vec<LocationRecordingRow>> {
        let rows = sqlx::query_as::<_, LocationRecordingRow>(
            r#"
            SELECT s.showid AS show_id,
                   s.showdate AS date,
                   s.bestof AS best_of,
                   (s.repeatshowid IS NOT NULL) AS repeat_show
            FROM ww_showlocationmap lm
            JOIN ww_shows s ON s.showid = lm.showid
            WHERE lm.locationid = $1
            ORDER BY s.showdate ASC
            "#,
        )
        .bind(location_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
