use sqlx::PgPool;
use storage::{
    dto::location::LocationDetailResponse, error::Result, models::Location,
    repository::location::LocationRepository, resolve,
};

/// List all locations
pub async fn list_locations(pool: &PgPool) -> Result<Vec<Location>> {
    LocationRepository::new(pool).list().await
}

/// Get location by ID
pub async fn get_location_by_id(pool: &PgPool, id: i32) -> Result<Location> {
    let id = resolve::entity_id(id)?;
    LocationRepository::new(pool).find_by_id(id).await
}

/// Get location by slug
pub async fn get_location_by_slug(pool: &PgPool, slug: &str) -> Result<Location> {
    let slug = resolve::slug(slug)?;
    LocationRepository::new(pool).find_by_slug(slug).await
}

/// Get a uniformly random location
pub async fn get_random_location(pool: &PgPool) -> Result<Location> {
    let repo = LocationRepository::new(pool);
    let id = repo.random_id().await?;
    repo.find_by_id(id).await
}

/// List details for all locations
pub async fn list_location_details(pool: &PgPool) -> Result<Vec<LocationDetailResponse>> {
    LocationRepository::new(pool).list_details().await
}

/// Get location details with recording history
pub async fn get_location_details_by_id(pool: &PgPool, id: i32) -> Result<LocationDetailResponse> {
    let id = resolve::entity_id(id)?;
    LocationRepository::new(pool).find_detail_by_id(id).await
}

pub async fn get_location_details_by_slug(
    pool: &PgPool,
    slug: &str,
) -> Result<LocationDetailResponse> {
    let slug = resolve::slug(slug)?;
    LocationRepository::new(pool).find_detail_by_slug(slug).await
}

/// Get details for a uniformly random location
pub async fn get_random_location_details(pool: &PgPool) -> Result<LocationDetailResponse> {
    let repo = LocationRepository::new(pool);
    let id = repo.random_id().await?;
    repo.find_detail_by_id(id).await
}
