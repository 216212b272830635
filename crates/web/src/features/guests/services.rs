use sqlx::PgPool;
use storage::{
    dto::guest::GuestDetailResponse, error::Result, models::Guest,
    repository::guest::GuestRepository, resolve, scoring::ScoringMode,
};

/// List all guests
pub async fn list_guests(pool: &PgPool) -> Result<Vec<Guest>> {
    GuestRepository::new(pool).list().await
}

/// Get guest by ID
pub async fn get_guest_by_id(pool: &PgPool, id: i32) -> Result<Guest> {
    let id = resolve::entity_id(id)?;
    GuestRepository::new(pool).find_by_id(id).await
}

/// Get guest by slug
pub async fn get_guest_by_slug(pool: &PgPool, slug: &str) -> Result<Guest> {
    let slug = resolve::slug(slug)?;
    GuestRepository::new(pool).find_by_slug(slug).await
}

/// Get a uniformly random guest
pub async fn get_random_guest(pool: &PgPool) -> Result<Guest> {
    let repo = GuestRepository::new(pool);
    let id = repo.random_id().await?;
    repo.find_by_id(id).await
}

/// List details for all guests
pub async fn list_guest_details(
    pool: &PgPool,
    mode: ScoringMode,
) -> Result<Vec<GuestDetailResponse>> {
    GuestRepository::new(pool).list_details(mode).await
}

/// Get guest details with appearance history
pub async fn get_guest_details_by_id(
    pool: &PgPool,
    id: i32,
    mode: ScoringMode,
) -> Result<GuestDetailResponse> {
    let id = resolve::entity_id(id)?;
    GuestRepository::new(pool).find_detail_by_id(id, mode).await
}

pub async fn get_guest_details_by_slug(
    pool: &PgPool,
    slug: &str,
    mode: ScoringMode,
) -> Result<GuestDetailResponse> {
    let slug = resolve::slug(slug)?;
    GuestRepository::new(pool)
        .find_detail_by_slug(slug, mode)
        .await
}

/// Get details for a uniformly random guest
pub async fn get_random_guest_details(
    pool: &PgPool,
    mode: ScoringMode,
) -> Result<GuestDetailResponse> {
    let repo = GuestRepository::new(pool);
    let id = repo.random_id().await?;
    repo.find_detail_by_id(id, mode).await
}
