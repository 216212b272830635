use sqlx::PgPool;
use storage::{
    dto::scorekeeper::ScorekeeperDetailResponse, error::Result, models::Scorekeeper,
    repository::scorekeeper::ScorekeeperRepository, resolve,
};

/// List all scorekeepers
pub async fn list_scorekeepers(pool: &PgPool) -> Result<Vec<Scorekeeper>> {
    ScorekeeperRepository::new(pool).list().await
}

/// Get scorekeeper by ID
pub async fn get_scorekeeper_by_id(pool: &PgPool, id: i32) -> Result<Scorekeeper> {
    let id = resolve::entity_id(id)?;
    ScorekeeperRepository::new(pool).find_by_id(id).await
}

/// Get scorekeeper by slug
pub async fn get_scorekeeper_by_slug(pool: &PgPool, slug: &str) -> Result<Scorekeeper> {
    let slug = resolve::slug(slug)?;
    ScorekeeperRepository::new(pool).find_by_slug(slug).await
}

/// Get a uniformly random scorekeeper
pub async fn get_random_scorekeeper(pool: &PgPool) -> Result<Scorekeeper> {
    let repo = ScorekeeperRepository::new(pool);
    let id = repo.random_id().await?;
    repo.find_by_id(id).await
}

/// List details for all scorekeepers
pub async fn list_scorekeeper_details(pool: &PgPool) -> Result<Vec<ScorekeeperDetailResponse>> {
    ScorekeeperRepository::new(pool).list_details().await
}

/// Get scorekeeper details with appearance history
pub async fn get_scorekeeper_details_by_id(
    pool: &PgPool,
    id: i32,
) -> Result<ScorekeeperDetailResponse> {
    let id = resolve::entity_id(id)?;
    ScorekeeperRepository::new(pool).find_detail_by_id(id).await
}

pub async fn get_scorekeeper_details_by_slug(
    pool: &PgPool,
    slug: &str,
) -> Result<ScorekeeperDetailResponse> {
    let slug = resolve::slug(slug)?;
    ScorekeeperRepository::new(pool)
        .find_detail_by_slug(slug)
        .await
}

/// Get details for a uniformly random scorekeeper
pub async fn get_random_scorekeeper_details(pool: &PgPool) -> Result<ScorekeeperDetailResponse> {
    let repo = ScorekeeperRepository::new(pool);
    let id = repo.random_id().await?;
    repo.find_detail_by_id(id).await
}
