use sqlx::PgPool;
use storage::{
    dto::panelist::{PanelistDetailResponse, PanelistScoresResponse},
    error::Result,
    models::Panelist,
    repository::panelist::PanelistRepository,
    resolve,
    scoring::ScoringMode,
};

/// List all panelists
pub async fn list_panelists(pool: &PgPool) -> Result<Vec<Panelist>> {
    PanelistRepository::new(pool).list().await
}

/// Get panelist by ID
pub async fn get_panelist_by_id(pool: &PgPool, id: i32) -> Result<Panelist> {
    let id = resolve::entity_id(id)?;
    PanelistRepository::new(pool).find_by_id(id).await
}

/// Get panelist by slug
pub async fn get_panelist_by_slug(pool: &PgPool, slug: &str) -> Result<Panelist> {
    let slug = resolve::slug(slug)?;
    PanelistRepository::new(pool).find_by_slug(slug).await
}

/// Get a uniformly random panelist
pub async fn get_random_panelist(pool: &PgPool) -> Result<Panelist> {
    let repo = PanelistRepository::new(pool);
    let id = repo.random_id().await?;
    repo.find_by_id(id).await
}

/// List details for all panelists
pub async fn list_panelist_details(
    pool: &PgPool,
    mode: ScoringMode,
) -> Result<Vec<PanelistDetailResponse>> {
    PanelistRepository::new(pool).list_details(mode).await
}

/// Get panelist details: appearance history, statistics, ranks and bluffs
pub async fn get_panelist_details_by_id(
    pool: &PgPool,
    id: i32,
    mode: ScoringMode,
) -> Result<PanelistDetailResponse> {
    let id = resolve::entity_id(id)?;
    PanelistRepository::new(pool)
        .find_detail_by_id(id, mode)
        .await
}

pub async fn get_panelist_details_by_slug(
    pool: &PgPool,
    slug: &str,
    mode: ScoringMode,
) -> Result<PanelistDetailResponse> {
    let slug = resolve::slug(slug)?;
    PanelistRepository::new(pool)
        .find_detail_by_slug(slug, mode)
        .await
}

/// Get details for a uniformly random panelist
pub async fn get_random_panelist_details(
    pool: &PgPool,
    mode: ScoringMode,
) -> Result<PanelistDetailResponse> {
    let repo = PanelistRepository::new(pool);
    let id = repo.random_id().await?;
    repo.find_detail_by_id(id, mode).await
}

/// Ordered (date, score) pairs for one panelist
pub async fn get_panelist_scores_by_id(
    pool: &PgPool,
    id: i32,
    mode: ScoringMode,
) -> Result<PanelistScoresResponse> {
    let id = resolve::entity_id(id)?;
    PanelistRepository::new(pool).scores_by_id(id, mode).await
}

pub async fn get_panelist_scores_by_slug(
    pool: &PgPool,
    slug: &str,
    mode: ScoringMode,
) -> Result<PanelistScoresResponse> {
    let slug = resolve::slug(slug)?;
    PanelistRepository::new(pool)
        .scores_by_slug(slug, mode)
        .await
}
