use sqlx::PgPool;
use storage::{
    dto::host::HostDetailResponse, error::Result, models::Host, repository::host::HostRepository,
    resolve,
};

/// List all hosts
pub async fn list_hosts(pool: &PgPool) -> Result<Vec<Host>> {
    HostRepository::new(pool).list().await
}

/// Get host by ID
pub async fn get_host_by_id(pool: &PgPool, id: i32) -> Result<Host> {
    let id = resolve::entity_id(id)?;
    HostRepository::new(pool).find_by_id(id).await
}

/// Get host by slug
pub async fn get_host_by_slug(pool: &PgPool, slug: &str) -> Result<Host> {
    let slug = resolve::slug(slug)?;
    HostRepository::new(pool).find_by_slug(slug).await
}

/// Get a uniformly random host
pub async fn get_random_host(pool: &PgPool) -> Result<Host> {
    let repo = HostRepository::new(pool);
    let id = repo.random_id().await?;
    repo.find_by_id(id).await
}

/// List details for all hosts
pub async fn list_host_details(pool: &PgPool) -> Result<Vec<HostDetailResponse>> {
    HostRepository::new(pool).list_details().await
}

/// Get host details with appearance history
pub async fn get_host_details_by_id(pool: &PgPool, id: i32) -> Result<HostDetailResponse> {
    let id = resolve::entity_id(id)?;
    HostRepository::new(pool).find_detail_by_id(id).await
}

pub async fn get_host_details_by_slug(pool: &PgPool, slug: &str) -> Result<HostDetailResponse> {
    let slug = resolve::slug(slug)?;
    HostRepository::new(pool).find_detail_by_slug(slug).await
}

/// Get details for a uniformly random host
pub async fn get_random_host_details(pool: &PgPool) -> Result<HostDetailResponse> {
    let repo = HostRepository::new(pool);
    let id = repo.random_id().await?;
    repo.find_detail_by_id(id).await
}
