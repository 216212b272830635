use sqlx::PgPool;
use storage::{
    error::Result, models::Pronouns, repository::pronouns::PronounsRepository, resolve,
};

/// List all pronouns reference rows
pub async fn list_pronouns(pool: &PgPool) -> Result<Vec<Pronouns>> {
    PronounsRepository::new(pool).list().await
}

/// Get pronouns row by ID
pub async fn get_pronouns_by_id(pool: &PgPool, id: i32) -> Result<Pronouns> {
    let id = resolve::entity_id(id)?;
    PronounsRepository::new(pool).find_by_id(id).await
}
