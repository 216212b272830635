use sqlx::PgPool;
use storage::{
    error::Result, models::PostalAbbreviation,
    repository::postal_abbreviation::PostalAbbreviationRepository, resolve,
};

/// List all abbreviation strings
pub async fn list_abbreviations(pool: &PgPool) -> Result<Vec<String>> {
    PostalAbbreviationRepository::new(pool)
        .list_abbreviations()
        .await
}

/// List all abbreviation rows with names and countries
pub async fn list_abbreviation_details(pool: &PgPool) -> Result<Vec<PostalAbbreviation>> {
    PostalAbbreviationRepository::new(pool).list_details().await
}

/// Get one abbreviation row
pub async fn get_abbreviation_details(
    pool: &PgPool,
    abbreviation: &str,
) -> Result<PostalAbbreviation> {
    let abbreviation = resolve::slug(abbreviation)?;
    PostalAbbreviationRepository::new(pool)
        .find_by_abbreviation(abbreviation)
        .await
}
